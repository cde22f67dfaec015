//! Physical quantities for radiative thermal analysis.
//!
//! Each quantity is an f64 newtype with a fixed SI base unit and serializes
//! as a bare number.

pub mod angle;
pub mod area;
pub mod heat_flux;
pub mod length;
pub mod power;
pub mod temperature;

#[cfg(test)]
mod area_test;
#[cfg(test)]
mod length_test;

pub use angle::Angle;
pub use area::Area;
pub use heat_flux::HeatFlux;
pub use length::Length;
pub use power::Power;
pub use temperature::Temperature;
