//! Steady-state radiative thermal equilibrium of orbiting spacecraft.
//!
//! The engine combines three pieces:
//!
//! - [`flux`]: solar, albedo and planetary IR flux at an orbital altitude
//! - [`geometry`]: total and projected surface areas of simple shapes
//! - [`solver`]: the fourth-power energy balance of one body
//!
//! and cascades them in [`pipeline`]: the outer structure is solved against
//! the orbital environment, and its re-radiated IR becomes the only heat
//! source (besides their own dissipation) for internal modules.
//!
//! All temperatures are instantaneous equilibria; there is no thermal
//! capacitance or transient.
//!
//! # Example
//! ```
//! use thermal::{evaluate_case, Body, EmissionTopology, Geometry, OpticalProperties, PhysicalConstants};
//! use units::{Length, Power};
//!
//! let constants = PhysicalConstants::default();
//! let radiator = Body::uniform(
//!     "radiator",
//!     EmissionTopology::Shell,
//!     Geometry::plate(2.2, 2.5),
//!     OpticalProperties::optical_solar_reflector(),
//!     Power::from_watts(2300.0),
//! )?;
//! let module = Body::uniform(
//!     "smu",
//!     EmissionTopology::Solid,
//!     Geometry::cuboid(0.42, 0.27, 0.276),
//!     OpticalProperties::blackbody(),
//!     Power::from_watts(130.0),
//! )?;
//!
//! let hot = evaluate_case(&constants, Length::from_km(250.0), false, &radiator, &[module])?;
//! let smu = hot.modules[0].as_ref().unwrap();
//! // A dissipating module runs warmer than the enclosure around it
//! assert!(smu.temperature > hot.outer.temperature);
//! # Ok::<(), thermal::ThermalError>(())
//! ```

pub mod api;
pub mod body;
pub mod constants;
pub mod error;
pub mod flux;
pub mod geometry;
pub mod optics;
pub mod pipeline;
pub mod solver;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod flux_test;

pub use api::{compute_body_equilibrium, compute_cascaded_case, compute_orbital_flux};
pub use body::{
    Body, BodyDescriptor, EmissionTopology, ExposureFace, ExposureFaces, FaceDescriptors,
    PropertyModel, PropertyModelKind, Shading, ViewAngles,
};
pub use constants::{CentralBody, PhysicalConstants, Radiator};
pub use error::{ConfigurationError, DomainError, ThermalError};
pub use flux::{OrbitalFlux, OrbitalFluxModel};
pub use geometry::{AreaMode, Geometry};
pub use optics::{material_presets, Material, OpticalProperties};
pub use pipeline::{
    evaluate_assembly_case, evaluate_case, evaluate_orbital_case, AssemblyCaseResult, CaseResult,
    OrbitalCase,
};
pub use solver::{solve, EquilibriumResult, HeatBudget};
