use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use crate::area::Area;
use crate::heat_flux::HeatFlux;

/// A power (energy rate) quantity using f64 precision.
///
/// Base unit: watt. Used for internal heat dissipation and for absorbed or
/// emitted radiant power.
///
/// # Examples
///
/// ```rust
/// use units::{Area, Power};
///
/// let radiator = Power::from_kilowatts(2.3);
/// assert_eq!(radiator.to_watts(), 2300.0);
///
/// let density = radiator / Area::from_m2(5.5);
/// assert!((density.to_watts_per_m2() - 418.1818).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Power(f64); // Base unit: W

impl Power {
    /// Creates a zero power value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Power` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Power` from a value in kilowatts.
    pub fn from_kilowatts(value: f64) -> Self {
        Self(value * 1e3)
    }

    /// Returns the power in watts.
    pub fn to_watts(&self) -> f64 {
        self.0
    }

    /// Converts the power to kilowatts.
    pub fn to_kilowatts(&self) -> f64 {
        self.0 / 1e3
    }
}

impl Add for Power {
    type Output = Power;

    fn add(self, rhs: Power) -> Power {
        Power(self.0 + rhs.0)
    }
}

impl Sub for Power {
    type Output = Power;

    fn sub(self, rhs: Power) -> Power {
        Power(self.0 - rhs.0)
    }
}

impl Mul<f64> for Power {
    type Output = Power;

    fn mul(self, rhs: f64) -> Power {
        Power(self.0 * rhs)
    }
}

impl Div<f64> for Power {
    type Output = Power;

    fn div(self, rhs: f64) -> Power {
        Power(self.0 / rhs)
    }
}

/// Power spread over an area gives a flux density
impl Div<Area> for Power {
    type Output = HeatFlux;

    fn div(self, rhs: Area) -> HeatFlux {
        HeatFlux::from_watts_per_m2(self.0 / rhs.to_m2())
    }
}

impl Sum for Power {
    fn sum<I: Iterator<Item = Power>>(iter: I) -> Power {
        iter.fold(Power::zero(), |acc, p| acc + p)
    }
}
