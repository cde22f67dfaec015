use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

use crate::area::Area;
use crate::power::Power;

/// A radiant flux density (irradiance or exitance) using f64 precision.
///
/// Base unit: W/m². Multiplying by an [`Area`] yields the intercepted
/// [`Power`].
///
/// # Examples
///
/// ```rust
/// use units::{Area, HeatFlux};
///
/// let solar = HeatFlux::from_watts_per_m2(1414.0);
/// let collected = solar * Area::from_m2(2.0);
/// assert_eq!(collected.to_watts(), 2828.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HeatFlux(f64); // Base unit: W/m²

impl HeatFlux {
    /// Creates a zero flux value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `HeatFlux` from a value in W/m².
    pub fn from_watts_per_m2(value: f64) -> Self {
        Self(value)
    }

    /// Returns the flux in W/m².
    pub fn to_watts_per_m2(&self) -> f64 {
        self.0
    }

    /// Whether the flux carries no power
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Add for HeatFlux {
    type Output = HeatFlux;

    fn add(self, rhs: HeatFlux) -> HeatFlux {
        HeatFlux(self.0 + rhs.0)
    }
}

impl Sub for HeatFlux {
    type Output = HeatFlux;

    fn sub(self, rhs: HeatFlux) -> HeatFlux {
        HeatFlux(self.0 - rhs.0)
    }
}

impl Mul<f64> for HeatFlux {
    type Output = HeatFlux;

    fn mul(self, rhs: f64) -> HeatFlux {
        HeatFlux(self.0 * rhs)
    }
}

impl Mul<HeatFlux> for f64 {
    type Output = HeatFlux;

    fn mul(self, rhs: HeatFlux) -> HeatFlux {
        rhs * self
    }
}

/// Flux collected over an area
impl Mul<Area> for HeatFlux {
    type Output = Power;

    fn mul(self, rhs: Area) -> Power {
        Power::from_watts(self.0 * rhs.to_m2())
    }
}

impl Mul<HeatFlux> for Area {
    type Output = Power;

    fn mul(self, rhs: HeatFlux) -> Power {
        rhs * self
    }
}
