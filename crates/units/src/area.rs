use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use crate::length::CM_TO_M;

/// A surface area using f64 precision.
///
/// Base unit: square meter. Produced by multiplying two [`Length`](crate::Length)
/// values or directly from a face area.
///
/// # Examples
///
/// ```rust
/// use units::{Area, Length};
///
/// let plate = Length::from_meters(2.2) * Length::from_meters(2.5);
/// assert!((plate.to_m2() - 5.5).abs() < 1e-12);
///
/// let sensor = Area::from_cm2(4.0);
/// assert!((sensor.to_m2() - 4e-4).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Area(f64); // Base unit: m²

impl Area {
    /// Creates a zero area value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Area` from a value in square meters.
    pub fn from_m2(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Area` from a value in square centimeters.
    pub fn from_cm2(value: f64) -> Self {
        Self(value * CM_TO_M * CM_TO_M)
    }

    /// Returns the area in square meters.
    pub fn to_m2(&self) -> f64 {
        self.0
    }

    /// Converts the area to square centimeters.
    pub fn to_cm2(&self) -> f64 {
        self.0 / (CM_TO_M * CM_TO_M)
    }

    /// Whether the area is finite and not negative
    pub fn is_non_negative(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl Add for Area {
    type Output = Area;

    fn add(self, rhs: Area) -> Area {
        Area(self.0 + rhs.0)
    }
}

impl Sub for Area {
    type Output = Area;

    fn sub(self, rhs: Area) -> Area {
        Area(self.0 - rhs.0)
    }
}

impl Mul<f64> for Area {
    type Output = Area;

    fn mul(self, rhs: f64) -> Area {
        Area(self.0 * rhs)
    }
}

impl Mul<Area> for f64 {
    type Output = Area;

    fn mul(self, rhs: Area) -> Area {
        rhs * self
    }
}

impl Div<f64> for Area {
    type Output = Area;

    fn div(self, rhs: f64) -> Area {
        Area(self.0 / rhs)
    }
}

/// Ratio of two areas is dimensionless
impl Div for Area {
    type Output = f64;

    fn div(self, rhs: Area) -> f64 {
        self.0 / rhs.0
    }
}

impl Sum for Area {
    fn sum<I: Iterator<Item = Area>>(iter: I) -> Area {
        iter.fold(Area::zero(), |acc, a| acc + a)
    }
}
