use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::area::Area;

pub const AU_TO_M: f64 = 1.496e11;
pub const KM_TO_M: f64 = 1e3;
pub const CM_TO_M: f64 = 1e-2;
pub const MM_TO_M: f64 = 1e-3;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;
/// Solar radius in meters
pub const SOLAR_RADIUS_M: f64 = 6.95e8;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with meters as the base unit.
/// Spacecraft panel dimensions, orbital altitudes and planetary radii all
/// share this base so they can be combined without conversion factors.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let altitude = Length::from_km(250.0);
/// let panel_edge = Length::from_meters(2.2);
/// let earth = Length::from_earth_radii(1.0);
///
/// assert_eq!(altitude.to_m(), 2.5e5);
/// assert!(earth > altitude + panel_edge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meter

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value * CM_TO_M)
    }

    /// Creates a new `Length` from a value in millimeters.
    pub fn from_mm(value: f64) -> Self {
        Self(value * MM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 / CM_TO_M
    }

    /// Converts the length to millimeters.
    pub fn to_mm(&self) -> f64 {
        self.0 / MM_TO_M
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_M
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_M
    }

    /// Whether the value is finite and strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Square of the length as an area
    pub fn squared(&self) -> Area {
        *self * *self
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Length × Length yields an area
impl Mul for Length {
    type Output = Area;

    fn mul(self, rhs: Self) -> Area {
        Area::from_m2(self.0 * rhs.0)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
