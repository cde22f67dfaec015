use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Neg, Sub};

/// A plane angle using f64 precision.
///
/// Base unit: degree, the convention used for face incidence angles in
/// thermal case definitions. Trigonometric helpers convert to radians
/// internally.
///
/// # Examples
///
/// ```rust
/// use units::Angle;
///
/// let oblique = Angle::from_degrees(45.0);
/// assert!((oblique.to_radians() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// assert!((oblique.cos() - 0.5_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: degree

impl Angle {
    /// Normal incidence
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Angle` from a value in degrees.
    pub fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Angle` from a value in radians.
    pub fn from_radians(value: f64) -> Self {
        Self(value * 180.0 / PI)
    }

    /// Returns the angle in degrees.
    pub fn to_degrees(&self) -> f64 {
        self.0
    }

    /// Converts the angle to radians.
    pub fn to_radians(&self) -> f64 {
        PI * self.0 / 180.0
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    /// Absolute value of the angle
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}
