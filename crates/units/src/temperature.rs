use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Offset between the Kelvin and Celsius scales
pub const CELSIUS_OFFSET: f64 = 273.15;

/// An absolute temperature using f64 precision.
///
/// Base unit: kelvin. Radiative balance works on the absolute scale, so
/// equilibrium results are stored in kelvin and converted to Celsius only for
/// reporting.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let sun = Temperature::from_kelvin(5780.0);
/// let module = Temperature::from_celsius(21.0);
///
/// assert!((module.to_kelvin() - 294.15).abs() < 1e-9);
/// assert!(sun > module);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Absolute zero
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius.
    ///
    /// Converts Celsius to Kelvin: K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + CELSIUS_OFFSET)
    }

    /// Creates a new `Temperature` from a value in Fahrenheit.
    pub fn from_fahrenheit(value: f64) -> Self {
        Self((value - 32.0) * 5.0 / 9.0 + CELSIUS_OFFSET)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius (°C = K - 273.15).
    pub fn to_celsius(&self) -> f64 {
        self.0 - CELSIUS_OFFSET
    }

    /// Converts the temperature to Fahrenheit.
    pub fn to_fahrenheit(&self) -> f64 {
        (self.0 - CELSIUS_OFFSET) * 9.0 / 5.0 + 32.0
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Ratio of two absolute temperatures
impl Div for Temperature {
    type Output = f64;

    fn div(self, rhs: Temperature) -> f64 {
        self.0 / rhs.0
    }
}
