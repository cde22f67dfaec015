//! Physical constants of the radiative environment.
//!
//! The constant set is a plain value injected into every flux and solve call,
//! so an analysis of another central body (Mars orbit, lunar orbit) only needs
//! a different `PhysicalConstants` value.

use serde::{Deserialize, Serialize};
use units::{Length, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::ConfigurationError;

/// Stefan–Boltzmann constant (W·m⁻²·K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.6703e-8;

/// Blackbody temperature of the Sun (K)
pub const SUN_TEMPERATURE_K: f64 = 5780.0;
/// Radius of the Sun (m)
pub const SUN_RADIUS_M: f64 = 6.95e8;

/// Blackbody temperature of the Earth (K)
pub const EARTH_TEMPERATURE_K: f64 = 255.0;
/// Radius of the Earth (m)
pub const EARTH_RADIUS_M: f64 = 6.371e6;
/// Sun–Earth distance used for the solar constant (m)
pub const SUN_EARTH_DISTANCE_M: f64 = 1.471e11;
/// Bond albedo of the Earth
pub const EARTH_ALBEDO: f64 = 0.34;

/// A spherical blackbody radiator (the star)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Radiator {
    /// Photospheric radius
    pub radius: Length,
    /// Blackbody temperature
    pub temperature: Temperature,
}

impl Radiator {
    /// The Sun
    pub fn sun() -> Self {
        Self {
            radius: Length::from_meters(SUN_RADIUS_M),
            temperature: Temperature::from_kelvin(SUN_TEMPERATURE_K),
        }
    }
}

impl Default for Radiator {
    fn default() -> Self {
        Self::sun()
    }
}

/// The planet the spacecraft orbits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CentralBody {
    /// Mean radius
    pub radius: Length,
    /// Effective blackbody temperature of the planet's own emission
    pub temperature: Temperature,
    /// Distance from the star
    pub orbit_distance: Length,
    /// Bond albedo (0-1)
    pub albedo: f64,
}

impl CentralBody {
    /// The Earth
    pub fn earth() -> Self {
        Self {
            radius: Length::from_meters(EARTH_RADIUS_M),
            temperature: Temperature::from_kelvin(EARTH_TEMPERATURE_K),
            orbit_distance: Length::from_meters(SUN_EARTH_DISTANCE_M),
            albedo: EARTH_ALBEDO,
        }
    }
}

impl Default for CentralBody {
    fn default() -> Self {
        Self::earth()
    }
}

/// The constant set of one analysis.
///
/// Defaults describe a spacecraft orbiting the Earth. Deserialization fills
/// absent fields from the defaults, so a partial record overrides only what
/// it names.
///
/// # Examples
/// ```
/// use thermal::PhysicalConstants;
/// use units::Length;
///
/// // Mars orbit: smaller, colder, farther from the Sun
/// let mars = PhysicalConstants::default()
///     .with_central_body_radius(Length::from_km(3389.5))
///     .with_central_body_temperature(210.0)
///     .with_orbit_distance(Length::from_au(1.52))
///     .with_albedo_coefficient(0.25);
/// assert!(mars.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PhysicalConstants {
    /// Stefan–Boltzmann constant (W·m⁻²·K⁻⁴)
    pub stefan_boltzmann: f64,
    /// The illuminating star
    pub sun: Radiator,
    /// The orbited planet
    pub central_body: CentralBody,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            stefan_boltzmann: STEFAN_BOLTZMANN,
            sun: Radiator::sun(),
            central_body: CentralBody::earth(),
        }
    }
}

impl PhysicalConstants {
    pub fn with_central_body_radius(mut self, radius: Length) -> Self {
        self.central_body.radius = radius;
        self
    }

    /// Planet blackbody temperature in Kelvin
    pub fn with_central_body_temperature(mut self, kelvin: f64) -> Self {
        self.central_body.temperature = Temperature::from_kelvin(kelvin);
        self
    }

    pub fn with_orbit_distance(mut self, distance: Length) -> Self {
        self.central_body.orbit_distance = distance;
        self
    }

    pub fn with_albedo_coefficient(mut self, albedo: f64) -> Self {
        self.central_body.albedo = albedo;
        self
    }

    pub fn with_stefan_boltzmann(mut self, sigma: f64) -> Self {
        self.stefan_boltzmann = sigma;
        self
    }

    pub fn with_sun(mut self, sun: Radiator) -> Self {
        self.sun = sun;
        self
    }

    /// Check that every constant is physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let positive = [
            ("stefanBoltzmann", self.stefan_boltzmann),
            ("sun.radius", self.sun.radius.to_m()),
            ("sun.temperature", self.sun.temperature.to_kelvin()),
            ("centralBody.radius", self.central_body.radius.to_m()),
            ("centralBody.temperature", self.central_body.temperature.to_kelvin()),
            ("centralBody.orbitDistance", self.central_body.orbit_distance.to_m()),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigurationError::InvalidConstant { name, value });
            }
        }

        let albedo = self.central_body.albedo;
        if !(0.0..=1.0).contains(&albedo) {
            return Err(ConfigurationError::InvalidConstant {
                name: "centralBody.albedo",
                value: albedo,
            });
        }
        Ok(())
    }
}
