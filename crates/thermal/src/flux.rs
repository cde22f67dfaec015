//! Orbital radiative environment.
//!
//! Three sources heat a body in orbit:
//!
//! - **Direct solar**: the star's blackbody output diluted to the planet's
//!   orbital distance. Independent of altitude.
//! - **Albedo**: sunlight reflected by the planet, spread over the planet's
//!   disk and scaled by how much of the sky the planet fills.
//! - **Planetary IR**: the planet's own blackbody emission at its surface,
//!   scaled by the same view factor.
//!
//! In eclipse the planet blocks direct and reflected sunlight; its IR
//! emission is unaffected.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{HeatFlux, Length, Power, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::constants::PhysicalConstants;
use crate::error::{DomainError, Result};

/// Incident radiant flux densities at a point in orbit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct OrbitalFlux {
    /// Direct stellar irradiance
    pub solar_flux: HeatFlux,
    /// Planet-reflected stellar irradiance
    pub albedo_flux: HeatFlux,
    /// Planetary (or enclosure) infrared irradiance
    pub ir_flux: HeatFlux,
}

impl OrbitalFlux {
    pub fn new(solar_flux: HeatFlux, albedo_flux: HeatFlux, ir_flux: HeatFlux) -> Self {
        Self {
            solar_flux,
            albedo_flux,
            ir_flux,
        }
    }

    /// Deep space: nothing incident
    pub fn zero() -> Self {
        Self::default()
    }

    /// An infrared-only environment, such as the cavity inside a shell
    pub fn ir_only(ir_flux: HeatFlux) -> Self {
        Self {
            ir_flux,
            ..Self::default()
        }
    }

    /// Sum of all three components
    pub fn total(&self) -> HeatFlux {
        self.solar_flux + self.albedo_flux + self.ir_flux
    }
}

/// Power radiated by a spherical blackbody: P = 4π r² σ T⁴
pub fn blackbody_power(radius: Length, temperature: Temperature, sigma: f64) -> Power {
    Power::from_watts(4.0 * PI * radius.powi(2) * sigma * temperature.powi(4))
}

/// Flux density of an isotropic source's power at a distance: P / (4π d²)
pub fn irradiance_at_distance(power: Power, distance: Length) -> HeatFlux {
    HeatFlux::from_watts_per_m2(power.to_watts() / (4.0 * PI * distance.powi(2)))
}

/// Fraction of the sky subtended by a sphere of `radius` seen from `altitude`
/// above its surface: F = 1 − sqrt(1 − (r / (r + h))²).
///
/// F = 1 at the surface and tends to 0 as the altitude grows.
///
/// # Examples
/// ```
/// use thermal::flux::view_factor;
/// use units::Length;
///
/// let earth = Length::from_km(6371.0);
/// assert_eq!(view_factor(earth, Length::zero()), 1.0);
/// assert!(view_factor(earth, Length::from_km(36_000.0)) < 0.02);
/// ```
pub fn view_factor(radius: Length, altitude: Length) -> f64 {
    let ratio = radius / (radius + altitude);
    1.0 - (1.0 - ratio * ratio).max(0.0).sqrt()
}

/// Evaluates the orbital flux environment for one constant set.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalFluxModel {
    constants: PhysicalConstants,
}

impl OrbitalFluxModel {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Direct solar irradiance at the planet's orbit
    pub fn solar_irradiance(&self) -> HeatFlux {
        let sun = &self.constants.sun;
        let p_sun = blackbody_power(sun.radius, sun.temperature, self.constants.stefan_boltzmann);
        irradiance_at_distance(p_sun, self.constants.central_body.orbit_distance)
    }

    /// Planetary emission at the planet's surface
    pub fn planetary_irradiance(&self) -> HeatFlux {
        let planet = &self.constants.central_body;
        let p_planet = blackbody_power(
            planet.radius,
            planet.temperature,
            self.constants.stefan_boltzmann,
        );
        irradiance_at_distance(p_planet, planet.radius)
    }

    /// Reflected sunlight leaving the planet's disk
    pub fn albedo_irradiance(&self) -> HeatFlux {
        let planet = &self.constants.central_body;
        let cross_section = PI * planet.radius.powi(2);
        let p_albedo = cross_section * self.solar_irradiance().to_watts_per_m2() * planet.albedo;
        HeatFlux::from_watts_per_m2(p_albedo / cross_section)
    }

    /// Incident flux at `altitude` above the planet's surface.
    ///
    /// # Errors
    /// [`ConfigurationError`](crate::ConfigurationError) when the constants
    /// fail validation, [`DomainError::InvalidAltitude`] when the altitude is
    /// negative or not finite, and [`DomainError::NonFinite`] when a flux
    /// component overflows.
    ///
    /// # Examples
    /// ```
    /// use thermal::{OrbitalFluxModel, PhysicalConstants};
    /// use units::Length;
    ///
    /// let model = OrbitalFluxModel::new(PhysicalConstants::default());
    /// let sunlit = model.flux_at(Length::from_km(250.0), false).unwrap();
    /// let shadow = model.flux_at(Length::from_km(250.0), true).unwrap();
    ///
    /// assert!(sunlit.solar_flux.to_watts_per_m2() > 1300.0);
    /// assert_eq!(shadow.solar_flux.to_watts_per_m2(), 0.0);
    /// assert_eq!(shadow.ir_flux, sunlit.ir_flux);
    /// ```
    pub fn flux_at(&self, altitude: Length, eclipse: bool) -> Result<OrbitalFlux> {
        self.constants.validate()?;
        let h = altitude.to_m();
        if !h.is_finite() || h < 0.0 {
            return Err(DomainError::InvalidAltitude(h).into());
        }

        let factor = view_factor(self.constants.central_body.radius, altitude);
        let ir_flux = self.planetary_irradiance() * factor;

        let flux = if eclipse {
            OrbitalFlux::ir_only(ir_flux)
        } else {
            OrbitalFlux::new(
                self.solar_irradiance(),
                self.albedo_irradiance() * factor,
                ir_flux,
            )
        };

        let components = [
            ("solarFlux", flux.solar_flux),
            ("albedoFlux", flux.albedo_flux),
            ("irFlux", flux.ir_flux),
        ];
        for (name, value) in components {
            if !value.to_watts_per_m2().is_finite() {
                return Err(DomainError::NonFinite(name).into());
            }
        }

        debug!(
            altitude_m = h,
            eclipse,
            view_factor = factor,
            solar = flux.solar_flux.to_watts_per_m2(),
            albedo = flux.albedo_flux.to_watts_per_m2(),
            ir = flux.ir_flux.to_watts_per_m2(),
            "orbital flux"
        );
        Ok(flux)
    }
}
