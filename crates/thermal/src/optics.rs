//! Surface optical properties.
//!
//! Absorptivity and emissivity are split into a visible band (sunlight and
//! albedo) and an infrared band (planetary and enclosure emission, and the
//! body's own thermal emission).

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::DomainError;

/// Band-averaged absorptivity and emissivity of a surface finish
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct OpticalProperties {
    pub absorptivity_ir: f64,
    pub absorptivity_visible: f64,
    pub emissivity_ir: f64,
    pub emissivity_visible: f64,
}

impl OpticalProperties {
    pub fn new(
        absorptivity_ir: f64,
        absorptivity_visible: f64,
        emissivity_ir: f64,
        emissivity_visible: f64,
    ) -> Self {
        Self {
            absorptivity_ir,
            absorptivity_visible,
            emissivity_ir,
            emissivity_visible,
        }
    }

    /// Same absorptivity in both bands and the same emissivity in both bands
    pub fn uniform(absorptivity: f64, emissivity: f64) -> Self {
        Self::new(absorptivity, absorptivity, emissivity, emissivity)
    }

    /// Optical solar reflector: rejects sunlight, radiates well in the IR
    pub fn optical_solar_reflector() -> Self {
        Self::new(0.83, 0.06, 0.83, 0.06)
    }

    /// Multilayer insulation blanket: nearly IR-opaque to absorption
    pub fn multilayer_blanket() -> Self {
        Self::new(0.003, 0.83, 0.83, 0.83)
    }

    /// Black-painted or otherwise grey surface
    pub fn blackbody() -> Self {
        Self::uniform(0.83, 0.83)
    }

    /// Solar absorptance to IR emittance ratio (α/ε)
    pub fn alpha_over_epsilon(&self) -> f64 {
        self.absorptivity_visible / self.emissivity_ir
    }

    /// Check that every coefficient lies in [0, 1].
    pub fn validate(&self) -> Result<(), DomainError> {
        let coefficients = [
            ("absorptivityIr", self.absorptivity_ir),
            ("absorptivityVisible", self.absorptivity_visible),
            ("emissivityIr", self.emissivity_ir),
            ("emissivityVisible", self.emissivity_visible),
        ];
        for (name, value) in coefficients {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::OpticalPropertyOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// A named surface finish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Material {
    pub name: String,
    pub optics: OpticalProperties,
}

/// The built-in surface finishes
pub fn material_presets() -> Vec<Material> {
    [
        ("osr", OpticalProperties::optical_solar_reflector()),
        ("blanket", OpticalProperties::multilayer_blanket()),
        ("blackbody", OpticalProperties::blackbody()),
    ]
    .into_iter()
    .map(|(name, optics)| Material {
        name: name.to_string(),
        optics,
    })
    .collect()
}
