//! WASM bindings for spacecraft thermal equilibrium analysis.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, {
//!     compute_orbital_flux,
//!     compute_cascaded_case,
//!     material_presets,
//! } from 'thermal-wasm';
//!
//! await init();
//!
//! // Sunlit low Earth orbit with the default Earth/Sun constants
//! const flux = compute_orbital_flux(250e3, false);
//! console.log(`Solar ${flux.solarFlux} W/m², IR ${flux.irFlux} W/m²`);
//!
//! const osr = material_presets().find((m) => m.name === "osr");
//! const radiator = { id: "radiator", emissionTopology: "shell", propertyModel: "uniform",
//!     geometry: { type: "plate", a: 2.2, b: 2.5 }, optics: osr.optics, heatDissipation: 2300 };
//! const result = compute_cascaded_case(250e3, false, radiator, [smu, battery]);
//! for (const module of result.modules) {
//!     console.log(module.id, module.result?.temperature ?? module.error);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use thermal::PhysicalConstants;

mod case;

pub use case::{CaseOutput, ModuleOutcome};

// Type aliases for unit types (serialized as numbers via serde(transparent))
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Length in meters */
export type Length = number;
/** Area in square meters */
export type Area = number;
/** Angle in degrees */
export type Angle = number;
/** Temperature in Kelvin */
export type Temperature = number;
/** Power in watts */
export type Power = number;
/** Heat flux in W/m² */
export type HeatFlux = number;
"#;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Constants passed from JS, or the Earth/Sun defaults when omitted.
fn constants_from_js(value: JsValue) -> Result<PhysicalConstants, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(PhysicalConstants::default());
    }
    from_js(value)
}

// =============================================================================
// Reference data
// =============================================================================

/// The default physical constants: the Sun, and Earth at 1.471e11 m.
///
/// Pass a modified copy as the optional `constants` argument of the compute
/// functions to model another star or planet.
#[wasm_bindgen]
pub fn default_constants() -> Result<JsValue, JsError> {
    to_js(&PhysicalConstants::default())
}

/// Built-in surface finishes (`osr`, `blanket`, `blackbody`).
#[wasm_bindgen]
pub fn material_presets() -> Result<JsValue, JsError> {
    to_js(&thermal::material_presets())
}

// =============================================================================
// Calculations
// =============================================================================

/// Incident orbital flux at an altitude above the central body.
///
/// # Arguments
/// * `altitude_m` - Altitude above the surface in meters
/// * `eclipse` - Whether the spacecraft is in the planet's shadow
/// * `constants` - Optional PhysicalConstants; defaults to Earth orbit
#[wasm_bindgen]
pub fn compute_orbital_flux(
    altitude_m: f64,
    eclipse: bool,
    constants: JsValue,
) -> Result<JsValue, JsError> {
    let constants = constants_from_js(constants)?;
    let flux = thermal::compute_orbital_flux(&constants, altitude_m, eclipse)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&flux)
}

/// Equilibrium of one body in a given flux environment.
///
/// # Arguments
/// * `body` - A BodyDescriptor
/// * `flux` - An OrbitalFlux, e.g. from `compute_orbital_flux`
/// * `constants` - Optional PhysicalConstants
#[wasm_bindgen]
pub fn compute_body_equilibrium(
    body: JsValue,
    flux: JsValue,
    constants: JsValue,
) -> Result<JsValue, JsError> {
    let body: thermal::BodyDescriptor = from_js(body)?;
    let flux: thermal::OrbitalFlux = from_js(flux)?;
    let constants = constants_from_js(constants)?;
    let result = thermal::compute_body_equilibrium(&constants, &body, &flux)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&result)
}

/// Cascaded case: the outer body in orbit, then each module inside it.
///
/// A module that cannot be solved carries an `error` message instead of a
/// `result`; the other modules are unaffected.
///
/// # Arguments
/// * `altitude_m` - Altitude above the surface in meters
/// * `eclipse` - Whether the spacecraft is in the planet's shadow
/// * `outer` - BodyDescriptor of the enclosing structure
/// * `modules` - Array of BodyDescriptors mounted inside it
/// * `constants` - Optional PhysicalConstants
#[wasm_bindgen]
pub fn compute_cascaded_case(
    altitude_m: f64,
    eclipse: bool,
    outer: JsValue,
    modules: JsValue,
    constants: JsValue,
) -> Result<JsValue, JsError> {
    let outer: thermal::BodyDescriptor = from_js(outer)?;
    let modules: Vec<thermal::BodyDescriptor> = from_js(modules)?;
    let constants = constants_from_js(constants)?;
    let output = case::cascaded_case(&constants, altitude_m, eclipse, &outer, &modules)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&output)
}
