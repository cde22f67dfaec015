//! Serializable cascade output.
//!
//! [`thermal::CaseResult`] holds a `Result` per module, which has no
//! JavaScript form; here each slot becomes either a result or an error
//! message tagged with the module id.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tsify_next::Tsify;

use thermal::{BodyDescriptor, EquilibriumResult, OrbitalFlux, PhysicalConstants, ThermalError};

/// Outcome of one internal module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
#[tsify(into_wasm_abi)]
pub struct ModuleOutcome {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EquilibriumResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModuleOutcome {
    fn new(id: &str, outcome: Result<EquilibriumResult, ThermalError>) -> Self {
        match outcome {
            Ok(result) => Self {
                id: id.to_string(),
                result: Some(result),
                error: None,
            },
            Err(e) => Self {
                id: id.to_string(),
                result: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_solved(&self) -> bool {
        self.result.is_some()
    }
}

/// One orbital case as returned to JavaScript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
#[tsify(into_wasm_abi)]
pub struct CaseOutput {
    pub ambient: OrbitalFlux,
    pub outer: EquilibriumResult,
    pub internal_flux: OrbitalFlux,
    pub modules: Vec<ModuleOutcome>,
}

pub(crate) fn cascaded_case(
    constants: &PhysicalConstants,
    altitude_m: f64,
    eclipse: bool,
    outer: &BodyDescriptor,
    modules: &[BodyDescriptor],
) -> Result<CaseOutput, ThermalError> {
    let case = thermal::compute_cascaded_case(constants, altitude_m, eclipse, outer, modules)?;

    let modules: Vec<ModuleOutcome> = modules
        .iter()
        .zip(case.modules)
        .map(|(descriptor, outcome)| ModuleOutcome::new(&descriptor.id, outcome))
        .collect();

    debug!(
        outer = %outer.id,
        solved = modules.iter().filter(|m| m.is_solved()).count(),
        total = modules.len(),
        "cascaded case"
    );

    Ok(CaseOutput {
        ambient: case.ambient,
        outer: case.outer,
        internal_flux: case.internal_flux,
        modules,
    })
}
