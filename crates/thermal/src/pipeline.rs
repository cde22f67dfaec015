//! Cascading balance from the outer structure to internal modules.
//!
//! The outer body (or the panels of an outer assembly) sees the orbital
//! environment. Whatever it re-radiates becomes an IR-only enclosure flux,
//! and every internal module is solved against that flux on its own: modules
//! neither see the orbital environment nor each other.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use units::{Area, HeatFlux, Length};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::body::Body;
use crate::constants::PhysicalConstants;
use crate::error::{ConfigurationError, Result, ThermalError};
use crate::flux::{OrbitalFlux, OrbitalFluxModel};
use crate::solver::{solve, EquilibriumResult};

/// A named orbital condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalCase {
    pub name: String,
    pub altitude: Length,
    pub eclipse: bool,
}

impl OrbitalCase {
    pub fn new(name: impl Into<String>, altitude: Length, eclipse: bool) -> Self {
        Self {
            name: name.into(),
            altitude,
            eclipse,
        }
    }

    /// Sunlit low Earth orbit at 250 km: strongest albedo and planetary IR
    pub fn low_earth_hot() -> Self {
        Self::new("hot", Length::from_km(250.0), false)
    }

    /// Eclipsed geosynchronous-altitude orbit: almost nothing incident
    pub fn geosynchronous_cold() -> Self {
        Self::new("cold", Length::from_km(36_000.0), true)
    }

    /// Eclipsed low Earth orbit
    pub fn low_earth_eclipse() -> Self {
        Self::new("eclipse", Length::from_km(250.0), true)
    }
}

/// Outcome of one orbital case
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// Orbital environment seen by the outer body
    pub ambient: OrbitalFlux,
    pub outer: EquilibriumResult,
    /// IR-only flux inside the outer body
    pub internal_flux: OrbitalFlux,
    /// One entry per module, in input order
    pub modules: Vec<Result<EquilibriumResult>>,
}

impl CaseResult {
    /// Modules that failed, with their position
    pub fn failures(&self) -> impl Iterator<Item = (usize, &ThermalError)> {
        failures(&self.modules)
    }

    pub fn all_modules_solved(&self) -> bool {
        self.modules.iter().all(|r| r.is_ok())
    }
}

/// Outcome of one orbital case for a multi-panel outer structure
#[derive(Debug, Clone)]
pub struct AssemblyCaseResult {
    pub ambient: OrbitalFlux,
    /// One entry per panel, in input order
    pub panels: Vec<EquilibriumResult>,
    /// Area-weighted IR flux inside the assembly
    pub internal_flux: OrbitalFlux,
    pub modules: Vec<Result<EquilibriumResult>>,
}

impl AssemblyCaseResult {
    pub fn failures(&self) -> impl Iterator<Item = (usize, &ThermalError)> {
        failures(&self.modules)
    }

    pub fn all_modules_solved(&self) -> bool {
        self.modules.iter().all(|r| r.is_ok())
    }
}

fn failures(
    modules: &[Result<EquilibriumResult>],
) -> impl Iterator<Item = (usize, &ThermalError)> {
    modules
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.as_ref().err().map(|e| (i, e)))
}

/// Evaluate a single outer body and its internal modules.
///
/// Fails only when the flux query or the outer body fails; module failures
/// are reported per entry of [`CaseResult::modules`].
///
/// # Examples
/// ```
/// use thermal::{evaluate_case, Body, EmissionTopology, Geometry, OpticalProperties, PhysicalConstants};
/// use units::{Length, Power};
///
/// let constants = PhysicalConstants::default();
/// let shell = Body::uniform(
///     "shell",
///     EmissionTopology::Shell,
///     Geometry::plate(2.2, 2.5),
///     OpticalProperties::blackbody(),
///     Power::from_watts(500.0),
/// )
/// .unwrap();
/// let module = Body::uniform(
///     "smu",
///     EmissionTopology::Solid,
///     Geometry::cuboid(0.42, 0.27, 0.276),
///     OpticalProperties::blackbody(),
///     Power::from_watts(30.0),
/// )
/// .unwrap();
///
/// let case = evaluate_case(&constants, Length::from_km(250.0), false, &shell, &[module]).unwrap();
/// assert_eq!(case.internal_flux.ir_flux, case.outer.reradiated_flux.ir_flux);
/// assert!(case.all_modules_solved());
/// ```
pub fn evaluate_case(
    constants: &PhysicalConstants,
    altitude: Length,
    eclipse: bool,
    outer: &Body,
    modules: &[Body],
) -> Result<CaseResult> {
    cascade(constants, altitude, eclipse, outer, modules)
}

/// Single-outer-body cascade over any module source
pub(crate) fn cascade<M: ModuleSource>(
    constants: &PhysicalConstants,
    altitude: Length,
    eclipse: bool,
    outer: &Body,
    modules: &[M],
) -> Result<CaseResult> {
    let ambient = OrbitalFluxModel::new(*constants).flux_at(altitude, eclipse)?;
    let outer_result = solve(outer, &ambient, constants)?;
    let internal_flux = OrbitalFlux::ir_only(outer_result.reradiated_flux.ir_flux);

    debug!(
        outer = outer.id(),
        internal_ir = internal_flux.ir_flux.to_watts_per_m2(),
        modules = modules.len(),
        "outer body solved"
    );

    Ok(CaseResult {
        ambient,
        outer: outer_result,
        internal_flux,
        modules: solve_modules(modules, &internal_flux, constants),
    })
}

/// Evaluate an outer structure built from several panels.
///
/// Each panel is solved against the orbital flux. The enclosure flux is the
/// area-weighted mean of the panels' re-radiated IR, Σ Aᵢ qᵢ / Σ Aᵢ, using
/// each panel's dissipating area; solid panels add area but no flux.
///
/// # Errors
/// [`ConfigurationError::EmptyAssembly`] for an empty panel list, or the
/// first panel failure.
pub fn evaluate_assembly_case(
    constants: &PhysicalConstants,
    altitude: Length,
    eclipse: bool,
    panels: &[Body],
    modules: &[Body],
) -> Result<AssemblyCaseResult> {
    if panels.is_empty() {
        return Err(ConfigurationError::EmptyAssembly.into());
    }
    let ambient = OrbitalFluxModel::new(*constants).flux_at(altitude, eclipse)?;

    let solved = panels
        .iter()
        .map(|panel| solve(panel, &ambient, constants))
        .collect::<Result<Vec<_>>>()?;

    let internal_flux = OrbitalFlux::ir_only(enclosure_flux(panels, &solved));
    debug!(
        panels = panels.len(),
        internal_ir = internal_flux.ir_flux.to_watts_per_m2(),
        modules = modules.len(),
        "outer assembly solved"
    );

    Ok(AssemblyCaseResult {
        ambient,
        panels: solved,
        internal_flux,
        modules: solve_modules(modules, &internal_flux, constants),
    })
}

/// Evaluate a named case against a single outer body
pub fn evaluate_orbital_case(
    constants: &PhysicalConstants,
    case: &OrbitalCase,
    outer: &Body,
    modules: &[Body],
) -> Result<CaseResult> {
    debug!(case = %case.name, "evaluating orbital case");
    evaluate_case(constants, case.altitude, case.eclipse, outer, modules)
}

/// Area-weighted mean re-radiated IR flux of a set of solved panels
fn enclosure_flux(panels: &[Body], results: &[EquilibriumResult]) -> HeatFlux {
    let total_area: Area = panels.iter().map(Body::dissipating_area).sum();
    let total_power: f64 = panels
        .iter()
        .zip(results)
        .map(|(panel, r)| (r.reradiated_flux.ir_flux * panel.dissipating_area()).to_watts())
        .sum();
    HeatFlux::from_watts_per_m2(total_power / total_area.to_m2())
}

/// A module slot of a cascade: a validated body, or the error that kept one
/// from being built
pub(crate) trait ModuleSource: Sync {
    fn body(&self) -> std::result::Result<&Body, &ThermalError>;
}

impl ModuleSource for Body {
    fn body(&self) -> std::result::Result<&Body, &ThermalError> {
        Ok(self)
    }
}

impl ModuleSource for Result<Body> {
    fn body(&self) -> std::result::Result<&Body, &ThermalError> {
        self.as_ref()
    }
}

fn solve_module<M: ModuleSource>(
    module: &M,
    internal_flux: &OrbitalFlux,
    constants: &PhysicalConstants,
) -> Result<EquilibriumResult> {
    match module.body() {
        Ok(body) => {
            let result = solve(body, internal_flux, constants);
            if let Err(e) = &result {
                warn!(module = body.id(), error = %e, "module solve failed");
            }
            result
        }
        Err(e) => {
            warn!(error = %e, "module rejected before solving");
            Err(e.clone())
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn solve_modules<M: ModuleSource>(
    modules: &[M],
    internal_flux: &OrbitalFlux,
    constants: &PhysicalConstants,
) -> Vec<Result<EquilibriumResult>> {
    modules
        .iter()
        .map(|m| solve_module(m, internal_flux, constants))
        .collect()
}

#[cfg(feature = "parallel")]
fn solve_modules<M: ModuleSource>(
    modules: &[M],
    internal_flux: &OrbitalFlux,
    constants: &PhysicalConstants,
) -> Vec<Result<EquilibriumResult>> {
    modules
        .par_iter()
        .map(|m| solve_module(m, internal_flux, constants))
        .collect()
}
