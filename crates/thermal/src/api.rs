//! Descriptor-level entry points for report and binding layers.
//!
//! These take plain records and SI scalars, validate them, and run the
//! engine. Callers that already hold validated [`Body`] values can use
//! [`solve`] and [`evaluate_case`](crate::evaluate_case) directly.

use units::Length;

use crate::body::{Body, BodyDescriptor};
use crate::constants::PhysicalConstants;
use crate::error::Result;
use crate::flux::{OrbitalFlux, OrbitalFluxModel};
use crate::pipeline::{cascade, CaseResult};
use crate::solver::{solve, EquilibriumResult};

/// Orbital flux at `altitude_m` meters above the central body
pub fn compute_orbital_flux(
    constants: &PhysicalConstants,
    altitude_m: f64,
    eclipse: bool,
) -> Result<OrbitalFlux> {
    constants.validate()?;
    OrbitalFluxModel::new(*constants).flux_at(Length::from_meters(altitude_m), eclipse)
}

/// Equilibrium of one described body in a given flux environment
pub fn compute_body_equilibrium(
    constants: &PhysicalConstants,
    body: &BodyDescriptor,
    ambient_flux: &OrbitalFlux,
) -> Result<EquilibriumResult> {
    constants.validate()?;
    let body = Body::try_from(body)?;
    solve(&body, ambient_flux, constants)
}

/// Cascaded case for a described outer body and modules.
///
/// A module descriptor that fails validation is reported in its own slot of
/// [`CaseResult::modules`] alongside the modules that solved.
pub fn compute_cascaded_case(
    constants: &PhysicalConstants,
    altitude_m: f64,
    eclipse: bool,
    outer: &BodyDescriptor,
    modules: &[BodyDescriptor],
) -> Result<CaseResult> {
    constants.validate()?;
    let outer = Body::try_from(outer)?;
    let modules: Vec<Result<Body>> = modules.iter().map(Body::try_from).collect();

    cascade(
        constants,
        Length::from_meters(altitude_m),
        eclipse,
        &outer,
        &modules,
    )
}
