//! Steady-state radiative energy balance of a single body.
//!
//! With zero thermal capacitance a body settles where absorbed plus
//! dissipated power equals emitted power:
//!
//! ```text
//! P_in = Σ A_i α_i q_i + Q_diss = n A ε σ T⁴
//! T    = (P_in / (n A ε σ))^(1/4)
//! ```
//!
//! where n = 2 for a shell and 1 for a solid.

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Area, HeatFlux, Power, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::{Body, EmissionTopology, PropertyModel};
use crate::constants::PhysicalConstants;
use crate::error::{DomainError, Result};
use crate::flux::OrbitalFlux;
use crate::geometry::AreaMode;

/// Absorbed power split by source
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HeatBudget {
    pub solar: Power,
    pub albedo: Power,
    pub ir: Power,
    pub dissipation: Power,
}

impl HeatBudget {
    /// Total power entering the balance
    pub fn total(&self) -> Power {
        self.solar + self.albedo + self.ir + self.dissipation
    }
}

/// Equilibrium state of one body in one flux environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct EquilibriumResult {
    pub temperature: Temperature,
    /// Secondary flux offered to an enclosed cavity; IR only
    pub reradiated_flux: OrbitalFlux,
    pub absorbed: HeatBudget,
    /// Radiating area, both sides of a shell counted
    pub emitting_area: Area,
}

impl EquilibriumResult {
    pub fn temperature_celsius(&self) -> f64 {
        self.temperature.to_celsius()
    }

    /// Power radiated at the equilibrium temperature; equals the absorbed total
    pub fn emitted_power(&self) -> Power {
        self.absorbed.total()
    }
}

/// Solve the energy balance of `body` in the `ambient` flux environment.
///
/// # Errors
/// A [`DomainError`] (wrapped with the body id) when the ambient flux is
/// negative or non-finite, the emitting coefficient is not strictly positive,
/// or the absorbed power is negative.
///
/// # Examples
/// ```
/// use thermal::{solve, Body, EmissionTopology, Geometry, OpticalProperties, OrbitalFlux, PhysicalConstants};
/// use units::Power;
///
/// let constants = PhysicalConstants::default();
/// let module = Body::uniform(
///     "smu",
///     EmissionTopology::Solid,
///     Geometry::cuboid(0.42, 0.27, 0.276),
///     OpticalProperties::uniform(0.9, 0.9),
///     Power::from_watts(30.0),
/// )
/// .unwrap();
///
/// let result = solve(&module, &OrbitalFlux::zero(), &constants).unwrap();
/// assert!((result.temperature.to_kelvin() - 176.4).abs() < 0.1);
/// assert_eq!(result.reradiated_flux.ir_flux.to_watts_per_m2(), 0.0);
/// ```
pub fn solve(
    body: &Body,
    ambient: &OrbitalFlux,
    constants: &PhysicalConstants,
) -> Result<EquilibriumResult> {
    balance(body, ambient, constants).map_err(|e| e.for_body(body.id()))
}

fn balance(
    body: &Body,
    ambient: &OrbitalFlux,
    constants: &PhysicalConstants,
) -> Result<EquilibriumResult> {
    check_flux(ambient)?;
    let sigma = constants.stefan_boltzmann;

    let mut absorbed = absorbed_power(body, ambient);
    let shading = body.shading();
    if shading.visible {
        absorbed.solar = Power::zero();
    }
    if shading.albedo {
        absorbed.albedo = Power::zero();
    }
    if shading.ir {
        absorbed.ir = Power::zero();
    }

    let p_in = absorbed.total().to_watts();
    if !p_in.is_finite() {
        return Err(DomainError::NonFinite("absorbed power").into());
    }
    if p_in < 0.0 {
        return Err(DomainError::NegativeAbsorbedPower(p_in).into());
    }

    let emitting_area = body.emitting_area();
    let emissivity = emitting_emissivity(body);
    let coefficient = emitting_area.to_m2() * emissivity * sigma;
    if !(coefficient.is_finite() && coefficient > 0.0) {
        return Err(DomainError::NonPositiveEmission(coefficient).into());
    }

    let temperature = Temperature::from_kelvin((p_in / coefficient).powf(0.25));
    let reradiated = match body.topology() {
        EmissionTopology::Shell => HeatFlux::from_watts_per_m2(sigma * temperature.powi(4)),
        EmissionTopology::Solid => HeatFlux::zero(),
    };

    debug!(
        body = body.id(),
        topology = body.topology().name(),
        model = body.model().kind().name(),
        absorbed_w = p_in,
        emitting_area_m2 = emitting_area.to_m2(),
        temperature_k = temperature.to_kelvin(),
        "equilibrium solved"
    );

    Ok(EquilibriumResult {
        temperature,
        reradiated_flux: OrbitalFlux::ir_only(reradiated),
        absorbed,
        emitting_area,
    })
}

fn check_flux(flux: &OrbitalFlux) -> Result<(), DomainError> {
    let components = [
        ("solarFlux", flux.solar_flux),
        ("albedoFlux", flux.albedo_flux),
        ("irFlux", flux.ir_flux),
    ];
    for (name, value) in components {
        let value = value.to_watts_per_m2();
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::NegativeFlux { name, value });
        }
    }
    Ok(())
}

/// Unshaded absorbed power per category, plus dissipation
fn absorbed_power(body: &Body, flux: &OrbitalFlux) -> HeatBudget {
    let dissipation = body.heat_dissipation();
    match body.model() {
        PropertyModel::Uniform {
            geometry,
            optics,
            view_angles,
        } => {
            let sun_facing = geometry.area(AreaMode::Projected(view_angles.visible));
            // Albedo arrives from the planet, alongside its IR
            let planet_facing = geometry.area(AreaMode::Projected(view_angles.ir));
            HeatBudget {
                solar: flux.solar_flux * sun_facing * optics.absorptivity_visible,
                albedo: flux.albedo_flux * planet_facing * optics.absorptivity_visible,
                ir: flux.ir_flux * planet_facing * optics.absorptivity_ir,
                dissipation,
            }
        }
        PropertyModel::Variable(faces) => HeatBudget {
            solar: flux.solar_flux * faces.visible.area * faces.visible.optics.absorptivity_visible,
            albedo: flux.albedo_flux * faces.albedo.area * faces.albedo.optics.absorptivity_visible,
            ir: flux.ir_flux * faces.ir.area * faces.ir.optics.absorptivity_ir,
            dissipation,
        },
    }
}

fn emitting_emissivity(body: &Body) -> f64 {
    match body.model() {
        PropertyModel::Uniform { optics, .. } => optics.emissivity_ir,
        PropertyModel::Variable(faces) => faces.emitting.optics.emissivity_ir,
    }
}
