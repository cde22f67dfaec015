//! Tests for the orbital flux model

use approx::assert_relative_eq;
use units::{HeatFlux, Length, Temperature};

use crate::constants::{PhysicalConstants, STEFAN_BOLTZMANN};
use crate::error::{ConfigurationError, DomainError};
use crate::flux::{
    blackbody_power, irradiance_at_distance, view_factor, OrbitalFlux, OrbitalFluxModel,
};

fn earth_model() -> OrbitalFluxModel {
    OrbitalFluxModel::new(PhysicalConstants::default())
}

// ========== View factor ==========

#[test]
fn test_view_factor_limits() {
    let earth = Length::from_meters(6.371e6);
    assert_eq!(view_factor(earth, Length::zero()), 1.0);
    assert!(view_factor(earth, Length::from_au(10.0)) < 1e-6);
}

#[test]
fn test_view_factor_formula() {
    let r = Length::from_meters(6.371e6);
    let h = Length::from_meters(2.5e5);
    let ratio: f64 = 6.371e6 / (6.371e6 + 2.5e5);
    let expected = 1.0 - (1.0 - ratio * ratio).sqrt();
    assert_relative_eq!(view_factor(r, h), expected, epsilon = 1e-15);
}

// ========== Blackbody helpers ==========

#[test]
fn test_blackbody_power_of_sun() {
    // L☉ ≈ 3.8e26 W for a 5780 K, 6.95e8 m sphere
    let p = blackbody_power(
        Length::from_meters(6.95e8),
        Temperature::from_kelvin(5780.0),
        STEFAN_BOLTZMANN,
    );
    assert_relative_eq!(p.to_watts(), 3.8e26, max_relative = 0.05);
}

#[test]
fn test_irradiance_is_exitance_at_own_radius() {
    // At a sphere's own radius the dilution recovers σT⁴
    let radius = Length::from_meters(6.371e6);
    let t = Temperature::from_kelvin(255.0);
    let p = blackbody_power(radius, t, STEFAN_BOLTZMANN);
    let q = irradiance_at_distance(p, radius);
    assert_relative_eq!(
        q.to_watts_per_m2(),
        STEFAN_BOLTZMANN * 255.0_f64.powi(4),
        max_relative = 1e-12
    );
}

// ========== Flux environment ==========

#[test]
fn test_low_earth_orbit_scenario() {
    let model = earth_model();
    let flux = model.flux_at(Length::from_meters(2.5e5), false).unwrap();

    // Flat-space solar constant at 1.471e11 m
    let solar = flux.solar_flux.to_watts_per_m2();
    assert!(solar > 1300.0 && solar < 1500.0, "solar constant should be ~1414, got {}", solar);
    assert_eq!(flux.solar_flux, model.solar_irradiance());

    let planetary = model.planetary_irradiance().to_watts_per_m2();
    let albedo_bound = model.albedo_irradiance().to_watts_per_m2();
    let ir = flux.ir_flux.to_watts_per_m2();
    let albedo = flux.albedo_flux.to_watts_per_m2();
    assert!(ir > 0.0 && ir <= planetary, "ir {} outside [0, {}]", ir, planetary);
    assert!(albedo > 0.0 && albedo <= albedo_bound);
}

#[test]
fn test_albedo_irradiance_is_albedo_times_solar() {
    let model = earth_model();
    assert_relative_eq!(
        model.albedo_irradiance().to_watts_per_m2(),
        model.solar_irradiance().to_watts_per_m2() * 0.34,
        max_relative = 1e-12
    );
}

#[test]
fn test_solar_flux_independent_of_altitude() {
    let model = earth_model();
    let low = model.flux_at(Length::from_km(250.0), false).unwrap();
    let high = model.flux_at(Length::from_km(36_000.0), false).unwrap();
    assert_eq!(low.solar_flux, high.solar_flux);
}

#[test]
fn test_planet_terms_decrease_with_altitude() {
    let model = earth_model();
    let altitudes = [1.0, 100.0, 250.0, 1_000.0, 5_000.0, 20_000.0, 36_000.0, 400_000.0];
    let fluxes: Vec<OrbitalFlux> = altitudes
        .iter()
        .map(|&km| model.flux_at(Length::from_km(km), false).unwrap())
        .collect();

    for pair in fluxes.windows(2) {
        assert!(pair[1].ir_flux < pair[0].ir_flux);
        assert!(pair[1].albedo_flux < pair[0].albedo_flux);
    }
}

#[test]
fn test_eclipse_removes_sunlight_only() {
    let model = earth_model();
    for km in [0.0, 250.0, 36_000.0] {
        let altitude = Length::from_km(km);
        let sunlit = model.flux_at(altitude, false).unwrap();
        let shadow = model.flux_at(altitude, true).unwrap();
        assert_eq!(shadow.solar_flux, HeatFlux::zero());
        assert_eq!(shadow.albedo_flux, HeatFlux::zero());
        assert_eq!(shadow.ir_flux, sunlit.ir_flux);
    }
}

#[test]
fn test_zero_altitude_is_finite() {
    let model = earth_model();
    let flux = model.flux_at(Length::zero(), false).unwrap();
    assert!(flux.total().to_watts_per_m2().is_finite());
    assert_eq!(flux.ir_flux, model.planetary_irradiance());
}

#[test]
fn test_flux_is_idempotent() {
    let model = earth_model();
    let a = model.flux_at(Length::from_km(700.0), false).unwrap();
    let b = model.flux_at(Length::from_km(700.0), false).unwrap();
    let bits = |f: &OrbitalFlux| {
        [f.solar_flux, f.albedo_flux, f.ir_flux].map(|q| q.to_watts_per_m2().to_bits())
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn test_negative_altitude_rejected() {
    let err = earth_model().flux_at(Length::from_km(-1.0), false).unwrap_err();
    assert_eq!(err.domain(), Some(&DomainError::InvalidAltitude(-1000.0)));

    let err = earth_model().flux_at(Length::from_meters(f64::NAN), false).unwrap_err();
    assert!(matches!(err.domain(), Some(DomainError::InvalidAltitude(_))));
}

#[test]
fn test_other_central_body() {
    // Farther from the Sun and colder: every term drops
    let mars = PhysicalConstants::default()
        .with_central_body_radius(Length::from_km(3389.5))
        .with_central_body_temperature(210.0)
        .with_orbit_distance(Length::from_au(1.52))
        .with_albedo_coefficient(0.25);
    let altitude = Length::from_km(400.0);

    let at_mars = OrbitalFluxModel::new(mars).flux_at(altitude, false).unwrap();
    let at_earth = earth_model().flux_at(altitude, false).unwrap();
    assert!(at_mars.solar_flux < at_earth.solar_flux);
    assert!(at_mars.ir_flux < at_earth.ir_flux);
}

#[test]
fn test_orbital_flux_helpers() {
    let q = HeatFlux::from_watts_per_m2(400.0);
    let cavity = OrbitalFlux::ir_only(q);
    assert_eq!(cavity.solar_flux, HeatFlux::zero());
    assert_eq!(cavity.albedo_flux, HeatFlux::zero());
    assert_eq!(cavity.total(), q);
    assert_eq!(OrbitalFlux::zero().total(), HeatFlux::zero());
}

#[test]
fn test_invalid_constants_rejected_by_flux_query() {
    let altitude = Length::from_km(250.0);

    let bright = PhysicalConstants::default().with_albedo_coefficient(2.0);
    let err = OrbitalFluxModel::new(bright).flux_at(altitude, false).unwrap_err();
    assert_eq!(
        err.configuration(),
        Some(&ConfigurationError::InvalidConstant {
            name: "centralBody.albedo",
            value: 2.0
        })
    );

    let pointlike = PhysicalConstants::default().with_central_body_radius(Length::zero());
    let err = OrbitalFluxModel::new(pointlike).flux_at(altitude, true).unwrap_err();
    assert!(matches!(
        err.configuration(),
        Some(ConfigurationError::InvalidConstant { name: "centralBody.radius", .. })
    ));
}

#[test]
fn test_overflowing_flux_rejected() {
    let radiator = crate::constants::Radiator {
        radius: Length::from_meters(6.95e8),
        temperature: Temperature::from_kelvin(1e80),
    };
    let constants = PhysicalConstants::default().with_sun(radiator);
    let err = OrbitalFluxModel::new(constants)
        .flux_at(Length::from_km(250.0), false)
        .unwrap_err();
    assert_eq!(err.domain(), Some(&DomainError::NonFinite("solarFlux")));
}
