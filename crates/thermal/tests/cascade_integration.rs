//! Integration tests for the full orbital cascade.
//!
//! A 2.2 × 1.9 × 3.5 m bus with half its skin facing each source, and
//! three boxed units mounted inside it.

use approx::assert_relative_eq;
use units::{Area, Length, Power};

use thermal::constants::STEFAN_BOLTZMANN;
use thermal::{
    compute_cascaded_case, evaluate_orbital_case, Body, BodyDescriptor, EmissionTopology,
    ExposureFace, ExposureFaces, Geometry, OpticalProperties, OrbitalCase, PhysicalConstants,
};

fn bus_skin() -> Body {
    let total = Geometry::cuboid(2.2, 1.9, 3.5).total_area();
    let half = total / 2.0;
    let paint = OpticalProperties::new(0.9, 0.21, 0.9, 0.21);
    let faces = ExposureFaces {
        visible: ExposureFace::new(half, paint),
        albedo: ExposureFace::new(half, paint),
        ir: ExposureFace::new(half, paint),
        emitting: ExposureFace::new(total, paint),
    };
    Body::variable("bus", EmissionTopology::Shell, faces, Power::zero()).unwrap()
}

fn units_inside() -> Vec<Body> {
    [("smu", 130.0), ("battery", 20.0), ("transponder", 45.0)]
        .into_iter()
        .map(|(id, watts)| {
            Body::uniform(
                id,
                EmissionTopology::Solid,
                Geometry::cuboid(0.42, 0.27, 0.276),
                OpticalProperties::blackbody(),
                Power::from_watts(watts),
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn bus_hot_and_eclipse_cases() {
    let constants = PhysicalConstants::default();
    let bus = bus_skin();
    let modules = units_inside();

    let sunlit_case = OrbitalCase::low_earth_hot();
    let eclipse_case = OrbitalCase::low_earth_eclipse();
    let sunlit = evaluate_orbital_case(&constants, &sunlit_case, &bus, &modules).unwrap();
    let eclipse = evaluate_orbital_case(&constants, &eclipse_case, &bus, &modules).unwrap();

    println!("\n=== Bus skin ===");
    println!("Solar flux: {:.2} W/m²", sunlit.ambient.solar_flux.to_watts_per_m2());
    println!("Albedo flux: {:.2} W/m²", sunlit.ambient.albedo_flux.to_watts_per_m2());
    println!("IR flux: {:.2} W/m²", sunlit.ambient.ir_flux.to_watts_per_m2());
    println!("Sunlit: {:.2} °C", sunlit.outer.temperature_celsius());
    println!("Eclipse: {:.2} °C", eclipse.outer.temperature_celsius());

    assert!(sunlit.outer.temperature_celsius() > -80.0);
    assert!(sunlit.outer.temperature_celsius() < 40.0);
    assert!(eclipse.outer.temperature < sunlit.outer.temperature);
    assert_eq!(eclipse.ambient.ir_flux, sunlit.ambient.ir_flux);

    for case in [&sunlit, &eclipse] {
        assert!(case.all_modules_solved());
        for (module, result) in modules.iter().zip(&case.modules) {
            let result = result.as_ref().unwrap();
            // Internal dissipation always lifts a unit above the enclosure
            assert!(result.temperature > case.outer.temperature, "{}", module.id());
            assert_eq!(result.absorbed.solar, Power::zero());
            assert_eq!(result.absorbed.albedo, Power::zero());
        }
    }
}

#[test]
fn bus_energy_balance_closes() {
    let constants = PhysicalConstants::default();
    let bus = bus_skin();
    let modules = units_inside();
    let case =
        evaluate_orbital_case(&constants, &OrbitalCase::low_earth_hot(), &bus, &modules).unwrap();

    let t4 = case.outer.temperature.to_kelvin().powi(4);
    let emitted = case.outer.emitting_area.to_m2() * 0.9 * STEFAN_BOLTZMANN * t4;
    assert_relative_eq!(emitted, case.outer.absorbed.total().to_watts(), max_relative = 1e-9);

    let skin = Geometry::cuboid(2.2, 1.9, 3.5).total_area();
    assert_relative_eq!(case.outer.emitting_area.to_m2(), (skin * 2.0).to_m2());
    assert!(case.outer.emitting_area > Area::zero());
}

#[test]
fn geosynchronous_eclipse_is_coldest() {
    let constants = PhysicalConstants::default();
    let bus = bus_skin();

    let temperatures: Vec<f64> = [
        OrbitalCase::low_earth_hot(),
        OrbitalCase::low_earth_eclipse(),
        OrbitalCase::geosynchronous_cold(),
    ]
    .iter()
    .map(|case| {
        evaluate_orbital_case(&constants, case, &bus, &[])
            .unwrap()
            .outer
            .temperature
            .to_kelvin()
    })
    .collect();

    assert!(temperatures[0] > temperatures[1]);
    assert!(temperatures[1] > temperatures[2]);
}

#[test]
fn descriptor_round_trip_through_json() {
    let constants = PhysicalConstants::default();
    let json = r#"{
        "outer": {
            "id": "radiator",
            "emissionTopology": "shell",
            "propertyModel": "uniform",
            "geometry": { "type": "plate", "a": 2.2, "b": 2.5 },
            "optics": {
                "absorptivityIr": 0.83, "absorptivityVisible": 0.06,
                "emissivityIr": 0.83, "emissivityVisible": 0.06
            },
            "heatDissipation": 2300.0
        },
        "modules": [
            {
                "id": "smu",
                "emissionTopology": "solid",
                "propertyModel": "uniform",
                "geometry": { "type": "box", "a": 0.42, "b": 0.27, "c": 0.276 },
                "optics": {
                    "absorptivityIr": 0.83, "absorptivityVisible": 0.83,
                    "emissivityIr": 0.83, "emissivityVisible": 0.83
                },
                "heatDissipation": 130.0
            },
            {
                "id": "harness",
                "emissionTopology": "solid",
                "propertyModel": "variable",
                "heatDissipation": 5.0
            }
        ]
    }"#;

    #[derive(serde::Deserialize)]
    struct Layout {
        outer: BodyDescriptor,
        modules: Vec<BodyDescriptor>,
    }
    let layout: Layout = serde_json::from_str(json).unwrap();

    let case =
        compute_cascaded_case(&constants, 2.5e5, false, &layout.outer, &layout.modules).unwrap();
    assert!(case.modules[0].is_ok());
    let err = case.modules[1].as_ref().unwrap_err();
    assert!(err.to_string().contains("harness"));

    let report = serde_json::to_string(case.modules[0].as_ref().unwrap()).unwrap();
    assert!(report.contains("\"reradiatedFlux\""));
    println!("{}", report);
}
