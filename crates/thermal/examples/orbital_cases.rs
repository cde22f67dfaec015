//! Hot and cold equilibrium report for a radiator with internal units
//!
//! Usage: RUST_LOG=thermal=debug cargo run -p thermal --example orbital_cases
//!
//! Output: CSV with one row per body per case, temperatures in °C

use tracing_subscriber::EnvFilter;
use units::Power;

use thermal::{
    evaluate_orbital_case, Body, EmissionTopology, Geometry, OpticalProperties, OrbitalCase,
    PhysicalConstants, ThermalError,
};

fn main() -> Result<(), ThermalError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("thermal=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let constants = PhysicalConstants::default();

    let radiator = Body::uniform(
        "radiator",
        EmissionTopology::Shell,
        Geometry::plate(2.2, 2.5),
        OpticalProperties::optical_solar_reflector(),
        Power::from_watts(2300.0),
    )?;

    let modules = [
        ("smu", Geometry::cuboid(0.42, 0.27, 0.276), 130.0),
        ("battery", Geometry::cuboid(0.3, 0.25, 0.2), 20.0),
        ("reaction_wheel", Geometry::cylinder(0.3, 0.1), 15.0),
        ("harness", Geometry::rod(0.02, 3.0), 2.0),
    ]
    .into_iter()
    .map(|(id, geometry, watts)| {
        Body::uniform(
            id,
            EmissionTopology::Solid,
            geometry,
            OpticalProperties::blackbody(),
            Power::from_watts(watts),
        )
    })
    .collect::<Result<Vec<_>, _>>()?;

    println!("case,body,temperature_c,absorbed_w,reradiated_w_m2");

    for case in [OrbitalCase::low_earth_hot(), OrbitalCase::geosynchronous_cold()] {
        let result = evaluate_orbital_case(&constants, &case, &radiator, &modules)?;

        println!(
            "{},{},{:.2},{:.1},{:.1}",
            case.name,
            radiator.id(),
            result.outer.temperature_celsius(),
            result.outer.absorbed.total().to_watts(),
            result.outer.reradiated_flux.ir_flux.to_watts_per_m2(),
        );

        for (module, outcome) in modules.iter().zip(&result.modules) {
            match outcome {
                Ok(r) => println!(
                    "{},{},{:.2},{:.1},{:.1}",
                    case.name,
                    module.id(),
                    r.temperature_celsius(),
                    r.absorbed.total().to_watts(),
                    r.reradiated_flux.ir_flux.to_watts_per_m2(),
                ),
                Err(e) => eprintln!("{}: {}", case.name, e),
            }
        }
    }

    Ok(())
}
