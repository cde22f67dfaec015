//! Tests for body construction and descriptors

use approx::assert_relative_eq;
use units::{Area, Power};

use crate::body::{
    Body, BodyDescriptor, EmissionTopology, ExposureFace, ExposureFaces, FaceDescriptors,
    PropertyModelKind, Shading, ViewAngles,
};
use crate::error::{ConfigurationError, DomainError};
use crate::geometry::Geometry;
use crate::optics::OpticalProperties;

fn uniform_descriptor() -> BodyDescriptor {
    BodyDescriptor {
        id: "radiator".to_string(),
        emission_topology: EmissionTopology::Shell,
        property_model: PropertyModelKind::Uniform,
        geometry: Some(Geometry::plate(2.2, 2.5)),
        optics: Some(OpticalProperties::optical_solar_reflector()),
        view_angles: ViewAngles::oblique(30.0),
        faces: FaceDescriptors::default(),
        heat_dissipation: Power::from_watts(2300.0),
        shading: Shading::none(),
    }
}

fn blackbody_face(area: f64) -> ExposureFace {
    ExposureFace::new(Area::from_m2(area), OpticalProperties::blackbody())
}

// ========== Construction ==========

#[test]
fn test_dissipating_and_emitting_area() {
    let shell = Body::uniform(
        "radiator",
        EmissionTopology::Shell,
        Geometry::plate(2.2, 2.5),
        OpticalProperties::blackbody(),
        Power::zero(),
    )
    .unwrap();
    assert_relative_eq!(shell.dissipating_area().to_m2(), 5.5, max_relative = 1e-12);
    assert_relative_eq!(shell.emitting_area().to_m2(), 11.0, max_relative = 1e-12);
}

#[test]
fn test_negative_dissipation_rejected() {
    let err = Body::uniform(
        "smu",
        EmissionTopology::Solid,
        Geometry::sphere(0.3),
        OpticalProperties::blackbody(),
        Power::from_watts(-5.0),
    )
    .unwrap_err();
    assert_eq!(err.domain(), Some(&DomainError::InvalidDissipation(-5.0)));
    assert!(err.to_string().starts_with("body `smu`"));
}

#[test]
fn test_bad_geometry_rejected() {
    let err = Body::uniform(
        "rod",
        EmissionTopology::Solid,
        Geometry::rod(0.0, 1.0),
        OpticalProperties::blackbody(),
        Power::zero(),
    )
    .unwrap_err();
    assert_eq!(
        err.domain(),
        Some(&DomainError::NonPositiveDimension { name: "d", value: 0.0 })
    );
}

#[test]
fn test_optics_out_of_range_rejected() {
    let err = Body::uniform(
        "hot",
        EmissionTopology::Solid,
        Geometry::sphere(0.3),
        OpticalProperties::new(0.5, 1.2, 0.5, 0.5),
        Power::zero(),
    )
    .unwrap_err();
    assert_eq!(
        err.domain(),
        Some(&DomainError::OpticalPropertyOutOfRange {
            name: "absorptivityVisible",
            value: 1.2
        })
    );
}

#[test]
fn test_variable_body_needs_emitting_area() {
    let faces = ExposureFaces {
        visible: blackbody_face(1.0),
        albedo: blackbody_face(1.0),
        ir: blackbody_face(1.0),
        emitting: blackbody_face(0.0),
    };
    let err = Body::variable("panel", EmissionTopology::Solid, faces, Power::zero()).unwrap_err();
    assert!(matches!(
        err.domain(),
        Some(DomainError::NonPositiveDimension {
            name: "faces.emitting.area",
            ..
        })
    ));

    let faces = ExposureFaces {
        visible: blackbody_face(-1.0),
        ..faces
    };
    let err = Body::variable("panel", EmissionTopology::Solid, faces, Power::zero()).unwrap_err();
    assert!(matches!(err.domain(), Some(DomainError::NegativeArea { .. })));
}

#[test]
fn test_view_angles_only_touch_uniform_bodies() {
    let faces = ExposureFaces {
        visible: blackbody_face(1.0),
        albedo: blackbody_face(1.0),
        ir: blackbody_face(1.0),
        emitting: blackbody_face(2.0),
    };
    let body = Body::variable("panel", EmissionTopology::Solid, faces, Power::zero()).unwrap();
    let turned = body.clone().with_view_angles(ViewAngles::oblique(45.0));
    assert_eq!(body, turned);
}

// ========== Descriptors ==========

#[test]
fn test_uniform_descriptor_converts() {
    let body = Body::try_from(uniform_descriptor()).unwrap();
    assert_eq!(body.id(), "radiator");
    assert_eq!(body.topology(), EmissionTopology::Shell);
    assert_eq!(body.model().kind(), PropertyModelKind::Uniform);
    assert_eq!(body.heat_dissipation(), Power::from_watts(2300.0));
}

#[test]
fn test_uniform_descriptor_missing_geometry() {
    let descriptor = BodyDescriptor {
        geometry: None,
        ..uniform_descriptor()
    };
    let err = Body::try_from(&descriptor).unwrap_err();
    assert_eq!(
        err.configuration(),
        Some(&ConfigurationError::MissingField {
            body: "radiator".to_string(),
            field: "geometry",
            model: "uniform",
        })
    );
}

#[test]
fn test_variable_descriptor_missing_face() {
    let descriptor = BodyDescriptor {
        property_model: PropertyModelKind::Variable,
        faces: FaceDescriptors {
            visible: Some(blackbody_face(1.0)),
            albedo: Some(blackbody_face(1.0)),
            ir: None,
            emitting: Some(blackbody_face(2.0)),
        },
        ..uniform_descriptor()
    };
    let err = Body::try_from(&descriptor).unwrap_err();
    assert!(matches!(
        err.configuration(),
        Some(ConfigurationError::MissingField { field: "faces.ir", model: "variable", .. })
    ));
}

#[test]
fn test_descriptor_defaults_from_json() {
    let json = r#"{
        "id": "smu",
        "emissionTopology": "solid",
        "propertyModel": "uniform",
        "geometry": { "type": "box", "a": 0.42, "b": 0.27, "c": 0.276 },
        "optics": {
            "absorptivityIr": 0.9, "absorptivityVisible": 0.9,
            "emissivityIr": 0.9, "emissivityVisible": 0.9
        }
    }"#;
    let descriptor: BodyDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(descriptor.heat_dissipation, Power::zero());
    assert_eq!(descriptor.shading, Shading::none());
    assert_eq!(descriptor.view_angles, ViewAngles::normal());
    assert!(Body::try_from(descriptor).is_ok());
}

#[test]
fn test_body_serializes_as_descriptor() {
    let body = Body::try_from(uniform_descriptor()).unwrap();
    let json = serde_json::to_string(&body).unwrap();
    assert!(json.contains("\"propertyModel\":\"uniform\""));
    assert!(!json.contains("faces\":{\"visible"));

    let back: Body = serde_json::from_str(&json).unwrap();
    assert_eq!(back, body);
}

#[test]
fn test_invalid_body_json_rejected() {
    let json = r#"{
        "id": "bad",
        "emissionTopology": "solid",
        "propertyModel": "variable"
    }"#;
    let err = serde_json::from_str::<Body>(json).unwrap_err();
    assert!(err.to_string().contains("faces.visible"));
}
