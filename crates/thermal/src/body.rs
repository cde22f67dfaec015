//! Radiating bodies: the outer shell panels and the internal modules.
//!
//! A body combines an emission topology (does it radiate from one side or
//! two), a property model (one optical finish over a shape, or explicit
//! absorbing and emitting areas per exposure category), its internal heat
//! dissipation and per-category shading.
//!
//! Bodies are validated when constructed, either through [`Body::uniform`] /
//! [`Body::variable`] or from a plain [`BodyDescriptor`] record.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use units::{Angle, Area, Power};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::{ConfigurationError, DomainError, Result, ThermalError};
use crate::geometry::{incidence_angle, AreaMode, Geometry};
use crate::optics::OpticalProperties;

/// How many sides of the dissipating area radiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum EmissionTopology {
    /// Thin wall radiating from both faces; one face may see an internal cavity
    Shell,
    /// Bulk object radiating from its external surface only
    Solid,
}

impl EmissionTopology {
    /// Number of radiating sides
    pub fn radiating_sides(&self) -> f64 {
        match self {
            Self::Shell => 2.0,
            Self::Solid => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Solid => "solid",
        }
    }
}

/// Which optical description a body uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum PropertyModelKind {
    Uniform,
    Variable,
}

impl PropertyModelKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Variable => "variable",
        }
    }
}

/// Incidence angles of the two illuminated faces of a uniform body
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ViewAngles {
    /// Angle between the face normal and the Sun
    pub visible: Angle,
    /// Angle between the face normal and the planet (IR and albedo)
    pub ir: Angle,
}

impl ViewAngles {
    /// Both sources at normal incidence
    pub fn normal() -> Self {
        Self::default()
    }

    /// Both sources at the same incidence angle in degrees
    pub fn oblique(degrees: f64) -> Self {
        let angle = Angle::from_degrees(degrees);
        Self {
            visible: angle,
            ir: angle,
        }
    }

    /// Derive both angles from the face normal and the directions toward the
    /// Sun and toward the planet's centre.
    pub fn from_directions(
        normal: &Vector3<f64>,
        sun_direction: &Vector3<f64>,
        nadir_direction: &Vector3<f64>,
    ) -> Self {
        Self {
            visible: incidence_angle(normal, sun_direction),
            ir: incidence_angle(normal, nadir_direction),
        }
    }
}

/// Exposure categories removed from a body's absorbed power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Shading {
    /// Direct sunlight blocked
    pub visible: bool,
    /// Planet-reflected sunlight blocked
    pub albedo: bool,
    /// Planetary IR blocked
    pub ir: bool,
}

impl Shading {
    pub fn none() -> Self {
        Self::default()
    }

    /// Face turned away from the Sun; still sees the planet
    pub fn from_sun() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// Face hidden from planetary IR
    pub fn from_planet_ir() -> Self {
        Self {
            ir: true,
            ..Self::default()
        }
    }

    /// Nothing reaches the face
    pub fn full() -> Self {
        Self {
            visible: true,
            albedo: true,
            ir: true,
        }
    }
}

/// Absorbing or emitting area of one exposure category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ExposureFace {
    pub area: Area,
    pub optics: OpticalProperties,
}

impl ExposureFace {
    pub fn new(area: Area, optics: OpticalProperties) -> Self {
        Self { area, optics }
    }

    /// Face area taken from a shape seen at an incidence angle
    pub fn from_geometry(geometry: &Geometry, angle: Angle, optics: OpticalProperties) -> Self {
        Self::new(geometry.area(AreaMode::Projected(angle)), optics)
    }

    /// A category that receives nothing
    pub fn unexposed(optics: OpticalProperties) -> Self {
        Self::new(Area::zero(), optics)
    }

    fn validate(&self, name: &'static str) -> Result<(), DomainError> {
        if !self.area.is_non_negative() {
            return Err(DomainError::NegativeArea {
                name,
                value: self.area.to_m2(),
            });
        }
        self.optics.validate()
    }
}

/// One exposure record per category of a variable body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ExposureFaces {
    /// Collects direct sunlight
    pub visible: ExposureFace,
    /// Collects planet-reflected sunlight
    pub albedo: ExposureFace,
    /// Collects planetary or enclosure IR
    pub ir: ExposureFace,
    /// Radiates the body's thermal emission
    pub emitting: ExposureFace,
}

impl ExposureFaces {
    fn validate(&self) -> Result<(), DomainError> {
        self.visible.validate("faces.visible.area")?;
        self.albedo.validate("faces.albedo.area")?;
        self.ir.validate("faces.ir.area")?;
        self.emitting.validate("faces.emitting.area")?;
        if self.emitting.area.to_m2() <= 0.0 {
            return Err(DomainError::NonPositiveDimension {
                name: "faces.emitting.area",
                value: self.emitting.area.to_m2(),
            });
        }
        Ok(())
    }
}

/// Optical description of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyModel {
    /// One finish over a shape; absorbing areas follow from the view angles
    Uniform {
        geometry: Geometry,
        optics: OpticalProperties,
        view_angles: ViewAngles,
    },
    /// Independent area and finish per exposure category
    Variable(ExposureFaces),
}

impl PropertyModel {
    pub fn kind(&self) -> PropertyModelKind {
        match self {
            Self::Uniform { .. } => PropertyModelKind::Uniform,
            Self::Variable(_) => PropertyModelKind::Variable,
        }
    }
}

/// A validated radiating body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyDescriptor", into = "BodyDescriptor")]
pub struct Body {
    id: String,
    topology: EmissionTopology,
    model: PropertyModel,
    heat_dissipation: Power,
    shading: Shading,
}

impl Body {
    /// Build and validate a body.
    ///
    /// # Errors
    /// A [`DomainError`] wrapped with the body id when a dimension, area,
    /// optical coefficient or the dissipation is out of range.
    pub fn new(
        id: impl Into<String>,
        topology: EmissionTopology,
        model: PropertyModel,
        heat_dissipation: Power,
        shading: Shading,
    ) -> Result<Self> {
        let body = Self {
            id: id.into(),
            topology,
            model,
            heat_dissipation,
            shading,
        };
        body.validate().map_err(|e| ThermalError::from(e).for_body(&body.id))?;
        Ok(body)
    }

    /// A body with one optical finish over a shape, both sources at normal
    /// incidence and no shading.
    ///
    /// # Examples
    /// ```
    /// use thermal::{Body, EmissionTopology, Geometry, OpticalProperties};
    /// use units::Power;
    ///
    /// let module = Body::uniform(
    ///     "smu",
    ///     EmissionTopology::Solid,
    ///     Geometry::cuboid(0.42, 0.27, 0.276),
    ///     OpticalProperties::blackbody(),
    ///     Power::from_watts(130.0),
    /// )
    /// .unwrap();
    /// assert_eq!(module.id(), "smu");
    /// ```
    pub fn uniform(
        id: impl Into<String>,
        topology: EmissionTopology,
        geometry: Geometry,
        optics: OpticalProperties,
        heat_dissipation: Power,
    ) -> Result<Self> {
        Self::new(
            id,
            topology,
            PropertyModel::Uniform {
                geometry,
                optics,
                view_angles: ViewAngles::normal(),
            },
            heat_dissipation,
            Shading::none(),
        )
    }

    /// A body with explicit per-category exposure records and no shading
    pub fn variable(
        id: impl Into<String>,
        topology: EmissionTopology,
        faces: ExposureFaces,
        heat_dissipation: Power,
    ) -> Result<Self> {
        Self::new(
            id,
            topology,
            PropertyModel::Variable(faces),
            heat_dissipation,
            Shading::none(),
        )
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    /// Replace the incidence angles of a uniform body; variable bodies carry
    /// their projected areas already and are returned unchanged.
    pub fn with_view_angles(mut self, angles: ViewAngles) -> Self {
        if let PropertyModel::Uniform { view_angles, .. } = &mut self.model {
            *view_angles = angles;
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn topology(&self) -> EmissionTopology {
        self.topology
    }

    pub fn model(&self) -> &PropertyModel {
        &self.model
    }

    pub fn heat_dissipation(&self) -> Power {
        self.heat_dissipation
    }

    pub fn shading(&self) -> Shading {
        self.shading
    }

    /// Area of one radiating side
    pub fn dissipating_area(&self) -> Area {
        match &self.model {
            PropertyModel::Uniform { geometry, .. } => geometry.total_area(),
            PropertyModel::Variable(faces) => faces.emitting.area,
        }
    }

    /// Total radiating area, counting both sides of a shell
    pub fn emitting_area(&self) -> Area {
        self.dissipating_area() * self.topology.radiating_sides()
    }

    fn validate(&self) -> Result<(), DomainError> {
        let watts = self.heat_dissipation.to_watts();
        if !watts.is_finite() || watts < 0.0 {
            return Err(DomainError::InvalidDissipation(watts));
        }
        match &self.model {
            PropertyModel::Uniform {
                geometry, optics, ..
            } => {
                geometry.validate()?;
                optics.validate()
            }
            PropertyModel::Variable(faces) => faces.validate(),
        }
    }
}

/// Optional per-category records of a body descriptor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FaceDescriptors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<ExposureFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albedo: Option<ExposureFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<ExposureFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emitting: Option<ExposureFace>,
}

/// Plain structured record describing a body.
///
/// Which optional fields are required depends on `property_model`:
/// `geometry` and `optics` for uniform bodies, all four `faces` for variable
/// bodies. Conversion into a [`Body`] reports the first missing one.
///
/// # Examples
/// ```
/// use thermal::{Body, BodyDescriptor};
///
/// let json = r#"{
///     "id": "radiator",
///     "emissionTopology": "shell",
///     "propertyModel": "uniform",
///     "geometry": { "type": "plate", "a": 2.2, "b": 2.5 },
///     "optics": {
///         "absorptivityIr": 0.83, "absorptivityVisible": 0.06,
///         "emissivityIr": 0.83, "emissivityVisible": 0.06
///     },
///     "viewAngles": { "visible": 45.0, "ir": 45.0 },
///     "heatDissipation": 2300.0
/// }"#;
/// let descriptor: BodyDescriptor = serde_json::from_str(json).unwrap();
/// let body = Body::try_from(descriptor).unwrap();
/// assert_eq!(body.heat_dissipation().to_watts(), 2300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BodyDescriptor {
    pub id: String,
    pub emission_topology: EmissionTopology,
    pub property_model: PropertyModelKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optics: Option<OpticalProperties>,
    #[serde(default)]
    pub view_angles: ViewAngles,
    #[serde(default)]
    pub faces: FaceDescriptors,
    #[serde(default)]
    pub heat_dissipation: Power,
    #[serde(default)]
    pub shading: Shading,
}

impl BodyDescriptor {
    fn missing(&self, field: &'static str) -> ThermalError {
        ConfigurationError::MissingField {
            body: self.id.clone(),
            field,
            model: self.property_model.name(),
        }
        .into()
    }

    fn property_model(&self) -> Result<PropertyModel> {
        match self.property_model {
            PropertyModelKind::Uniform => Ok(PropertyModel::Uniform {
                geometry: self.geometry.ok_or_else(|| self.missing("geometry"))?,
                optics: self.optics.ok_or_else(|| self.missing("optics"))?,
                view_angles: self.view_angles,
            }),
            PropertyModelKind::Variable => {
                let faces = &self.faces;
                Ok(PropertyModel::Variable(ExposureFaces {
                    visible: faces.visible.ok_or_else(|| self.missing("faces.visible"))?,
                    albedo: faces.albedo.ok_or_else(|| self.missing("faces.albedo"))?,
                    ir: faces.ir.ok_or_else(|| self.missing("faces.ir"))?,
                    emitting: faces.emitting.ok_or_else(|| self.missing("faces.emitting"))?,
                }))
            }
        }
    }
}

impl TryFrom<BodyDescriptor> for Body {
    type Error = ThermalError;

    fn try_from(descriptor: BodyDescriptor) -> Result<Self> {
        let model = descriptor.property_model()?;
        Body::new(
            descriptor.id,
            descriptor.emission_topology,
            model,
            descriptor.heat_dissipation,
            descriptor.shading,
        )
    }
}

impl TryFrom<&BodyDescriptor> for Body {
    type Error = ThermalError;

    fn try_from(descriptor: &BodyDescriptor) -> Result<Self> {
        Body::try_from(descriptor.clone())
    }
}

impl From<Body> for BodyDescriptor {
    fn from(body: Body) -> Self {
        let property_model = body.model.kind();
        let (geometry, optics, view_angles, faces) = match body.model {
            PropertyModel::Uniform {
                geometry,
                optics,
                view_angles,
            } => (
                Some(geometry),
                Some(optics),
                view_angles,
                FaceDescriptors::default(),
            ),
            PropertyModel::Variable(faces) => (
                None,
                None,
                ViewAngles::default(),
                FaceDescriptors {
                    visible: Some(faces.visible),
                    albedo: Some(faces.albedo),
                    ir: Some(faces.ir),
                    emitting: Some(faces.emitting),
                },
            ),
        };
        Self {
            id: body.id,
            emission_topology: body.topology,
            property_model,
            geometry,
            optics,
            view_angles,
            faces,
            heat_dissipation: body.heat_dissipation,
            shading: body.shading,
        }
    }
}
