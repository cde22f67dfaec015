//! Surface geometry of radiating bodies.
//!
//! Every shape exposes its total (radiating) surface area. Planar shapes
//! additionally expose the area they present to a collimated source arriving
//! at an incidence angle measured from the face normal.

use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::trace;
use units::{Angle, Area, Length};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::DomainError;

/// Shape and dimensions of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Geometry {
    /// Rectangular box with edges a × b × c
    Box { a: Length, b: Length, c: Length },
    /// Flat rectangular plate a × b
    Plate { a: Length, b: Length },
    /// Sphere of radius r
    Sphere { r: Length },
    /// Closed cylinder of diameter d and height h
    Cylinder { d: Length, h: Length },
    /// Slender cylinder of diameter d and length l; end caps neglected
    Rod { d: Length, l: Length },
    /// Thin cylinder of diameter d and thickness h; rim neglected
    Disk { d: Length, h: Length },
}

/// Which area of a shape to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "angle", rename_all = "camelCase")]
pub enum AreaMode {
    /// All exposed surface
    #[default]
    Total,
    /// Area normal to a source arriving at the given incidence angle
    Projected(Angle),
}

impl Geometry {
    pub fn plate(a: f64, b: f64) -> Self {
        Self::Plate {
            a: Length::from_meters(a),
            b: Length::from_meters(b),
        }
    }

    pub fn cuboid(a: f64, b: f64, c: f64) -> Self {
        Self::Box {
            a: Length::from_meters(a),
            b: Length::from_meters(b),
            c: Length::from_meters(c),
        }
    }

    pub fn sphere(r: f64) -> Self {
        Self::Sphere {
            r: Length::from_meters(r),
        }
    }

    pub fn cylinder(d: f64, h: f64) -> Self {
        Self::Cylinder {
            d: Length::from_meters(d),
            h: Length::from_meters(h),
        }
    }

    pub fn rod(d: f64, l: f64) -> Self {
        Self::Rod {
            d: Length::from_meters(d),
            l: Length::from_meters(l),
        }
    }

    pub fn disk(d: f64, h: f64) -> Self {
        Self::Disk {
            d: Length::from_meters(d),
            h: Length::from_meters(h),
        }
    }

    /// Human-readable shape name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Plate { .. } => "plate",
            Self::Sphere { .. } => "sphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Rod { .. } => "rod",
            Self::Disk { .. } => "disk",
        }
    }

    /// Whether the shape has a single flat collecting face
    pub fn is_planar(&self) -> bool {
        matches!(self, Self::Plate { .. } | Self::Disk { .. })
    }

    fn dimensions(&self) -> Vec<(&'static str, Length)> {
        match *self {
            Self::Box { a, b, c } => vec![("a", a), ("b", b), ("c", c)],
            Self::Plate { a, b } => vec![("a", a), ("b", b)],
            Self::Sphere { r } => vec![("r", r)],
            Self::Cylinder { d, h } | Self::Disk { d, h } => vec![("d", d), ("h", h)],
            Self::Rod { d, l } => vec![("d", d), ("l", l)],
        }
    }

    /// Check that every dimension is finite and strictly positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in self.dimensions() {
            if !value.is_positive() {
                return Err(DomainError::NonPositiveDimension {
                    name,
                    value: value.to_m(),
                });
            }
        }
        Ok(())
    }

    /// Total exposed surface area
    pub fn total_area(&self) -> Area {
        match *self {
            Self::Box { a, b, c } => (a * b + b * c + c * a) * 2.0,
            Self::Plate { a, b } => a * b,
            Self::Sphere { r } => r.squared() * (4.0 * PI),
            Self::Cylinder { d, h } => {
                let radius = d / 2.0;
                (d * h) * PI + radius.squared() * (2.0 * PI)
            }
            Self::Rod { d, l } => (d * l) * PI,
            Self::Disk { d, .. } => (d / 2.0).squared() * (2.0 * PI),
        }
    }

    /// Area of one flat face; `None` for shapes without a single collecting face
    pub fn face_area(&self) -> Option<Area> {
        match *self {
            Self::Plate { a, b } => Some(a * b),
            Self::Disk { d, .. } => Some((d / 2.0).squared() * PI),
            _ => None,
        }
    }

    /// Surface area in the requested mode.
    ///
    /// Projected mode scales a planar face by cos(angle); incidence at or
    /// beyond 90° collects nothing. Non-planar shapes ignore the angle and
    /// report their total area.
    ///
    /// # Examples
    /// ```
    /// use thermal::{AreaMode, Geometry};
    /// use units::Angle;
    ///
    /// let radiator = Geometry::plate(2.2, 2.5);
    /// let normal = radiator.area(AreaMode::Projected(Angle::zero()));
    /// let oblique = radiator.area(AreaMode::Projected(Angle::from_degrees(60.0)));
    /// assert!((normal.to_m2() - 5.5).abs() < 1e-12);
    /// assert!((oblique.to_m2() - 2.75).abs() < 1e-12);
    /// ```
    pub fn area(&self, mode: AreaMode) -> Area {
        let area = match (mode, self.face_area()) {
            (AreaMode::Total, _) | (AreaMode::Projected(_), None) => self.total_area(),
            (AreaMode::Projected(angle), Some(face)) => face * projection_factor(angle),
        };
        trace!(shape = self.name(), ?mode, area_m2 = area.to_m2(), "surface area");
        area
    }
}

/// Cosine projection for a collimated source, clamped to zero at grazing or
/// rear incidence. Angles are taken modulo 360°.
pub fn projection_factor(angle: Angle) -> f64 {
    let mut degrees = angle.to_degrees().rem_euclid(360.0);
    if degrees > 180.0 {
        degrees -= 360.0;
    }
    if degrees.abs() >= 90.0 {
        0.0
    } else {
        angle.cos()
    }
}

/// Incidence angle between a face normal and the direction toward a source.
///
/// Zero-length vectors give normal incidence, so an unset direction does not
/// poison a case with NaN.
///
/// # Examples
/// ```
/// use nalgebra::Vector3;
/// use thermal::geometry::incidence_angle;
///
/// let normal = Vector3::new(0.0, 0.0, 1.0);
/// let sun = Vector3::new(1.0, 0.0, 1.0);
/// assert!((incidence_angle(&normal, &sun).to_degrees() - 45.0).abs() < 1e-9);
/// ```
pub fn incidence_angle(normal: &Vector3<f64>, source_direction: &Vector3<f64>) -> Angle {
    if normal.norm() == 0.0 || source_direction.norm() == 0.0 {
        return Angle::zero();
    }
    Angle::from_radians(normal.angle(source_direction))
}
