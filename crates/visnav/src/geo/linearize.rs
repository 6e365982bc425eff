//! Zone boundary shapes and their planar linearization.
//!
//! - Polygon: vertices projected in listed order.
//! - Rectangle: four corners about the projected center, rotated by the
//!   stored angle (degrees clockwise from north, i.e. the negated planar angle).
//! - Circle: `n` equally spaced vertices at radius `r / cos(π/n)` so the
//!   polygon circumscribes the circle (edges are tangent at their midpoints).

use std::f64::consts::{PI, TAU};

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use super::project::Projector;
use super::types::{GeoPoint, GeomCfg, PlanarPoint, ZoneError};

/// Zone boundary shape as received in a zone definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Polygon {
        boundary: Vec<GeoPoint>,
    },
    Rectangle {
        center: GeoPoint,
        /// East-west extent before rotation [m].
        width: f64,
        /// North-south extent before rotation [m].
        height: f64,
        /// Degrees clockwise from north.
        #[serde(default)]
        rotation: f64,
    },
    Circle {
        center: GeoPoint,
        radius: f64,
    },
    /// Any boundary variant this core does not model.
    #[serde(other)]
    Unsupported,
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon { .. } => "polygon",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
            Shape::Unsupported => "unsupported",
        }
    }
}

#[inline]
fn positive_extent(name: &str, v: f64) -> Result<f64, ZoneError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(ZoneError::degenerate(format!("{name} must be finite and > 0, got {v}")))
    }
}

#[inline]
fn finite_center(center: &GeoPoint) -> Result<(), ZoneError> {
    if center.is_finite() {
        Ok(())
    } else {
        Err(ZoneError::degenerate("center is not finite"))
    }
}

/// Linearize a boundary shape into planar vertices (not yet normalized).
pub fn linearize<P: Projector + ?Sized>(
    shape: &Shape,
    projector: &P,
    cfg: &GeomCfg,
) -> Result<Vec<PlanarPoint>, ZoneError> {
    match shape {
        Shape::Polygon { boundary } => {
            if boundary.iter().any(|p| !p.is_finite()) {
                return Err(ZoneError::degenerate("polygon vertex is not finite"));
            }
            Ok(boundary.iter().map(|p| projector.project(*p)).collect())
        }
        Shape::Rectangle {
            center,
            width,
            height,
            rotation,
        } => {
            finite_center(center)?;
            let w = positive_extent("width", *width)? / 2.0;
            let h = positive_extent("height", *height)? / 2.0;
            if !rotation.is_finite() {
                return Err(ZoneError::degenerate("rotation is not finite"));
            }
            let c = projector.project(*center);
            // north-referenced clockwise rotation is the opposite sense of planar ccw
            let rot = Rotation2::new(-rotation.to_radians());
            Ok([(w, h), (-w, h), (-w, -h), (w, -h)]
                .into_iter()
                .map(|(dx, dy)| c + rot * Vector2::new(dx, dy))
                .collect())
        }
        Shape::Circle { center, radius } => {
            finite_center(center)?;
            let r0 = positive_extent("radius", *radius)?;
            let n = cfg.circle_segments.max(3);
            let r = r0 / (PI / n as f64).cos();
            let c = projector.project(*center);
            Ok((0..n)
                .map(|k| {
                    let t = TAU * k as f64 / n as f64;
                    c + Vector2::new(r * t.cos(), r * t.sin())
                })
                .collect())
        }
        Shape::Unsupported => Err(ZoneError::UnsupportedGeometry),
    }
}
