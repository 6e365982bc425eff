//! Basic geodetic/planar types, tolerances and zone errors.
//!
//! - `GeoPoint`: WGS-84 latitude/longitude in degrees (optional altitude).
//! - `PlanarPoint`: local tangent-plane meters, `x = east`, `y = north`.
//! - `GeomCfg`: centralizes the zone tolerances and tessellation density.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Planar point in the local tangent plane (`x = east`, `y = north`, meters).
pub type PlanarPoint = Vector2<f64>;

/// Geodetic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl GeoPoint {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Consecutive zone vertices closer than this are merged [m].
    pub dedup_tolerance: f64,
    /// Vertex count used to tessellate circles. Values below 3 clamp to 3.
    pub circle_segments: usize,
    /// Points within this distance of a zone edge count as inside [m].
    pub eps_boundary: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            dedup_tolerance: 1.0,
            circle_segments: 18,
            eps_boundary: 1e-6,
        }
    }
}

/// Reasons a zone definition cannot become the active zone polygon.
///
/// Callers keep the previously active zone on any of these.
#[derive(Clone, Debug, PartialEq)]
pub enum ZoneError {
    /// Boundary shape variant is not one of polygon / rectangle / circle.
    UnsupportedGeometry,
    /// Boundary is recognized but does not enclose any area.
    DegenerateGeometry { reason: String },
}

impl ZoneError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::UnsupportedGeometry => write!(f, "unsupported zone boundary geometry"),
            ZoneError::DegenerateGeometry { reason } => {
                write!(f, "degenerate zone boundary: {reason}")
            }
        }
    }
}

impl std::error::Error for ZoneError {}
