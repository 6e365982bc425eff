//! Zone geometry in the local tangent plane.
//!
//! Purpose
//! - Turn an abstract zone boundary (polygon / rectangle / circle) into a
//!   normalized planar polygon and answer point-in-zone queries against it.
//!
//! Assumptions and conventions
//! - Planar points are `Vector2<f64>` with `x = east`, `y = north` (meters from
//!   the projector origin).
//! - Normalized polygons are deduplicated and counter-clockwise (signed area > 0).
//! - Containment is a crossing-number test, boundary-inclusive within
//!   `GeomCfg::eps_boundary`. Points on an edge count as inside the zone.
//! - Circles are tessellated as circumscribing polygons, so the planar zone
//!   always covers the true circle.
//!
//! Code cross-refs: `Shape`, `linearize`, `normalize`, `ZonePolygon`, `FlatEarth`

mod linearize;
mod polygon;
mod project;
mod types;

pub use linearize::{linearize, Shape};
pub use polygon::{normalize, signed_area, ZonePolygon};
pub use project::{FlatEarth, Projector};
pub use types::{GeoPoint, GeomCfg, PlanarPoint, ZoneError};
