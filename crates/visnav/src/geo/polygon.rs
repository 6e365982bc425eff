//! Normalized zone polygon: dedup, orientation, containment.

use super::linearize::{linearize, Shape};
use super::project::Projector;
use super::types::{GeomCfg, PlanarPoint, ZoneError};

/// Areas at or below this magnitude are treated as zero [m²].
const AREA_EPS: f64 = 1e-9;

/// Active zone polygon in the local tangent plane.
///
/// Invariants:
/// - Either empty (no active zone) or ≥ 3 vertices.
/// - Non-empty polygons are simple (no two non-adjacent edges touch) and have
///   positive signed area (counter-clockwise).
/// - No two consecutive vertices (including last→first) are closer than the
///   dedup tolerance used to build it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZonePolygon {
    vertices: Vec<PlanarPoint>,
}

impl ZonePolygon {
    /// The "no active zone" polygon.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Linearize and normalize a boundary shape in one step.
    pub fn from_shape<P: Projector + ?Sized>(
        shape: &Shape,
        projector: &P,
        cfg: &GeomCfg,
    ) -> Result<Self, ZoneError> {
        let points = linearize(shape, projector, cfg)?;
        normalize(points, cfg.dedup_tolerance)
    }

    #[inline]
    pub fn vertices(&self) -> &[PlanarPoint] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area (shoelace); positive for every non-empty normalized polygon.
    #[inline]
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Boundary-inclusive containment with the default slack.
    #[inline]
    pub fn contains(&self, p: PlanarPoint) -> bool {
        self.contains_eps(p, GeomCfg::default().eps_boundary)
    }

    /// Crossing-number containment; points within `eps` of an edge count as inside.
    ///
    /// Empty polygon contains nothing. The result does not depend on which
    /// vertex is listed first or on the polygon's absolute placement.
    pub fn contains_eps(&self, p: PlanarPoint, eps: f64) -> bool {
        let n = self.vertices.len();
        if n == 0 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[j];
            let b = self.vertices[i];
            if segment_distance(a, b, p) <= eps {
                return true;
            }
            if (b.y > p.y) != (a.y > p.y) {
                let x_cross = b.x + (p.y - b.y) * (a.x - b.x) / (a.y - b.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Shoelace signed area; positive for counter-clockwise vertex order.
pub fn signed_area(points: &[PlanarPoint]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..n {
        let p = points[k];
        let q = points[(k + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

/// Drop consecutive near-duplicates (including the closing pair) and orient ccw.
///
/// Rejects boundaries with fewer than 3 distinct vertices, crossing or touching
/// non-adjacent edges, or zero enclosed area.
pub fn normalize(points: Vec<PlanarPoint>, tolerance: f64) -> Result<ZonePolygon, ZoneError> {
    if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(ZoneError::degenerate("vertex is not finite"));
    }
    let mut kept: Vec<PlanarPoint> = Vec::with_capacity(points.len());
    for p in points {
        match kept.last() {
            Some(last) if (p - *last).norm() < tolerance => {}
            _ => kept.push(p),
        }
    }
    while kept.len() > 1 && (kept[kept.len() - 1] - kept[0]).norm() < tolerance {
        kept.pop();
    }
    if kept.len() < 3 {
        return Err(ZoneError::degenerate(format!(
            "{} distinct vertices after dedup (need ≥ 3)",
            kept.len()
        )));
    }
    if self_intersects(&kept) {
        return Err(ZoneError::degenerate("boundary self-intersects"));
    }
    let area = signed_area(&kept);
    if area.abs() <= AREA_EPS {
        return Err(ZoneError::degenerate("zero enclosed area"));
    }
    if area < 0.0 {
        kept.reverse();
    }
    Ok(ZonePolygon { vertices: kept })
}

#[inline]
fn segment_distance(a: PlanarPoint, b: PlanarPoint, p: PlanarPoint) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}


/// Twice the signed area of triangle `abc`; positive when `c` is left of `a→b`.
#[inline]
fn orient(a: PlanarPoint, b: PlanarPoint, c: PlanarPoint) -> f64 {
    let (u, v) = (b - a, c - a);
    u.x * v.y - u.y * v.x
}

/// `p` lies in the bounding box of segment `ab` (callers ensure collinearity).
#[inline]
fn within_box(a: PlanarPoint, b: PlanarPoint, p: PlanarPoint) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed segments `ab` and `cd` share at least one point.
fn segments_touch(a: PlanarPoint, b: PlanarPoint, c: PlanarPoint, d: PlanarPoint) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);
    if d1 * d2 < 0.0 && d3 * d4 < 0.0 {
        return true;
    }
    (d1 == 0.0 && within_box(c, d, a))
        || (d2 == 0.0 && within_box(c, d, b))
        || (d3 == 0.0 && within_box(a, b, c))
        || (d4 == 0.0 && within_box(a, b, d))
}

/// Any pair of non-adjacent edges touches; O(n²) over the closed ring.
fn self_intersects(ring: &[PlanarPoint]) -> bool {
    let n = ring.len();
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        for j in (i + 2)..n {
            // edge n-1 closes onto vertex 0, adjacent to edge 0
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c, d) = (ring[j], ring[(j + 1) % n]);
            if segments_touch(a, b, c, d) {
                return true;
            }
        }
    }
    false
}
