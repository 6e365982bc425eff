//! Geodetic → local tangent-plane projection.
//!
//! `FlatEarth` is a WGS-84 flat-earth approximation about a fixed origin:
//! meridional and transverse radii of curvature are evaluated once at the
//! origin latitude and held constant. Accurate to well under a meter over the
//! few-kilometer extents of a zone and its mission.

use std::cell::OnceCell;
use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use super::types::{GeoPoint, PlanarPoint};

/// WGS-84 semi-major axis [m].
const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS-84 first eccentricity squared.
const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

/// Capability: map a geodetic position to local planar meters from a fixed origin.
pub trait Projector {
    fn project(&self, p: GeoPoint) -> PlanarPoint;
}

impl<F> Projector for F
where
    F: Fn(GeoPoint) -> PlanarPoint,
{
    #[inline]
    fn project(&self, p: GeoPoint) -> PlanarPoint {
        self(p)
    }
}

/// Radii and origin (radians) of the local frame.
#[derive(Clone, Copy, Debug)]
struct Frame {
    lat0: f64,
    lon0: f64,
    /// Meters per radian of latitude.
    m_per_rad_north: f64,
    /// Meters per radian of longitude at the origin latitude.
    m_per_rad_east: f64,
    origin: GeoPoint,
}

impl Frame {
    fn at(origin: GeoPoint) -> Self {
        let lat0 = origin.latitude.to_radians();
        let s2 = lat0.sin().powi(2);
        let denom = 1.0 - WGS84_E2 * s2;
        let r_meridian = WGS84_A * (1.0 - WGS84_E2) / denom.powf(1.5);
        let r_transverse = WGS84_A / denom.sqrt();
        Self {
            lat0,
            lon0: origin.longitude.to_radians(),
            m_per_rad_north: r_meridian,
            m_per_rad_east: r_transverse * lat0.cos(),
            origin,
        }
    }
}

/// Longitude difference wrapped into `(-π, π]`.
#[inline]
fn wrap_pi(a: f64) -> f64 {
    let x = (a + PI).rem_euclid(TAU) - PI;
    if x <= -PI {
        x + TAU
    } else {
        x
    }
}

/// Flat-earth projector with a fixed origin.
///
/// Invariants:
/// - The origin never moves once set. `FlatEarth::new()` pins it to the first
///   point ever projected; `with_origin` fixes it up front.
#[derive(Clone, Debug, Default)]
pub struct FlatEarth {
    frame: OnceCell<Frame>,
}

impl FlatEarth {
    /// Origin is pinned lazily to the first projected point.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(origin: GeoPoint) -> Self {
        let frame = OnceCell::new();
        let _ = frame.set(Frame::at(origin));
        Self { frame }
    }

    /// Origin of the local frame, if already pinned.
    pub fn origin(&self) -> Option<GeoPoint> {
        self.frame.get().map(|f| f.origin)
    }

    /// Inverse projection; `None` until the origin is pinned.
    pub fn unproject(&self, q: PlanarPoint) -> Option<GeoPoint> {
        let f = self.frame.get()?;
        let lat = f.lat0 + q.y / f.m_per_rad_north;
        let lon = f.lon0 + q.x / f.m_per_rad_east;
        Some(GeoPoint::new(lat.to_degrees(), wrap_pi(lon).to_degrees()))
    }
}

impl Projector for FlatEarth {
    fn project(&self, p: GeoPoint) -> PlanarPoint {
        let f = self.frame.get_or_init(|| Frame::at(p));
        let north = f.m_per_rad_north * (p.latitude.to_radians() - f.lat0);
        let east = f.m_per_rad_east * wrap_pi(p.longitude.to_radians() - f.lon0);
        Vector2::new(east, north)
    }
}
