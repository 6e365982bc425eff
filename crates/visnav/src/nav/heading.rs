//! Bearing from the vehicle to its target waypoint.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::geo::PlanarPoint;

/// North offset of the synthetic reference point above the vehicle [m].
const NORTH_REFERENCE_OFFSET: f64 = 5000.0;

/// Counter-clockwise angle at `vertex` from ray `vertex→from` to ray `vertex→to`, in `[0, 2π)`.
pub fn angle_separation(from: PlanarPoint, vertex: PlanarPoint, to: PlanarPoint) -> f64 {
    let u = from - vertex;
    let v = to - vertex;
    let a = (v.y.atan2(v.x) - u.y.atan2(u.x)).rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Wrap degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Heading (degrees clockwise from true north, `[0, 360)`) from `vehicle` to `waypoint`.
///
/// The ccw separation between the north reference ray and the waypoint ray is
/// converted to a cw bearing via `360 − angle`.
pub fn desired_heading(vehicle: PlanarPoint, waypoint: PlanarPoint) -> f64 {
    let north = vehicle + Vector2::new(0.0, NORTH_REFERENCE_OFFSET);
    let angle = angle_separation(north, vehicle, waypoint).to_degrees();
    wrap_degrees(360.0 - angle)
}
