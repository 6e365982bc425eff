//! Static configuration supplied once at startup.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, GeomCfg};

/// Navigation core configuration.
///
/// Missing fields in a serialized config take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Vehicle to navigate; `0` accepts position reports from any vehicle.
    pub vehicle_id: i64,
    /// Advance to the next waypoint once the estimate is this close [m].
    pub min_waypoint_distance: f64,
    /// Radius for heading-mode leashing and the exit loiter [m].
    pub loiter_radius: f64,
    /// Zone vertex dedup tolerance [m].
    pub dedup_tolerance: f64,
    /// Circle tessellation vertex count.
    pub circle_segments: usize,
    /// Replay every accepted truth report as a zero-variance estimate.
    pub test_mode: bool,
    /// Fixed projector origin; pinned to the first projected point when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<GeoPoint>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            vehicle_id: 0,
            min_waypoint_distance: 20.0,
            loiter_radius: 304.8,
            dedup_tolerance: 1.0,
            circle_segments: 18,
            test_mode: false,
            origin: None,
        }
    }
}

impl NavConfig {
    /// Whether reports from `vehicle_id` are processed.
    #[inline]
    pub fn accepts(&self, vehicle_id: i64) -> bool {
        self.vehicle_id == 0 || self.vehicle_id == vehicle_id
    }

    /// Geometry tolerances derived from this config.
    pub fn geom(&self) -> GeomCfg {
        GeomCfg {
            dedup_tolerance: self.dedup_tolerance,
            circle_segments: self.circle_segments.max(3),
            ..GeomCfg::default()
        }
    }
}
