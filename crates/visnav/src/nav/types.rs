//! Inbound events and outbound commands.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, Shape};
use crate::mission::MissionDefinition;

/// GPS-denied zone definition; replaces the active zone wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    #[serde(default)]
    pub zone_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Vehicles this zone applies to; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_vehicles: Vec<i64>,
    pub boundary: Shape,
}

impl ZoneDefinition {
    pub fn new(zone_id: i64, boundary: Shape) -> Self {
        Self {
            zone_id,
            label: None,
            affected_vehicles: Vec::new(),
            boundary,
        }
    }

    /// `vehicle_id == 0` (filter disabled) matches every zone.
    pub fn applies_to(&self, vehicle_id: i64) -> bool {
        vehicle_id == 0
            || self.affected_vehicles.is_empty()
            || self.affected_vehicles.contains(&vehicle_id)
    }
}

/// Truth or estimate position of one vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionReport {
    pub vehicle_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Per-axis position variance of an estimate (x, y, z); informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<[f64; 3]>,
}

impl PositionReport {
    pub fn new(vehicle_id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            vehicle_id,
            latitude,
            longitude,
            altitude: None,
            variance: None,
        }
    }
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
        }
    }
    /// The same fix re-issued as a perfect (zero-variance) estimate.
    pub fn as_exact_estimate(&self) -> Self {
        Self {
            variance: Some([0.0; 3]),
            ..self.clone()
        }
    }
}

/// One inbound update for the navigation core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavEvent {
    Zone(ZoneDefinition),
    Mission(MissionDefinition),
    Truth(PositionReport),
    Estimate(PositionReport),
}

/// Safe-heading command: steer toward `heading` while leashed to `loiter_radius`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadingCommand {
    pub vehicle_id: i64,
    /// Degrees clockwise from true north, in `[0, 360)`.
    pub heading: f64,
    pub loiter_radius: f64,
    pub heading_rate: f64,
    pub use_heading_rate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoiterDirection {
    VehicleDefault,
    Clockwise,
    CounterClockwise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoiterType {
    VehicleDefault,
    Circular,
    Racetrack,
    FigureEight,
    Hover,
}

/// Loiter action parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoiterAction {
    pub location: GeoPoint,
    pub radius: f64,
    pub axis: f64,
    pub direction: LoiterDirection,
    pub loiter_type: LoiterType,
    /// Negative means loiter until commanded otherwise [ms].
    pub duration: f64,
    pub length: f64,
}

impl LoiterAction {
    /// Vehicle-default circular hold at `location` with no time limit.
    pub fn indefinite(location: GeoPoint, radius: f64) -> Self {
        Self {
            location,
            radius,
            axis: 0.0,
            direction: LoiterDirection::VehicleDefault,
            loiter_type: LoiterType::VehicleDefault,
            duration: -1.0,
            length: 0.0,
        }
    }
}

/// Vehicle action command carrying one loiter action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoiterCommand {
    pub vehicle_id: i64,
    pub action: LoiterAction,
}

/// One outbound command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavCommand {
    Heading(HeadingCommand),
    Loiter(LoiterCommand),
}
