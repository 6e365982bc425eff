//! Waypoint, chain and extracted-sequence types.
//!
//! Kept small and explicit so `walk` reads as the algorithm only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Waypoint identity within one mission.
pub type WaypointNumber = i64;

/// One mission waypoint; immutable once stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub number: WaypointNumber,
    /// Successor number; equal to `number` on the chain terminator.
    pub next: WaypointNumber,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl Waypoint {
    #[inline]
    pub fn new(number: WaypointNumber, next: WaypointNumber, latitude: f64, longitude: f64) -> Self {
        Self {
            number,
            next,
            latitude,
            longitude,
            altitude: None,
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
    #[inline]
    pub fn is_terminator(&self) -> bool {
        self.next == self.number
    }
}

/// Mission as received: the full waypoint list and where to start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionDefinition {
    pub waypoints: Vec<Waypoint>,
    pub first_waypoint: WaypointNumber,
}

/// A mission's waypoints indexed by number.
///
/// Invariants:
/// - `index[n]` points at the first waypoint listed with number `n`; later
///   duplicates stay in `waypoints` but are never reached by lookup.
#[derive(Clone, Debug, Default)]
pub struct WaypointChain {
    waypoints: Vec<Waypoint>,
    index: HashMap<WaypointNumber, usize>,
    first: WaypointNumber,
}

impl WaypointChain {
    pub fn new(waypoints: Vec<Waypoint>, first: WaypointNumber) -> Self {
        let mut index = HashMap::with_capacity(waypoints.len());
        for (k, wp) in waypoints.iter().enumerate() {
            index.entry(wp.number).or_insert(k);
        }
        Self {
            waypoints,
            index,
            first,
        }
    }

    #[inline]
    pub fn first(&self) -> WaypointNumber {
        self.first
    }
    #[inline]
    pub fn get(&self, number: WaypointNumber) -> Option<&Waypoint> {
        self.index.get(&number).map(|&k| &self.waypoints[k])
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

impl From<&MissionDefinition> for WaypointChain {
    fn from(m: &MissionDefinition) -> Self {
        WaypointChain::new(m.waypoints.clone(), m.first_waypoint)
    }
}

/// Why a chain walk ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStop {
    /// Reached a waypoint whose `next` is itself.
    Terminator(WaypointNumber),
    /// `from.next` names a waypoint that does not exist.
    Dangling {
        from: WaypointNumber,
        next: WaypointNumber,
    },
    /// Came back to an already visited waypoint.
    Cycle(WaypointNumber),
    /// The designated first waypoint does not exist.
    MissingFirst(WaypointNumber),
}

/// Ordered zone-transit waypoints plus the entry waypoint to resume tracking at.
///
/// Invariants:
/// - Waypoint numbers are unique within the sequence.
/// - `entry`, when set, names a waypoint of the sequence.
#[derive(Clone, Debug, Default)]
pub struct ZoneSequence {
    pub(crate) waypoints: Vec<Waypoint>,
    pub(crate) index: HashMap<WaypointNumber, usize>,
    pub(crate) entry: Option<WaypointNumber>,
    pub(crate) runs: usize,
    pub(crate) stop: Option<WalkStop>,
}

impl ZoneSequence {
    pub(crate) fn push(&mut self, wp: &Waypoint) {
        if self.index.contains_key(&wp.number) {
            return;
        }
        self.index.insert(wp.number, self.waypoints.len());
        self.waypoints.push(wp.clone());
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
    pub fn numbers(&self) -> Vec<WaypointNumber> {
        self.waypoints.iter().map(|w| w.number).collect()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
    #[inline]
    pub fn get(&self, number: WaypointNumber) -> Option<&Waypoint> {
        self.index.get(&number).map(|&k| &self.waypoints[k])
    }
    #[inline]
    pub fn contains(&self, number: WaypointNumber) -> bool {
        self.index.contains_key(&number)
    }
    /// Entry waypoint of the last inside run encountered by the walk.
    #[inline]
    pub fn entry(&self) -> Option<&Waypoint> {
        self.entry.and_then(|n| self.get(n))
    }
    /// Number of separate inside runs found.
    #[inline]
    pub fn runs(&self) -> usize {
        self.runs
    }
    /// Why the walk ended; `None` if the sequence was never walked.
    #[inline]
    pub fn stop(&self) -> Option<WalkStop> {
        self.stop
    }
    /// Successor of `wp` within the sequence, if its `next` is part of it.
    #[inline]
    pub fn successor(&self, wp: &Waypoint) -> Option<&Waypoint> {
        self.get(wp.next)
    }
}
