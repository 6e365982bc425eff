//! Mission waypoint chains and zone-transit extraction.
//!
//! Purpose
//! - Index a mission's waypoints by number and walk the `next` links from the
//!   first waypoint, keeping the contiguous runs that lie inside the zone plus
//!   the first waypoint after each run (the exit waypoint).
//!
//! Assumptions and conventions
//! - Each waypoint has out-degree ≤ 1 via `next`; `next == number` terminates.
//! - A `next` with no matching waypoint ends the walk (dangling reference).
//! - Every waypoint is visited at most once, so a cycle that never reaches a
//!   terminator still ends the walk.
//! - The entry waypoint of the last run becomes the initial target.
//!
//! Code cross-refs: `WaypointChain`, `extract_zone_sequence`, `ZoneSequence`

mod types;
mod walk;

pub use types::{MissionDefinition, WalkStop, Waypoint, WaypointChain, WaypointNumber, ZoneSequence};
pub use walk::extract_zone_sequence;

#[cfg(test)]
mod tests;
