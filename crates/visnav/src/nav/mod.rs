//! Per-vehicle navigation state machine for GPS-denied zone transit.
//!
//! Purpose
//! - Track zone membership from truth positions, steer along the zone
//!   waypoint sequence from estimate positions, and hand control to a loiter
//!   point the moment truth shows the vehicle has left the zone.
//!
//! Why this design
//! - Inputs and outputs are closed enums (`NavEvent`, `NavCommand`); the core
//!   processes exactly one event to completion per `handle` call.
//! - All mutable state lives in one `NavigationCore` owned by the host; one
//!   instance per vehicle, no shared or global state.
//! - `in_zone` is written only by truth updates. Estimate updates read it but
//!   re-test their own position before commanding a heading.
//!
//! Failure policy
//! - Every input error is recovered locally (see `ZoneError`, `WalkStop`); the
//!   core never panics on input and never emits commands without a zone,
//!   a mission and a tracked target.
//!
//! Code cross-refs: `NavigationCore`, `desired_heading`, `NavConfig`

mod config;
mod heading;
mod machine;
mod types;

pub use config::NavConfig;
pub use heading::{angle_separation, desired_heading, wrap_degrees};
pub use machine::{NavigationCore, ZonePhase};
pub use types::{
    HeadingCommand, LoiterAction, LoiterCommand, LoiterDirection, LoiterType, NavCommand,
    NavEvent, PositionReport, ZoneDefinition,
};
