//! Vision-based navigation through a GPS-denied zone.
//!
//! Layout
//! - `geo`: local tangent-plane geometry (projector, zone shapes, normalized
//!   polygons, containment).
//! - `mission`: waypoint chains and extraction of the zone-transit sub-sequence.
//! - `nav`: the per-vehicle reactive state machine that turns truth/estimate
//!   position reports into heading and loiter commands.
//!
//! Conventions
//! - Planar points are `Vec2` with `x = east`, `y = north`, in meters.
//! - Headings are degrees clockwise from true north in `[0, 360)`.
//! - One `NavigationCore` per vehicle; processing is strictly sequential.

pub mod geo;
pub mod mission;
pub mod nav;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for hosts driving a navigation core.
pub mod prelude {
    pub use crate::geo::{
        linearize, normalize, signed_area, FlatEarth, GeoPoint, GeomCfg, PlanarPoint, Projector,
        Shape, ZoneError, ZonePolygon,
    };
    pub use crate::mission::{
        extract_zone_sequence, MissionDefinition, WalkStop, Waypoint, WaypointChain, ZoneSequence,
    };
    pub use crate::nav::{
        desired_heading, HeadingCommand, LoiterAction, LoiterCommand, NavCommand, NavConfig,
        NavEvent, NavigationCore, PositionReport, ZoneDefinition, ZonePhase,
    };
    pub use nalgebra::Vector2 as Vec2;
}
