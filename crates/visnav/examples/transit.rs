//! Fly a point-mass vehicle through a circular GPS-denied zone.
//!
//! Usage:
//!   cargo run -p visnav --example transit
//!
//! The core runs in test mode so truth doubles as the estimate. Each step the
//! vehicle moves 25 m along the last commanded heading; the run ends at the
//! first loiter command.

use visnav::prelude::*;

fn main() {
    let origin = GeoPoint::new(45.0, -120.0);
    let cfg = NavConfig {
        vehicle_id: 1,
        test_mode: true,
        origin: Some(origin),
        ..NavConfig::default()
    };
    let mut core = NavigationCore::new(cfg);
    let frame = FlatEarth::with_origin(origin);

    core.handle(&NavEvent::Zone(ZoneDefinition::new(
        1,
        Shape::Circle {
            center: origin,
            radius: 1500.0,
        },
    )));
    // south → center → north-east → out; a dog-leg through the zone
    let leg = |n, next, east: f64, north: f64| {
        let g = frame
            .unproject(Vec2::new(east, north))
            .unwrap_or(origin);
        Waypoint::new(n, next, g.latitude, g.longitude)
    };
    core.handle(&NavEvent::Mission(MissionDefinition {
        waypoints: vec![
            leg(1, 2, 0.0, -3000.0),
            leg(2, 3, 0.0, -1000.0),
            leg(3, 4, 600.0, 400.0),
            leg(4, 4, 3000.0, 3000.0),
        ],
        first_waypoint: 1,
    }));
    println!(
        "zone sequence {:?}, entry {:?}",
        core.sequence().numbers(),
        core.target().map(|w| w.number)
    );

    let mut pos = Vec2::new(0.0, -1400.0);
    let mut heading = 0.0_f64;
    for step in 0..400 {
        let Some(g) = frame.unproject(pos) else {
            break;
        };
        let report = PositionReport::new(1, g.latitude, g.longitude);
        for cmd in core.handle(&NavEvent::Truth(report)) {
            match cmd {
                NavCommand::Heading(h) => heading = h.heading,
                NavCommand::Loiter(l) => {
                    println!(
                        "step {step}: left zone at ({:.0}, {:.0}); loiter at {:.5},{:.5} r={} m",
                        pos.x, pos.y, l.action.location.latitude, l.action.location.longitude,
                        l.action.radius
                    );
                    return;
                }
            }
        }
        let rad = heading.to_radians();
        pos += Vec2::new(rad.sin(), rad.cos()) * 25.0;
        if step % 10 == 0 {
            println!(
                "step {step:3}: target {:?} heading {heading:6.1}",
                core.target().map(|w| w.number)
            );
        }
    }
    println!("vehicle never left the zone");
}
