use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::warn;
use visnav::geo::Projector;
use visnav::nav::{NavCommand, NavEvent, NavigationCore};

/// Counters reported after a replay run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReplayStats {
    pub events: usize,
    pub skipped: usize,
    pub headings: usize,
    pub loiters: usize,
}

/// Feed JSON-lines events through `core`, writing one JSON command per line.
///
/// Blank lines and lines starting with `#` are ignored. Lines that fail to
/// parse are logged with their line number and skipped.
pub fn replay<P, R, W>(core: &mut NavigationCore<P>, input: R, mut out: W) -> Result<ReplayStats>
where
    P: Projector,
    R: BufRead,
    W: Write,
{
    let mut stats = ReplayStats::default();
    for (k, line) in input.lines().enumerate() {
        let line_no = k + 1;
        let line = line.with_context(|| format!("reading event line {line_no}"))?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let event: NavEvent = match serde_json::from_str(text) {
            Ok(ev) => ev,
            Err(err) => {
                warn!(line = line_no, %err, "skipping malformed event");
                stats.skipped += 1;
                continue;
            }
        };
        stats.events += 1;
        for cmd in core.handle(&event) {
            match cmd {
                NavCommand::Heading(_) => stats.headings += 1,
                NavCommand::Loiter(_) => stats.loiters += 1,
            }
            serde_json::to_writer(&mut out, &cmd)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use visnav::geo::GeoPoint;
    use visnav::nav::NavConfig;

    const ZONE: &str = r#"{"kind":"zone","zone_id":1,"boundary":{"type":"circle","center":{"latitude":45.0,"longitude":-120.0},"radius":1000.0}}"#;
    const MISSION: &str = r#"{"kind":"mission","first_waypoint":1,"waypoints":[
        {"number":1,"next":2,"latitude":44.98,"longitude":-120.0},
        {"number":2,"next":3,"latitude":45.0,"longitude":-120.0},
        {"number":3,"next":3,"latitude":45.02,"longitude":-120.0}]}"#;

    fn core(test_mode: bool) -> NavigationCore {
        NavigationCore::new(NavConfig {
            test_mode,
            origin: Some(GeoPoint::new(45.0, -120.0)),
            ..NavConfig::default()
        })
    }

    fn events(lines: &[&str]) -> String {
        lines
            .iter()
            .map(|l| l.replace('\n', " "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn run(core: &mut NavigationCore, input: &str) -> (ReplayStats, Vec<Value>) {
        let mut out = Vec::new();
        let stats = replay(core, input.as_bytes(), &mut out).unwrap();
        let cmds = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (stats, cmds)
    }

    #[test]
    fn transit_emits_headings_then_one_loiter() {
        let input = events(&[
            ZONE,
            MISSION,
            r#"{"kind":"truth","vehicle_id":2,"latitude":44.995,"longitude":-120.0}"#,
            r#"{"kind":"estimate","vehicle_id":2,"latitude":44.995,"longitude":-120.0}"#,
            r#"{"kind":"truth","vehicle_id":2,"latitude":45.02,"longitude":-120.0}"#,
        ]);
        let mut core = core(false);
        let (stats, cmds) = run(&mut core, &input);
        assert_eq!(
            stats,
            ReplayStats {
                events: 5,
                skipped: 0,
                headings: 1,
                loiters: 1
            }
        );
        assert_eq!(cmds[0]["kind"], "heading");
        // waypoint 2 is due north
        assert!(cmds[0]["heading"].as_f64().unwrap() < 1e-6);
        assert_eq!(cmds[1]["kind"], "loiter");
        assert_eq!(cmds[1]["vehicle_id"], 2);
        assert_eq!(cmds[1]["action"]["duration"], -1.0);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let input = events(&[
            "# comment",
            "",
            ZONE,
            "{not json",
            r#"{"kind":"teleport","vehicle_id":1}"#,
            MISSION,
        ]);
        let mut core = core(false);
        let (stats, cmds) = run(&mut core, &input);
        assert_eq!(stats.events, 2);
        assert_eq!(stats.skipped, 2);
        assert!(cmds.is_empty());
        assert_eq!(core.sequence().numbers(), vec![2, 3]);
    }

    #[test]
    fn test_mode_closes_the_loop_from_truth_alone() {
        let input = events(&[
            ZONE,
            MISSION,
            r#"{"kind":"truth","vehicle_id":1,"latitude":44.995,"longitude":-120.0}"#,
        ]);
        let mut core = core(true);
        let (stats, cmds) = run(&mut core, &input);
        assert_eq!(stats.headings, 1);
        assert_eq!(cmds.len(), 1);
    }
}
