//! Chain walk extracting the zone-transit sub-sequence.

use std::collections::HashSet;

use super::types::{WalkStop, Waypoint, WaypointChain, WaypointNumber, ZoneSequence};

/// Walk `chain` from `first`, keeping inside runs and their exit waypoints.
///
/// Per visited waypoint `w` (with `prev` = whether the previous one was inside):
/// - inside, `!prev`: start a run; `w` becomes the entry candidate and is kept.
/// - inside, `prev`: kept.
/// - outside, `prev`: kept as the run's exit waypoint.
/// - outside, `!prev`: skipped.
///
/// The entry of the last run wins. Each waypoint is visited at most once; on a
/// revisit the walk stops with `WalkStop::Cycle`, still recording the revisited
/// waypoint as an exit if it closes a run.
pub fn extract_zone_sequence<F>(
    chain: &WaypointChain,
    first: WaypointNumber,
    mut inside: F,
) -> ZoneSequence
where
    F: FnMut(&Waypoint) -> bool,
{
    let mut seq = ZoneSequence::default();
    let Some(mut cur) = chain.get(first) else {
        seq.stop = Some(WalkStop::MissingFirst(first));
        return seq;
    };
    let mut visited: HashSet<WaypointNumber> = HashSet::with_capacity(chain.len());
    let mut prev_inside = false;
    let stop = loop {
        if !visited.insert(cur.number) {
            if prev_inside && !inside(cur) {
                seq.push(cur);
            }
            break WalkStop::Cycle(cur.number);
        }
        let is_inside = inside(cur);
        match (is_inside, prev_inside) {
            (true, false) => {
                seq.entry = Some(cur.number);
                seq.runs += 1;
                seq.push(cur);
            }
            (true, true) | (false, true) => seq.push(cur),
            (false, false) => {}
        }
        prev_inside = is_inside;
        if cur.is_terminator() {
            break WalkStop::Terminator(cur.number);
        }
        match chain.get(cur.next) {
            Some(next) => cur = next,
            None => {
                break WalkStop::Dangling {
                    from: cur.number,
                    next: cur.next,
                }
            }
        }
    };
    seq.stop = Some(stop);
    seq
}

impl WaypointChain {
    /// Walk from the chain's designated first waypoint.
    pub fn zone_sequence<F>(&self, inside: F) -> ZoneSequence
    where
        F: FnMut(&Waypoint) -> bool,
    {
        extract_zone_sequence(self, self.first(), inside)
    }
}
