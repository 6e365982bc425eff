use super::*;
use std::collections::HashSet;

/// Linear chain `1 → 2 → … → n → n` with every waypoint 100 m apart.
fn linear_chain(n: i64) -> WaypointChain {
    let wps = (1..=n)
        .map(|k| Waypoint::new(k, (k + 1).min(n), 0.0, 100.0 * k as f64))
        .collect();
    WaypointChain::new(wps, 1)
}

fn inside_set(numbers: &[i64]) -> impl Fn(&Waypoint) -> bool {
    let set: HashSet<i64> = numbers.iter().copied().collect();
    move |w: &Waypoint| set.contains(&w.number)
}

#[test]
fn single_run_with_terminator_inside() {
    // {1: next 2, 2: next 3, 3: next 3}; zone holds 2 and 3.
    let chain = linear_chain(3);
    let seq = extract_zone_sequence(&chain, 1, inside_set(&[2, 3]));
    assert_eq!(seq.numbers(), vec![2, 3]);
    assert_eq!(seq.entry().map(|w| w.number), Some(2));
    assert_eq!(seq.runs(), 1);
    assert_eq!(seq.stop(), Some(WalkStop::Terminator(3)));
}

#[test]
fn exit_waypoint_kept_and_outside_tail_skipped() {
    let chain = linear_chain(6);
    let seq = chain.zone_sequence(inside_set(&[2, 3]));
    // 4 is the first safe point after the run; 5 and 6 are outside-outside.
    assert_eq!(seq.numbers(), vec![2, 3, 4]);
    assert_eq!(seq.entry().map(|w| w.number), Some(2));
}

#[test]
fn last_run_entry_wins() {
    let chain = linear_chain(9);
    let seq = chain.zone_sequence(inside_set(&[2, 3, 6, 7]));
    assert_eq!(seq.numbers(), vec![2, 3, 4, 6, 7, 8]);
    assert_eq!(seq.runs(), 2);
    // the earlier run stays in the sequence but is not the resume point
    assert_eq!(seq.entry().map(|w| w.number), Some(6));
    assert!(seq.contains(2));
}

#[test]
fn first_waypoint_inside_is_entry() {
    let chain = linear_chain(4);
    let seq = chain.zone_sequence(inside_set(&[1, 2]));
    assert_eq!(seq.numbers(), vec![1, 2, 3]);
    assert_eq!(seq.entry().map(|w| w.number), Some(1));
}

#[test]
fn no_inside_waypoint_yields_empty_sequence() {
    let chain = linear_chain(4);
    let seq = chain.zone_sequence(|_| false);
    assert!(seq.is_empty());
    assert!(seq.entry().is_none());
    assert_eq!(seq.stop(), Some(WalkStop::Terminator(4)));
}

#[test]
fn dangling_next_ends_walk() {
    let chain = WaypointChain::new(
        vec![Waypoint::new(1, 2, 0.0, 0.0), Waypoint::new(2, 9, 0.0, 100.0)],
        1,
    );
    let seq = chain.zone_sequence(|_| true);
    assert_eq!(seq.numbers(), vec![1, 2]);
    assert_eq!(seq.stop(), Some(WalkStop::Dangling { from: 2, next: 9 }));
}

#[test]
fn missing_first_waypoint() {
    let chain = linear_chain(3);
    let seq = extract_zone_sequence(&chain, 42, |_| true);
    assert!(seq.is_empty());
    assert_eq!(seq.stop(), Some(WalkStop::MissingFirst(42)));
}

#[test]
fn cycle_without_terminator_is_bounded() {
    // 1 → 2 → 3 → 1, never self-referencing.
    let chain = WaypointChain::new(
        vec![
            Waypoint::new(1, 2, 0.0, 0.0),
            Waypoint::new(2, 3, 0.0, 100.0),
            Waypoint::new(3, 1, 0.0, 200.0),
        ],
        1,
    );
    let seq = chain.zone_sequence(inside_set(&[2]));
    assert_eq!(seq.numbers(), vec![2, 3]);
    assert_eq!(seq.stop(), Some(WalkStop::Cycle(1)));

    // the revisited waypoint closes the run as its exit
    let seq = chain.zone_sequence(inside_set(&[2, 3]));
    assert_eq!(seq.numbers(), vec![2, 3, 1]);
    assert_eq!(seq.entry().map(|w| w.number), Some(2));
}

#[test]
fn large_ring_visits_each_waypoint_once() {
    let n = 10_000i64;
    let wps = (0..n)
        .map(|k| Waypoint::new(k, (k + 1) % n, 0.0, k as f64))
        .collect();
    let chain = WaypointChain::new(wps, 0);
    let mut calls = 0usize;
    let seq = chain.zone_sequence(|_| {
        calls += 1;
        true
    });
    assert_eq!(seq.len(), n as usize);
    assert_eq!(seq.stop(), Some(WalkStop::Cycle(0)));
    assert_eq!(calls, n as usize + 1);
}

#[test]
fn duplicate_numbers_resolve_to_first_listed() {
    let chain = WaypointChain::new(
        vec![
            Waypoint::new(1, 1, 10.0, 10.0),
            Waypoint::new(1, 1, 20.0, 20.0),
        ],
        1,
    );
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.get(1).map(|w| w.latitude), Some(10.0));
}

#[test]
fn successor_stays_within_sequence() {
    let chain = linear_chain(5);
    let seq = chain.zone_sequence(inside_set(&[2, 3]));
    let w2 = seq.get(2).unwrap();
    assert_eq!(seq.successor(w2).map(|w| w.number), Some(3));
    // exit waypoint 4 points at 5, which is not part of the transit
    let w4 = seq.get(4).unwrap();
    assert!(seq.successor(w4).is_none());
}

#[test]
fn mission_definition_from_json() {
    let m: MissionDefinition = serde_json::from_str(
        r#"{"first_waypoint": 7, "waypoints": [
            {"number": 7, "next": 8, "latitude": 1.0, "longitude": 2.0, "altitude": 300.0},
            {"number": 8, "next": 8, "latitude": 1.5, "longitude": 2.5}
        ]}"#,
    )
    .unwrap();
    let chain = WaypointChain::from(&m);
    assert_eq!(chain.first(), 7);
    let w7 = chain.get(7).unwrap();
    assert_eq!(w7.position().altitude, Some(300.0));
    assert!(chain.get(8).unwrap().is_terminator());
}
