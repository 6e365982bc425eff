//! `NavigationCore`: zone membership, target advancement, command emission.

use tracing::{debug, info, trace, warn};

use crate::geo::{FlatEarth, GeomCfg, PlanarPoint, Projector, ZoneError, ZonePolygon};
use crate::mission::{MissionDefinition, WalkStop, Waypoint, WaypointChain, ZoneSequence};

use super::config::NavConfig;
use super::heading::desired_heading;
use super::types::{
    HeadingCommand, LoiterAction, LoiterCommand, NavCommand, NavEvent, PositionReport,
    ZoneDefinition,
};

/// Zone membership as last observed from truth position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZonePhase {
    Outside,
    Inside,
}

/// Navigation state machine for one vehicle.
///
/// Invariants:
/// - `in_zone` changes only on truth reports.
/// - `target`, when set, is a member of `sequence`.
/// - `sequence` is rebuilt whenever a zone and a mission are both present and
///   either one is replaced.
#[derive(Clone, Debug)]
pub struct NavigationCore<P = FlatEarth> {
    cfg: NavConfig,
    geom: GeomCfg,
    projector: P,
    zone: ZonePolygon,
    zone_id: Option<i64>,
    chain: Option<WaypointChain>,
    sequence: ZoneSequence,
    target: Option<Waypoint>,
    in_zone: bool,
}

impl NavigationCore<FlatEarth> {
    /// Core with a flat-earth projector at `cfg.origin` (or pinned on first use).
    pub fn new(cfg: NavConfig) -> Self {
        let projector = match cfg.origin {
            Some(origin) => FlatEarth::with_origin(origin),
            None => FlatEarth::new(),
        };
        Self::with_projector(cfg, projector)
    }
}

impl<P: Projector> NavigationCore<P> {
    pub fn with_projector(cfg: NavConfig, projector: P) -> Self {
        let geom = cfg.geom();
        Self {
            cfg,
            geom,
            projector,
            zone: ZonePolygon::empty(),
            zone_id: None,
            chain: None,
            sequence: ZoneSequence::default(),
            target: None,
            in_zone: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.cfg
    }
    #[inline]
    pub fn projector(&self) -> &P {
        &self.projector
    }
    #[inline]
    pub fn zone(&self) -> &ZonePolygon {
        &self.zone
    }
    #[inline]
    pub fn zone_id(&self) -> Option<i64> {
        self.zone_id
    }
    #[inline]
    pub fn chain(&self) -> Option<&WaypointChain> {
        self.chain.as_ref()
    }
    #[inline]
    pub fn sequence(&self) -> &ZoneSequence {
        &self.sequence
    }
    #[inline]
    pub fn target(&self) -> Option<&Waypoint> {
        self.target.as_ref()
    }
    #[inline]
    pub fn in_zone(&self) -> bool {
        self.in_zone
    }
    #[inline]
    pub fn phase(&self) -> ZonePhase {
        if self.in_zone {
            ZonePhase::Inside
        } else {
            ZonePhase::Outside
        }
    }

    /// Process one event to completion and return the commands it produced.
    pub fn handle(&mut self, event: &NavEvent) -> Vec<NavCommand> {
        match event {
            NavEvent::Zone(def) => {
                if let Err(err) = self.set_zone(def) {
                    warn!(
                        zone_id = def.zone_id,
                        kind = def.boundary.kind(),
                        %err,
                        "zone definition rejected; keeping previous zone"
                    );
                }
                Vec::new()
            }
            NavEvent::Mission(mission) => {
                self.set_mission(mission);
                Vec::new()
            }
            NavEvent::Truth(report) => {
                let mut out: Vec<NavCommand> = self.on_truth(report).into_iter().collect();
                if self.cfg.test_mode && self.cfg.accepts(report.vehicle_id) {
                    out.extend(self.on_estimate(&report.as_exact_estimate()));
                }
                out
            }
            NavEvent::Estimate(report) => self.on_estimate(report).into_iter().collect(),
        }
    }

    /// Replace the active zone.
    ///
    /// Returns `Ok(false)` if the zone does not apply to the configured vehicle.
    /// On error the previous zone stays active.
    pub fn set_zone(&mut self, def: &ZoneDefinition) -> Result<bool, ZoneError> {
        if !def.applies_to(self.cfg.vehicle_id) {
            debug!(
                zone_id = def.zone_id,
                vehicle_id = self.cfg.vehicle_id,
                "zone does not list this vehicle; ignored"
            );
            return Ok(false);
        }
        let polygon = ZonePolygon::from_shape(&def.boundary, &self.projector, &self.geom)?;
        info!(
            zone_id = def.zone_id,
            label = ?def.label,
            kind = def.boundary.kind(),
            vertices = polygon.len(),
            area_m2 = polygon.area(),
            "zone accepted"
        );
        self.zone = polygon;
        self.zone_id = Some(def.zone_id);
        self.rebuild_sequence();
        Ok(true)
    }

    /// Replace the active mission and re-extract the zone sequence.
    pub fn set_mission(&mut self, mission: &MissionDefinition) {
        info!(
            waypoints = mission.waypoints.len(),
            first = mission.first_waypoint,
            "mission accepted"
        );
        self.chain = Some(WaypointChain::from(mission));
        self.sequence = ZoneSequence::default();
        self.target = None;
        self.rebuild_sequence();
    }

    /// Truth position: the only writer of `in_zone`.
    ///
    /// Emits one loiter command on each inside → outside transition.
    pub fn on_truth(&mut self, report: &PositionReport) -> Option<NavCommand> {
        if !self.cfg.accepts(report.vehicle_id) {
            debug!(vehicle_id = report.vehicle_id, "truth report for other vehicle ignored");
            return None;
        }
        let p = self.projector.project(report.position());
        if self.zone_contains(p) {
            if !self.in_zone {
                info!(
                    vehicle_id = report.vehicle_id,
                    zone_id = ?self.zone_id,
                    "vehicle entered GPS-denied zone"
                );
            }
            self.in_zone = true;
            return None;
        }
        if !self.in_zone {
            return None;
        }
        self.in_zone = false;
        match &self.target {
            Some(target) => {
                info!(
                    vehicle_id = report.vehicle_id,
                    waypoint = target.number,
                    "vehicle left GPS-denied zone; loitering at target"
                );
                Some(NavCommand::Loiter(LoiterCommand {
                    vehicle_id: report.vehicle_id,
                    action: LoiterAction::indefinite(target.position(), self.cfg.loiter_radius),
                }))
            }
            None => {
                warn!(
                    vehicle_id = report.vehicle_id,
                    "vehicle left GPS-denied zone with no tracked target; no loiter issued"
                );
                None
            }
        }
    }

    /// Estimate position: advances the target and commands a heading while inside.
    pub fn on_estimate(&mut self, report: &PositionReport) -> Option<NavCommand> {
        if !self.cfg.accepts(report.vehicle_id) || !self.in_zone || self.sequence.is_empty() {
            return None;
        }
        let current = self.target.as_ref()?;
        let vehicle = self.projector.project(report.position());
        let distance = (vehicle - self.projector.project(current.position())).norm();
        if distance <= self.cfg.min_waypoint_distance {
            match self.sequence.successor(current) {
                Some(next) => {
                    if next.number != current.number {
                        debug!(
                            vehicle_id = report.vehicle_id,
                            from = current.number,
                            to = next.number,
                            distance,
                            "advancing target waypoint"
                        );
                    }
                    let next = next.clone();
                    self.target = Some(next);
                }
                None => debug!(
                    waypoint = current.number,
                    next = current.next,
                    "successor outside zone sequence; holding target"
                ),
            }
        }
        if !self.zone_contains(vehicle) {
            trace!(vehicle_id = report.vehicle_id, "estimate outside zone; no heading");
            return None;
        }
        let target = self.target.as_ref()?;
        let heading = desired_heading(vehicle, self.projector.project(target.position()));
        trace!(
            vehicle_id = report.vehicle_id,
            waypoint = target.number,
            heading,
            "heading command"
        );
        Some(NavCommand::Heading(HeadingCommand {
            vehicle_id: report.vehicle_id,
            heading,
            loiter_radius: self.cfg.loiter_radius,
            heading_rate: 0.0,
            use_heading_rate: false,
        }))
    }

    fn rebuild_sequence(&mut self) {
        let Some(chain) = self.chain.as_ref() else {
            return;
        };
        if self.zone.is_empty() {
            return;
        }
        let (zone, projector, eps) = (&self.zone, &self.projector, self.geom.eps_boundary);
        let seq = chain.zone_sequence(|wp| zone.contains_eps(projector.project(wp.position()), eps));
        match seq.stop() {
            Some(WalkStop::Dangling { from, next }) => {
                debug!(from, next, "waypoint chain ends at a dangling reference")
            }
            Some(WalkStop::Cycle(number)) => {
                warn!(number, "waypoint chain cycles without a terminator; walk stopped")
            }
            Some(WalkStop::MissingFirst(number)) => {
                warn!(number, "first waypoint not found in mission")
            }
            Some(WalkStop::Terminator(_)) | None => {}
        }
        info!(
            waypoints = ?seq.numbers(),
            entry = ?seq.entry().map(|w| w.number),
            runs = seq.runs(),
            "zone waypoint sequence extracted"
        );
        self.target = seq.entry().cloned();
        self.sequence = seq;
    }

    #[inline]
    fn zone_contains(&self, p: PlanarPoint) -> bool {
        self.zone.contains_eps(p, self.geom.eps_boundary)
    }
}
