use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::Path;
use visnav::nav::NavConfig;

/// Command-line overrides applied on top of the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Vehicle to navigate; 0 accepts reports from every vehicle
    #[arg(long)]
    pub vehicle_id: Option<i64>,
    /// Waypoint acceptance distance [m]
    #[arg(long)]
    pub min_waypoint_distance: Option<f64>,
    /// Heading leash and exit loiter radius [m]
    #[arg(long)]
    pub loiter_radius: Option<f64>,
    /// Replay each truth report as a perfect estimate
    #[arg(long)]
    pub test_mode: bool,
}

impl Overrides {
    pub fn apply(&self, mut cfg: NavConfig) -> NavConfig {
        if let Some(id) = self.vehicle_id {
            cfg.vehicle_id = id;
        }
        if let Some(d) = self.min_waypoint_distance {
            cfg.min_waypoint_distance = d;
        }
        if let Some(r) = self.loiter_radius {
            cfg.loiter_radius = r;
        }
        if self.test_mode {
            cfg.test_mode = true;
        }
        cfg
    }
}

/// Read a JSON `NavConfig`; missing file argument means defaults.
pub fn load(path: Option<&Path>) -> Result<NavConfig> {
    let Some(path) = path else {
        return Ok(NavConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
