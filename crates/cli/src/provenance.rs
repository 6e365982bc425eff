use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use visnav::nav::NavConfig;

use crate::replay::ReplayStats;

/// What one replay run consumed, how it was configured, and where the core ended up.
#[derive(Debug, Serialize)]
pub struct ReplayRecord<'a> {
    pub input: &'a str,
    pub config: &'a NavConfig,
    pub stats: ReplayStats,
    /// Active zone after the last event.
    pub zone_id: Option<i64>,
    /// Target waypoint after the last event.
    pub final_target: Option<i64>,
    pub in_zone: bool,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    #[serde(flatten)]
    run: &'a ReplayRecord<'a>,
    commands: usize,
    command_log: String,
}

/// Write `<command_log stem>.provenance.json` next to the command log.
#[track_caller]
pub fn write_sidecar(command_log: &Path, run: &ReplayRecord<'_>) -> Result<PathBuf> {
    let path = sidecar_path(command_log);
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: visnav::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        run,
        commands: run.stats.headings + run.stats.loiters,
        command_log: command_log.to_string_lossy().into_owned(),
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(command_log: &Path) -> PathBuf {
    command_log.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
}
