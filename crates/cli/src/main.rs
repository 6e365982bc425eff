use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use visnav::nav::{NavConfig, NavigationCore};

mod config;
mod provenance;
mod replay;
mod zone;

#[derive(Parser)]
#[command(name = "visnav")]
#[command(about = "GPS-denied zone navigation: event replay and zone inspection")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay JSON-lines events through one navigation core
    Replay {
        /// Event stream, one JSON event per line; `-` reads stdin
        #[arg(long)]
        input: String,
        /// Command log; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: config::Overrides,
    },
    /// Print the planar polygon a zone definition normalizes to
    Zone {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print version, code revision and default config
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Replay {
            input,
            out,
            config,
            overrides,
        } => run_replay(input, out, config, overrides),
        Action::Zone { input, config } => run_zone(input, config),
        Action::Report => report(),
    }
}

fn run_replay(
    input: String,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
    overrides: config::Overrides,
) -> Result<()> {
    let cfg = overrides.apply(config::load(config.as_deref())?);
    tracing::info!(
        input,
        out = ?out,
        vehicle_id = cfg.vehicle_id,
        test_mode = cfg.test_mode,
        "replay"
    );
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&input).with_context(|| format!("opening events {input}"))?;
        Box::new(BufReader::new(file))
    };
    let mut core = NavigationCore::new(cfg.clone());

    let stats = match &out {
        Some(path) => {
            ensure_parent(path)?;
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let stats = replay::replay(&mut core, reader, BufWriter::new(file))?;
            let run = provenance::ReplayRecord {
                input: &input,
                config: &cfg,
                stats,
                zone_id: core.zone_id(),
                final_target: core.target().map(|w| w.number),
                in_zone: core.in_zone(),
            };
            let sidecar = provenance::write_sidecar(path, &run)?;
            tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
            stats
        }
        None => replay::replay(&mut core, reader, io::stdout().lock())?,
    };
    tracing::info!(
        events = stats.events,
        skipped = stats.skipped,
        headings = stats.headings,
        loiters = stats.loiters,
        "replay finished"
    );
    Ok(())
}

fn run_zone(input: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let cfg = config::load(config.as_deref())?;
    let def = zone::load(&input)?;
    let summary = zone::inspect(&def, &cfg)?;
    tracing::info!(
        zone_id = summary.zone_id,
        vertices = summary.vertices.len(),
        area_m2 = summary.signed_area_m2,
        "zone"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "version": visnav::VERSION,
        "code_rev": provenance::current_git_rev(),
        "config": NavConfig::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
