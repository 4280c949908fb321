//! skirmish-headless: run a battle without a renderer and print the final state.
//!
//! Usage:
//!   skirmish-headless --ticks 600 --dt 0.016 --seed 7
//!   skirmish-headless --scenario battle.json --assault 100,-20 --verbose

mod logging;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use skirmish_ai::index::IndexKind;
use skirmish_sim::core::commands::PlayerCommand;
use skirmish_sim::core::constants::FRIENDLY_TEAM;
use skirmish_sim::core::enums::PathMode;
use skirmish_sim::core::events::SimEvent;
use skirmish_sim::core::types::Vector2;
use skirmish_sim::{Scenario, SimConfig, SimulationEngine};

/// Run a skirmish headlessly and print the final snapshot as JSON
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
    /// RNG seed for damage rolls
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Scenario JSON file; the built-in skirmish when absent
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Send every friendly unit to X,Y in assault mode before the first tick
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    assault: Option<Vector2>,
    /// Use the uniform grid index instead of a linear scan
    #[arg(long)]
    grid: bool,
    /// Print compact JSON
    #[arg(long)]
    compact: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Vector2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    Ok(Vector2::new(parse(x)?, parse(y)?))
}

fn load_scenario(path: Option<&PathBuf>) -> Result<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::skirmish());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    Scenario::from_json(&json).with_context(|| format!("loading scenario {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    if !(args.dt.is_finite() && args.dt > 0.0) {
        bail!("--dt must be a positive number of seconds");
    }

    let scenario = load_scenario(args.scenario.as_ref())?;
    let config = SimConfig {
        seed: args.seed,
        spatial_index: if args.grid {
            IndexKind::grid()
        } else {
            IndexKind::Linear
        },
        ..Default::default()
    };
    let mut engine = SimulationEngine::from_scenario(config, &scenario)?;

    if let Some(target) = args.assault {
        let friendlies = engine
            .tick(0.0)
            .units
            .into_iter()
            .filter(|u| u.team == FRIENDLY_TEAM)
            .map(|u| u.id)
            .collect();
        engine.queue_command(PlayerCommand::IssuePath {
            units: friendlies,
            target,
            assault: true,
            mode: PathMode::Replace,
        });
    }

    let mut shots = 0usize;
    let mut destroyed = 0usize;
    let mut snapshot = engine.tick(0.0);
    for _ in 0..args.ticks {
        snapshot = engine.tick(args.dt);
        for event in &snapshot.events {
            match event {
                SimEvent::ShotFired { .. } => shots += 1,
                SimEvent::UnitDestroyed { .. } => destroyed += 1,
                _ => {}
            }
        }
    }

    info!(
        "{} ticks, {:.2}s simulated: {shots} shots, {destroyed} destroyed, {} units left",
        snapshot.time.tick,
        snapshot.time.elapsed_secs,
        snapshot.units.len()
    );

    let json = if args.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{json}");
    Ok(())
}
