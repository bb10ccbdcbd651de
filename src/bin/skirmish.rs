//! Headless Skirmish Runner
//!
//! Runs a deterministic squad-versus-pods skirmish and reports the
//! outcome as JSON or text.

use clap::Parser;
use std::path::PathBuf;

use last_bastion::core::config::{set_config, SimulationConfig};
use last_bastion::core::types::GridPosition;
use last_bastion::pod::PodArchetype;
use last_bastion::simulation::{Skirmish, SkirmishEvent};

/// Headless Skirmish Runner - deterministic combat-core demo
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a deterministic skirmish through the combat core")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum turns before the engagement is called off
    #[arg(long, default_value_t = 20)]
    max_turns: u64,

    /// Soldiers in the squad
    #[arg(long, default_value_t = 4)]
    squad_size: u32,

    /// Optional TOML tuning config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Log every combat event
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if args.verbose {
                    tracing::Level::DEBUG.into()
                } else {
                    tracing::Level::INFO.into()
                },
            ),
        )
        .init();

    if let Some(path) = &args.config {
        match SimulationConfig::load(path) {
            Ok(config) => {
                if set_config(config).is_err() {
                    tracing::warn!("config was already initialized; ignoring file");
                }
            }
            Err(err) => {
                eprintln!("failed to load config {}: {err}", path.display());
                std::process::exit(1);
            }
        }
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "starting skirmish");

    let mut sim = Skirmish::new(seed);
    for index in 0..args.squad_size {
        sim.add_soldier(
            &format!("Operative {}", index + 1),
            GridPosition::new(index as i32, 0, 0),
        );
    }
    sim.add_pod(PodArchetype::Patrol, 3, GridPosition::new(6, 2, 0));
    sim.add_pod(PodArchetype::Elite, 2, GridPosition::new(10, 6, 0));
    sim.add_pod(PodArchetype::Ambush, 2, GridPosition::new(3, 12, 0));

    while sim.turn() < args.max_turns && !sim.is_over() {
        let events = sim.advance_turn();
        if args.verbose {
            for event in &events {
                print_event(sim.turn(), event);
            }
        }
    }

    let report = sim.report();
    match args.format.as_str() {
        "text" => {
            println!("outcome: {}", report.outcome);
            println!("turns: {}", report.turns);
            println!("squad alive: {}", report.squad_alive);
            println!("aliens alive: {}", report.aliens_alive);
            println!("pods activated: {}", report.pods_activated);
            println!("reinforcement waves: {}", report.reinforcement_waves);
            println!("seed: {}", report.seed);
        }
        _ => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("report serializes")
            );
        }
    }
}

fn print_event(turn: u64, event: &SkirmishEvent) {
    match event {
        SkirmishEvent::PodActivated { archetype } => {
            println!("[t{turn}] pod activated: {archetype:?}");
        }
        SkirmishEvent::Shot {
            attacker,
            target,
            damage,
            critical,
        } => {
            let tag = if *critical { " (crit)" } else { "" };
            println!("[t{turn}] {attacker} hits {target} for {damage}{tag}");
        }
        SkirmishEvent::Missed { attacker, target } => {
            println!("[t{turn}] {attacker} misses {target}");
        }
        SkirmishEvent::UnitKilled { name } => {
            println!("[t{turn}] {name} is down");
        }
        SkirmishEvent::ReinforcementsCalled { archetype, wave } => {
            println!("[t{turn}] {archetype:?} pod calls reinforcements (wave {wave})");
        }
    }
}
