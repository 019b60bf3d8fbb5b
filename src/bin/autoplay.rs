//! Play a full session headlessly and print a per-level summary.
//!
//! ```text
//! autoplay [--strategy memory|random] [--seed N] [--config CONFIG.json]
//! ```
//!
//! Set `RUST_LOG=debug` to see every command the engine rejects.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use memory_tiles::{
    play_session, AutoplayConfig, GameConfig, GameEngine, MemoryBot, Picker, RandomBot, Status,
};

#[derive(Debug, Parser)]
#[command(name = "autoplay", about = "Headless memory-tiles session runner")]
struct Args {
    /// Picker driving the session
    #[arg(long, value_enum, default_value_t = Strategy::Memory)]
    strategy: Strategy,

    /// RNG seed for the deck and the picker (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON game configuration (default level table if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give up on an attempt after this many moves
    #[arg(long, default_value_t = 500)]
    max_moves: u32,

    /// Give up on the session after this many attempts
    #[arg(long, default_value_t = 100)]
    max_attempts: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Remembers every revealed card
    Memory,
    /// Picks uniformly at random
    Random,
}

impl Strategy {
    fn picker(self, seed: u64) -> Box<dyn Picker> {
        match self {
            Strategy::Memory => Box::new(MemoryBot::new(seed)),
            Strategy::Random => Box::new(RandomBot::new(seed)),
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    GameConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = load_config(args.config.as_ref())?;
    let mut picker = args.strategy.picker(seed);

    info!("playing with {:?} picker, seed {seed}", args.strategy);
    let mut engine = GameEngine::new(config, seed).context("failed to start session")?;
    let autoplay = AutoplayConfig::new()
        .with_max_moves(args.max_moves)
        .with_max_attempts(args.max_attempts);
    let reports = play_session(&mut engine, picker.as_mut(), &autoplay);

    for report in &reports {
        println!(
            "level {:>2}  moves {:>3} / {:>3}  {:?}",
            report.level + 1,
            report.moves,
            report.budget,
            report.status
        );
    }

    match engine.status() {
        Status::Won => println!("You Win ({} attempts)", reports.len()),
        status => println!("stopped at level {} ({status:?})", engine.view().level),
    }

    Ok(())
}
