use std::path::PathBuf;

use clap::Parser;
use log::info;

use noise_dungeon::constants::MAX_GENERATION_ATTEMPTS;
use noise_dungeon::{DungeonGenerator, LevelConfig};

/// Generate a dungeon level and print it as ASCII.
#[derive(Parser, Debug)]
#[command(name = "noise-dungeon", version, about)]
struct Args {
    /// JSON config file; missing fields use defaults
    config: Option<PathBuf>,

    /// Override the configured seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the level width
    #[arg(long)]
    width: Option<usize>,

    /// Override the level height
    #[arg(long)]
    height: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LevelConfig::from_json_file(path)?,
        None => LevelConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    let result = DungeonGenerator::generate_with_retries(&config, MAX_GENERATION_ATTEMPTS)?;
    info!("seed {} ({} warnings)", result.seed, result.warnings.len());

    print!("{}", result.level);
    Ok(())
}
