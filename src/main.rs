//! # wellgen Entry Point
//!
//! Generates a single well and prints a plain-text dump of it, followed by
//! every room and the offset a renderer would place it at.
//!
//! ```text
//! wellgen [CONFIG.json] [--seed N]
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=info` (or `debug`) to see
//! generation stats and individual doorway carves.

use std::env;
use std::error::Error;

use log::info;

use wellgen::utils::debug_viz::{render_room, render_well};
use wellgen::{GeneratorConfig, Well};

fn parse_args() -> Result<GeneratorConfig, Box<dyn Error>> {
    let mut config_path = None;
    let mut seed = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse::<u64>()?);
            }
            _ => config_path = Some(arg),
        }
    }

    let mut config = match config_path {
        Some(path) => {
            info!("Loading config from {}", path);
            GeneratorConfig::load(&path)?
        }
        None => GeneratorConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("wellgen starting...");

    let config = parse_args()?;
    let well = Well::from_config(&config)?;

    print!("{}", render_well(&well));
    for room in well.rooms() {
        println!();
        print!("{}", render_room(room, well.width()));
    }

    if let Some(stats) = well.stats() {
        info!("Seed {} ({} rooms)", stats.seed, stats.room_count);
    }
    info!("wellgen exiting.");
    Ok(())
}
