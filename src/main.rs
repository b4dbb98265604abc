//! Sky Climber main entry point.
//!
//! A small vertical platformer written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Hold space to charge a jump, release to leap, arrow keys to steer. The
//! screen scrolls as you climb; the floor vanishes after ten seconds and
//! falling off the bottom ends the game.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, collider, body, jump charge, sprites)
//! - [`events`] – game over and debug toggle events
//! - [`game`] – world setup and the update schedule
//! - [`resources`] – ECS resources (config, input, score, time, rng, textures)
//! - [`systems`] – ECS systems (input, physics, landing, scrolling, rendering)
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --seed 42 --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use skyclimber::context::GameContext;
use skyclimber::resources::gameconfig::GameConfig;
use skyclimber::resources::rng::GameRng;

/// Sky Climber
#[derive(Parser)]
#[command(version, about = "Charge your jumps and climb as high as you can.")]
struct Cli {
    /// INI file with window, physics and world settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for platform placement, for a reproducible layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the debug overlay on (F11 toggles it in game).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            GameRng::with_seed(seed)
        }
        None => GameRng::new(),
    };

    let score = GameContext::new(config, rng, cli.debug).run();
    info!("Final score: {}", score);
}
