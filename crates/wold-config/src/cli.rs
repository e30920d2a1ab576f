//! Command-line argument parsing for the Wold generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Wold command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "wold", about = "Seed-driven terrain generator")]
pub struct CliArgs {
    /// Base seed for the world.
    #[arg(long)]
    pub seed: Option<i32>,

    /// Randomize the cosmetic environment.
    #[arg(long)]
    pub randomize: Option<bool>,

    /// Terrain tile size in world units.
    #[arg(long)]
    pub tile_size: Option<f64>,

    /// Tiles per side of the terrain grid.
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Preview image edge length in pixels.
    #[arg(long)]
    pub preview_size: Option<u32>,

    /// Preview output path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = Some(seed);
        }
        if let Some(randomize) = args.randomize {
            self.world.randomize = randomize;
        }
        if let Some(tile) = args.tile_size {
            self.world.tile_size = tile;
        }
        if let Some(grid) = args.grid_size {
            self.world.grid_size = grid;
        }
        if let Some(size) = args.preview_size {
            self.preview.size = size;
        }
        if let Some(ref output) = args.output {
            self.preview.output = output.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
