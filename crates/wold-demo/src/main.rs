//! Demo binary that derives a world from a seed and writes a terrain preview.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p wold-demo` for a fresh random world.
//! Run with `cargo run -p wold-demo -- --seed 42 --randomize true` to pin one.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::Parser;
use tracing::info;
use wold_config::{CliArgs, Config};
use wold_log::init_logging;
use wold_terrain::{
    PreviewRegion, SeedProfile, WorldParams, pick_from_seed, position_pick, render_heightfield,
    sample_tile,
};

/// Ground texture variants a tile can land on, picked per tile position.
const GROUND_VARIANTS: [&str; 3] = ["mossy", "cracked", "plain"];

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(wold_config::default_config_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let profile = SeedProfile::new(config.world.seed, config.world.randomize);
    let params =
        WorldParams::new(config.world.tile_size, config.world.grid_size).unwrap_or_else(|e| {
            eprintln!("Invalid world layout: {e}, using defaults");
            WorldParams::default()
        });

    demonstrate_environment_derivation(&profile);
    demonstrate_world_sampling(&profile, &params);
    demonstrate_surface_probes(&profile, &params);
    render_preview(&profile, &config);
}

/// Derives the full environment block and shows that it replays from the
/// bare seed.
fn demonstrate_environment_derivation(profile: &SeedProfile) {
    info!("Starting environment derivation demonstration");

    info!(
        "Seed: {} (randomize: {})",
        profile.base_seed(),
        profile.is_randomized()
    );
    info!("Biome: {}", profile.biome());
    info!(
        "Ambient light: {} at intensity {}",
        profile.ambient_color(),
        profile.light_intensity()
    );
    info!(
        "Background: {} (fog density {})",
        profile.background_color(),
        profile.fog_density()
    );
    info!(
        "Water: {} at level {:.2} (flooding factor {:.3}, flooded: {})",
        profile.water_color(),
        profile.water_level(),
        profile.flooding_factor(),
        profile.is_flooded()
    );
    info!(
        "Terrain: max height {}, noise scale {:.2}",
        profile.world_max_height(),
        profile.noise_scale()
    );

    // The whole block must replay from nothing but the seed.
    let replay = SeedProfile::new(Some(profile.base_seed()), profile.is_randomized());
    assert_eq!(
        replay.environment(),
        profile.environment(),
        "environment must re-derive identically from the seed"
    );
    info!("Environment re-derived identically from seed");

    info!("Environment derivation demonstration completed successfully");
}

/// Samples every tile of the layout and reports the world's height range.
fn demonstrate_world_sampling(profile: &SeedProfile, params: &WorldParams) {
    info!("Starting world sampling demonstration");

    info!(
        "Layout: {}x{} tiles of {} units ({} units across)",
        params.grid_size(),
        params.grid_size(),
        params.tile_size(),
        params.terrain_size()
    );

    let resolution = params.grid_size();
    let mut world_min = f64::INFINITY;
    let mut world_max = f64::NEG_INFINITY;
    let mut flooded_tiles = 0usize;
    let origins = params.tile_origins();
    for &(tile_x, tile_z) in &origins {
        let grid = sample_tile(profile, params, tile_x, tile_z, resolution)
            .expect("layout resolution is validated");
        let (lo, hi) = grid.min_max();
        world_min = world_min.min(lo);
        world_max = world_max.max(hi);
        if lo < profile.water_level() {
            flooded_tiles += 1;
        }
    }

    info!(
        "Sampled {} tiles at resolution {}: height range [{:.2}, {:.2}]",
        origins.len(),
        resolution,
        world_min,
        world_max
    );
    info!(
        "{} of {} tiles dip below the water level ({:.2})",
        flooded_tiles,
        origins.len(),
        profile.water_level()
    );

    info!("World sampling demonstration completed successfully");
}

/// Picks a featured tile from the seed and probes its surface properties.
fn demonstrate_surface_probes(profile: &SeedProfile, params: &WorldParams) {
    info!("Starting surface probe demonstration");

    let origins = params.tile_origins();
    let &(tile_x, tile_z) =
        pick_from_seed(profile.base_seed(), &origins).expect("tile grid is never empty");
    let grid = sample_tile(profile, params, tile_x, tile_z, params.grid_size())
        .expect("layout resolution is validated");
    let (lo, hi) = grid.min_max();
    info!(
        "Featured tile ({}, {}): height range [{:.2}, {:.2}]",
        tile_x, tile_z, lo, hi
    );
    info!(
        "  temperature {:.2}, dryness {:.2}",
        profile.temperature_at(tile_z),
        profile.dryness_at(tile_x, tile_z)
    );

    let mut counts = [0usize; GROUND_VARIANTS.len()];
    for &(tx, tz) in &origins {
        let variant =
            position_pick(tx, tz, &GROUND_VARIANTS).expect("variant list is never empty");
        let index = GROUND_VARIANTS
            .iter()
            .position(|g| g == variant)
            .expect("variant comes from the candidate list");
        counts[index] += 1;
    }
    info!(
        "Ground variants across {} tiles: mossy={}, cracked={}, plain={}",
        origins.len(),
        counts[0],
        counts[1],
        counts[2]
    );

    info!("Surface probe demonstration completed successfully");
}

/// Renders the heightfield preview and writes it as a PNG.
fn render_preview(profile: &SeedProfile, config: &Config) {
    info!("Starting preview rendering demonstration");

    let region = PreviewRegion {
        center_x: 0.0,
        center_z: 0.0,
        extent: config.preview.extent,
    };
    let image = render_heightfield(profile, &region, config.preview.size);
    let (width, height) = image.dimensions();

    match write_png(&config.preview.output, width, height, image.as_rgba()) {
        Ok(()) => info!(
            "Preview written to {} ({}x{}, {} colors)",
            config.preview.output.display(),
            width,
            height,
            image.unique_color_count()
        ),
        Err(e) => eprintln!("Failed to write preview: {e}"),
    }

    info!("Preview rendering demonstration completed successfully");
}

/// Encodes RGBA bytes as an 8-bit PNG at `path`.
fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    Ok(())
}
