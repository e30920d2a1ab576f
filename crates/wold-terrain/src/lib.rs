//! Seed-driven terrain generation: deterministic environment derivation and
//! a multi-stage heightfield pipeline.

mod environment;
mod error;
mod heightfield;
mod preview;
mod profile;
mod sampler;
mod seed;
mod world;

pub use environment::{
    AMBIENT_COLORS, Biome, DEFAULT_SKY, Environment, FOG_DENSITY, Rgb, WATER_COLORS,
};
pub use error::WorldGenError;
pub use heightfield::{
    HeightFieldParams, elevation, flatten_mask, max_octave_sum, octave_sum, shaping_mask,
    smoothing_mask,
};
pub use preview::{PreviewImage, PreviewRegion, elevation_color, render_heightfield};
pub use profile::SeedProfile;
pub use sampler::{NoiseSource, SimplexField};
pub use seed::{mix, pick_from_seed, position_pick, profile_rng};
pub use world::{HeightGrid, WorldParams, sample_tile};
