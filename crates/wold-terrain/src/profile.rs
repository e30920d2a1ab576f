//! Seed profiles: one seed in, a frozen world out.

use crate::environment::{Biome, Environment, FOG_DENSITY, Rgb};
use crate::heightfield::{self, HeightFieldParams};
use crate::sampler::{NoiseSource, SimplexField};

/// Upper bound (exclusive) for entropy-drawn base seeds.
const ENTROPY_SEED_CEILING: i32 = 100_000_000;

/// Seed offset decorrelating the dryness field from the height field.
const DRYNESS_FIELD_OFFSET: i32 = 0xDEAD_BEEF_u32 as i32;

/// Sampling frequency of the dryness probe.
const DRYNESS_FREQUENCY: f64 = 0.02;

/// A fully derived world: the base seed, the noise fields keyed to it, and
/// the frozen environment parameters.
///
/// Construction does all the work. A built profile is immutable and
/// `Send + Sync`, so one instance can serve terrain queries from any number
/// of worker threads without locks.
pub struct SeedProfile {
    base_seed: i32,
    randomize: bool,
    field: SimplexField,
    dryness_field: SimplexField,
    params: HeightFieldParams,
    env: Environment,
}

impl SeedProfile {
    /// Build a profile. A `None` base seed draws one from thread entropy;
    /// that draw is the only non-deterministic path in the crate.
    pub fn new(base_seed: Option<i32>, randomize: bool) -> Self {
        let seed = base_seed.unwrap_or_else(|| rand::random_range(0..ENTROPY_SEED_CEILING));
        Self {
            base_seed: seed,
            randomize,
            field: SimplexField::new(seed),
            dryness_field: SimplexField::new(seed.wrapping_add(DRYNESS_FIELD_OFFSET)),
            params: HeightFieldParams::default(),
            env: Environment::derive(seed, randomize),
        }
    }

    /// The seed every derivation is keyed to.
    pub fn base_seed(&self) -> i32 {
        self.base_seed
    }

    /// Whether the cosmetic draws (background, intensity, max height) were
    /// randomized at construction.
    pub fn is_randomized(&self) -> bool {
        self.randomize
    }

    /// The frozen environment block.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn ambient_color(&self) -> Rgb {
        self.env.ambient_color
    }

    pub fn background_color(&self) -> Rgb {
        self.env.background_color
    }

    pub fn water_color(&self) -> Rgb {
        self.env.water_color
    }

    pub fn biome(&self) -> Biome {
        self.env.biome
    }

    /// Water coverage factor in `[0.1, 0.3)`.
    pub fn flooding_factor(&self) -> f64 {
        self.env.flooding_factor
    }

    /// Whether any part of the world is under water. The flooding factor
    /// never derives to zero, so every world floods somewhere.
    pub fn is_flooded(&self) -> bool {
        self.env.flooding_factor > 0.0
    }

    /// Height of the water plane.
    pub fn water_level(&self) -> f64 {
        self.env.water_level
    }

    /// Light intensity; 12 unless the profile randomizes.
    pub fn light_intensity(&self) -> u32 {
        self.env.light_intensity
    }

    /// Peak terrain height; 40 unless the profile randomizes.
    pub fn world_max_height(&self) -> f64 {
        self.env.world_max_height
    }

    /// World-coordinate multiplier applied before noise sampling.
    pub fn noise_scale(&self) -> f64 {
        self.env.noise_scale
    }

    /// Exponential fog falloff for the scene layer.
    pub fn fog_density(&self) -> f64 {
        FOG_DENSITY
    }

    /// The pipeline tuning this profile samples with.
    pub fn params(&self) -> &HeightFieldParams {
        &self.params
    }

    /// Raw sample of the profile's noise field.
    pub fn sample_noise(&self, x: f64, z: f64) -> f64 {
        self.field.sample(x, z)
    }

    /// Full height pipeline at a pre-scaled coordinate.
    pub fn elevation(&self, x: f64, z: f64, scale: f64) -> f64 {
        heightfield::elevation(&self.field, &self.params, x, z, scale)
    }

    /// Terrain height at a world coordinate: applies the profile's noise
    /// scale and max height, then runs the pipeline.
    pub fn elevation_at(&self, world_x: f64, world_z: f64) -> f64 {
        self.elevation(
            world_x * self.env.noise_scale,
            world_z * self.env.noise_scale,
            self.env.world_max_height,
        )
    }

    /// Latitude-style temperature gradient: 1 at the equator line `z = 0`,
    /// falling off linearly with distance. Unbounded below for far fields.
    pub fn temperature_at(&self, z: f64) -> f64 {
        1.0 - z.abs() / 100.0
    }

    /// Dryness in `[0, 1]` from a low-frequency probe of a second noise
    /// field decorrelated from the height field.
    pub fn dryness_at(&self, x: f64, z: f64) -> f64 {
        let raw = self
            .dryness_field
            .sample(x * DRYNESS_FREQUENCY, z * DRYNESS_FREQUENCY);
        (raw + 1.0) * 0.5
    }
}
