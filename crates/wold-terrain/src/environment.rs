//! Derived environment parameters and the fixed palettes they pick from.
//!
//! Every cosmetic and structural parameter of a world is a pure function of
//! the base seed plus the randomize flag. Hash-derived fields use the seed
//! diffusion at a fixed per-field offset; randomize-branch draws come from
//! the profile RNG stream in a fixed order, so both branches are fully
//! reproducible.

use rand::Rng;

use crate::seed::{mix, pick_index, profile_rng};

/// Seed offset for the flooding factor derivation.
const FLOODING_OFFSET: i32 = 13;
/// Seed offset for the ambient light pick.
const AMBIENT_OFFSET: i32 = 27;
/// Seed offset for the water tint pick.
const WATER_OFFSET: i32 = 41;
/// Seed offset for the biome pick.
const BIOME_OFFSET: i32 = 69;
/// Seed offset for the noise scale derivation.
const NOISE_SCALE_OFFSET: i32 = 53;

/// A packed 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Pack back into `0xRRGGBB`.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Convert from HSL. `hue` is in degrees; `saturation` and `lightness`
    /// are in `[0, 1]`.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        Self {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The closed set of biome templates a seed can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    Forest,
    Desert,
    Beach,
    Mountain,
    Swamp,
}

impl Biome {
    /// Every biome, in pick order. Selection indexes this array, so the
    /// order is part of the derivation and must not change.
    pub const ALL: [Biome; 5] = [
        Biome::Forest,
        Biome::Desert,
        Biome::Beach,
        Biome::Mountain,
        Biome::Swamp,
    ];

    /// Lowercase label for logs and serialized output.
    pub const fn label(self) -> &'static str {
        match self {
            Biome::Forest => "forest",
            Biome::Desert => "desert",
            Biome::Beach => "beach",
            Biome::Mountain => "mountain",
            Biome::Swamp => "swamp",
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Water tints a seed can pick from.
pub const WATER_COLORS: [Rgb; 4] = [
    Rgb::from_hex(0x223344),
    Rgb::from_hex(0x4a758e),
    Rgb::from_hex(0x2f3f4f),
    Rgb::from_hex(0x1a5e6e),
];

/// Ambient light colors a seed can pick from.
pub const AMBIENT_COLORS: [Rgb; 4] = [
    Rgb::from_hex(0xffffff),
    Rgb::from_hex(0xe0ddff),
    Rgb::from_hex(0xc9eaf3),
    Rgb::from_hex(0xfffae1),
];

/// Background for profiles that do not randomize: a daytime sky blue.
pub const DEFAULT_SKY: Rgb = Rgb::from_hex(0x87ceeb);

/// Exponential fog falloff consumed by the scene layer.
pub const FOG_DENSITY: f64 = 0.0025;

/// Environment parameters derived from a seed, frozen once computed.
///
/// Construction performs every derivation eagerly; afterwards the values
/// are plain immutable data, safe to read from any number of threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    /// Directional and ambient light color.
    pub ambient_color: Rgb,
    /// Scene background and fog color.
    pub background_color: Rgb,
    /// Water tint.
    pub water_color: Rgb,
    /// Biome template.
    pub biome: Biome,
    /// Water coverage factor, always in `[0.1, 0.3)`.
    pub flooding_factor: f64,
    /// Light intensity; 12 unless the profile randomizes, then in `[5, 10)`.
    pub light_intensity: u32,
    /// Peak terrain height; 40 unless the profile randomizes, then in `[10, 50)`.
    pub world_max_height: f64,
    /// World-coordinate multiplier for noise sampling, in `[0.7, 1.1)`,
    /// quantized to hundredths.
    pub noise_scale: f64,
    /// Water plane height, `floor(u * world_max_height) * flooding_factor`
    /// for a unit draw `u` from the profile RNG stream.
    pub water_level: f64,
}

impl Environment {
    /// Derive every field from `base_seed`.
    pub fn derive(base_seed: i32, randomize: bool) -> Self {
        let flooding_factor = mix(base_seed.wrapping_add(FLOODING_OFFSET)) % 0.2 + 0.1;

        let ambient = mix(base_seed.wrapping_add(AMBIENT_OFFSET));
        let ambient_color = AMBIENT_COLORS[pick_index(ambient, AMBIENT_COLORS.len())];
        let water = mix(base_seed.wrapping_add(WATER_OFFSET));
        let water_color = WATER_COLORS[pick_index(water, WATER_COLORS.len())];
        let biome_pick = mix(base_seed.wrapping_add(BIOME_OFFSET));
        let biome = Biome::ALL[pick_index(biome_pick, Biome::ALL.len())];

        let scale_pick = mix(base_seed.wrapping_add(NOISE_SCALE_OFFSET));
        let noise_scale = (scale_pick * 40.0).floor() / 100.0 + 0.7;

        let mut rng = profile_rng(base_seed);
        let background_color = if randomize {
            Rgb::from_hsl(f64::from(rng.random_range(0..360u32)), 0.8, 0.7)
        } else {
            DEFAULT_SKY
        };
        let light_intensity = if randomize { rng.random_range(5..10) } else { 12 };
        let world_max_height = if randomize {
            f64::from(rng.random_range(10..50u32))
        } else {
            40.0
        };
        let water_level = (rng.random::<f64>() * world_max_height).floor() * flooding_factor;

        Self {
            ambient_color,
            background_color,
            water_color,
            biome,
            flooding_factor,
            light_intensity,
            world_max_height,
            noise_scale,
            water_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derivation_is_deterministic() {
        for seed in [-4242, -1, 0, 7, 99_999_999] {
            for randomize in [false, true] {
                let env1 = Environment::derive(seed, randomize);
                let env2 = Environment::derive(seed, randomize);
                assert_eq!(
                    env1, env2,
                    "derivation must be reproducible for seed {seed}, randomize {randomize}"
                );
            }
        }
    }

    #[test]
    fn test_flooding_factor_stays_in_band() {
        for seed in -5_000..5_000 {
            let env = Environment::derive(seed, false);
            assert!(
                (0.1..0.3).contains(&env.flooding_factor),
                "flooding factor for seed {seed} left [0.1, 0.3): {}",
                env.flooding_factor
            );
        }
    }

    #[test]
    fn test_noise_scale_range_and_quantization() {
        for seed in -2_000..2_000 {
            let scale = Environment::derive(seed, false).noise_scale;
            assert!(
                (0.7..1.1).contains(&scale),
                "noise scale for seed {seed} left [0.7, 1.1): {scale}"
            );
            let hundredths = scale * 100.0;
            assert!(
                (hundredths - hundredths.round()).abs() < 1e-9,
                "noise scale must be quantized to hundredths, got {scale}"
            );
        }
    }

    #[test]
    fn test_fixed_branch_uses_fixed_values() {
        let env = Environment::derive(4211, false);
        assert_eq!(env.background_color, DEFAULT_SKY);
        assert_eq!(env.light_intensity, 12);
        assert_eq!(env.world_max_height, 40.0);
    }

    #[test]
    fn test_randomized_branch_draws_in_range() {
        for seed in 0..500 {
            let env = Environment::derive(seed, true);
            assert!(
                (5..10).contains(&env.light_intensity),
                "randomized intensity for seed {seed} out of range: {}",
                env.light_intensity
            );
            assert!(
                (10.0..50.0).contains(&env.world_max_height),
                "randomized max height for seed {seed} out of range: {}",
                env.world_max_height
            );
        }
    }

    #[test]
    fn test_randomized_background_is_not_the_default_sky() {
        // At saturation 0.8 and lightness 0.7 the brightest channel is 240,
        // which the default sky (#87ceeb) never matches.
        let env = Environment::derive(31337, true);
        assert_ne!(
            env.background_color, DEFAULT_SKY,
            "a randomized background should come from the HSL draw"
        );
    }

    #[test]
    fn test_water_level_bounded_by_flooding_band() {
        for seed in 0..2_000 {
            let env = Environment::derive(seed, false);
            let cap = env.world_max_height * 0.3;
            assert!(
                env.water_level >= 0.0 && env.water_level < cap,
                "water level for seed {seed} must sit in [0, {cap}): {}",
                env.water_level
            );
        }
    }

    #[test]
    fn test_every_palette_entry_is_reachable() {
        let mut biomes = HashSet::new();
        let mut waters = HashSet::new();
        let mut ambients = HashSet::new();
        for seed in 0..400 {
            let env = Environment::derive(seed, false);
            biomes.insert(env.biome);
            waters.insert(env.water_color.to_hex());
            ambients.insert(env.ambient_color.to_hex());
        }
        assert_eq!(biomes.len(), Biome::ALL.len(), "every biome should be reachable");
        assert_eq!(waters.len(), WATER_COLORS.len(), "every water tint should be reachable");
        assert_eq!(
            ambients.len(),
            AMBIENT_COLORS.len(),
            "every ambient color should be reachable"
        );
    }

    #[test]
    fn test_rgb_hex_roundtrip_and_display() {
        let navy = Rgb::from_hex(0x223344);
        assert_eq!(navy.to_hex(), 0x223344);
        assert_eq!(navy.to_string(), "#223344");
        assert_eq!(DEFAULT_SKY.to_string(), "#87ceeb");
    }

    #[test]
    fn test_rgb_from_hsl_anchor_colors() {
        assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::from_hex(0xff0000));
        assert_eq!(Rgb::from_hsl(120.0, 1.0, 0.5), Rgb::from_hex(0x00ff00));
        assert_eq!(Rgb::from_hsl(240.0, 1.0, 0.5), Rgb::from_hex(0x0000ff));
        assert_eq!(Rgb::from_hsl(0.0, 0.0, 0.7), Rgb::from_hex(0xb3b3b3));
        // Hue wraps.
        assert_eq!(Rgb::from_hsl(360.0, 1.0, 0.5), Rgb::from_hex(0xff0000));
    }

    #[test]
    fn test_biome_labels_are_lowercase_words() {
        for biome in Biome::ALL {
            let label = biome.label();
            assert!(
                !label.is_empty() && label.chars().all(|c| c.is_ascii_lowercase()),
                "biome label should be a lowercase word: {label}"
            );
            assert_eq!(biome.to_string(), label);
        }
    }
}
