//! The height-shaping pipeline.
//!
//! Elevation at a coordinate is produced by a fixed three-stage cascade:
//! fractal octave accumulation, a low-frequency flattening mask that carves
//! out plains, and a low-end shaping mask that presses small bumps toward
//! the baseline. A smoothstep helper completes the surface but is not part
//! of the default cascade; callers that want smoothed transitions apply it
//! themselves.

use crate::sampler::NoiseSource;

/// Tuning for the height pipeline.
///
/// Defaults are the values the terrain was shaped around; overriding them is
/// for experiments, not presets.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightFieldParams {
    /// Number of octaves accumulated by the first stage.
    pub octaves: u32,
    /// Amplitude decay per octave.
    pub persistence: f64,
    /// Frequency of the first octave.
    pub base_frequency: f64,
    /// Amplitude of the first octave.
    pub amplitude: f64,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Sampling frequency of the flattening mask.
    pub flatten_accuracy: f64,
    /// Lower edge (exclusive) of the flattening band.
    pub flatten_min: f64,
    /// Upper edge (exclusive) of the flattening band.
    pub flatten_max: f64,
    /// Multiplier applied to elevations whose mask value falls in the band.
    pub flatten_rate: f64,
    /// Elevations below this are halved by the final stage.
    pub shaping_threshold: f64,
}

impl Default for HeightFieldParams {
    fn default() -> Self {
        Self {
            octaves: 8,
            persistence: 0.4,
            base_frequency: 0.4,
            amplitude: 0.8,
            lacunarity: 2.0,
            flatten_accuracy: 0.02,
            flatten_min: 0.3,
            flatten_max: 0.5,
            flatten_rate: 0.5,
            shaping_threshold: 0.25,
        }
    }
}

/// Stage 1: fractal octave accumulation, scaled to the world's height range.
///
/// Sums `octaves` samples at multiplying frequency and geometrically
/// decaying amplitude, then multiplies the total by `scale`.
pub fn octave_sum(
    noise: &impl NoiseSource,
    params: &HeightFieldParams,
    x: f64,
    z: f64,
    scale: f64,
) -> f64 {
    let mut total = 0.0;
    let mut frequency = params.base_frequency;
    let mut amplitude = params.amplitude;
    for _ in 0..params.octaves {
        total += noise.sample(x * frequency, z * frequency) * amplitude;
        frequency *= params.lacunarity;
        amplitude *= params.persistence;
    }
    total * scale
}

/// Stage 2: flatten stretches of terrain into plains.
///
/// Samples the field once more at mask frequency `flatten_accuracy` and
/// multiplies `elevation` by `flatten_rate` when that mask value lands
/// strictly inside `(flatten_min, flatten_max)`. Outside the band the
/// elevation passes through untouched, band edges included.
pub fn flatten_mask(
    noise: &impl NoiseSource,
    params: &HeightFieldParams,
    elevation: f64,
    x: f64,
    z: f64,
) -> f64 {
    let mask = noise.sample(x * params.flatten_accuracy, z * params.flatten_accuracy);
    if mask > params.flatten_min && mask < params.flatten_max {
        elevation * params.flatten_rate
    } else {
        elevation
    }
}

/// Stage 3: halve elevations below `threshold`, leaving the rest untouched.
pub fn shaping_mask(elevation: f64, threshold: f64) -> f64 {
    if elevation < threshold {
        elevation * 0.5
    } else {
        elevation
    }
}

/// Hermite smoothstep of `value` between `edge0` and `edge1`.
///
/// Clamps the normalized position to `[0, 1]`, so inputs outside the edge
/// span saturate at 0 or 1.
pub fn smoothing_mask(value: f64, edge0: f64, edge1: f64) -> f64 {
    let t = ((value - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Run the full cascade at `(x, z)`: octave accumulation, then flattening,
/// then low-end shaping.
pub fn elevation(
    noise: &impl NoiseSource,
    params: &HeightFieldParams,
    x: f64,
    z: f64,
    scale: f64,
) -> f64 {
    let height = octave_sum(noise, params, x, z, scale);
    let height = flatten_mask(noise, params, height, x, z);
    shaping_mask(height, params.shaping_threshold)
}

/// Peak magnitude of stage 1 before scaling: the geometric sum of the
/// octave amplitudes. Useful for normalizing elevations for display.
pub fn max_octave_sum(params: &HeightFieldParams) -> f64 {
    let mut sum = 0.0;
    let mut amplitude = params.amplitude;
    for _ in 0..params.octaves {
        sum += amplitude;
        amplitude *= params.persistence;
    }
    sum
}
