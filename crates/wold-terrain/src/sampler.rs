//! The coherent-noise seam behind the height pipeline.
//!
//! The pipeline only ever needs "a deterministic field over (x, z)"; this
//! module pins that down as [`NoiseSource`] and provides the production
//! implementation backed by simplex noise. Tests substitute fixed-value
//! sources to drive each pipeline stage through known inputs.

use noise::{NoiseFn, Simplex};

/// A deterministic 2D noise field.
///
/// Implementations must be pure: for a fixed instance, `sample` depends on
/// nothing but `(x, z)`. Values are expected to stay in roughly `[-1, 1]`.
pub trait NoiseSource {
    /// Sample the field at a 2D coordinate.
    fn sample(&self, x: f64, z: f64) -> f64;
}

/// Simplex-noise field keyed to a world seed.
pub struct SimplexField {
    simplex: Simplex,
}

impl SimplexField {
    /// Create a field keyed to `seed`. Equal seeds produce equal fields.
    pub fn new(seed: i32) -> Self {
        Self {
            simplex: Simplex::new(seed as u32),
        }
    }
}

impl NoiseSource for SimplexField {
    fn sample(&self, x: f64, z: f64) -> f64 {
        self.simplex.get([x, z])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_same_seed_produces_identical_field() {
        let field1 = SimplexField::new(42);
        let field2 = SimplexField::new(42);
        for ix in 0..20 {
            for iz in 0..20 {
                let x = ix as f64 * 1.7;
                let z = iz as f64 * 2.3;
                let s1 = field1.sample(x, z);
                let s2 = field2.sample(x, z);
                assert!(
                    (s1 - s2).abs() < EPSILON,
                    "same seed must produce identical samples at ({x}, {z}): {s1} vs {s2}"
                );
            }
        }
    }

    #[test]
    fn test_different_seeds_produce_different_fields() {
        let field1 = SimplexField::new(42);
        let field2 = SimplexField::new(43);
        let s1 = field1.sample(500.0, 500.0);
        let s2 = field2.sample(500.0, 500.0);
        assert!(
            (s1 - s2).abs() > EPSILON,
            "different seeds should diverge at (500, 500): {s1} vs {s2}"
        );
    }

    #[test]
    fn test_samples_stay_near_unit_range() {
        let field = SimplexField::new(7);
        for ix in 0..100 {
            for iz in 0..100 {
                let value = field.sample(ix as f64 * 0.37, iz as f64 * 0.53);
                assert!(
                    value.abs() <= 1.01,
                    "simplex sample at ({ix}, {iz}) left the advertised range: {value}"
                );
            }
        }
    }

    #[test]
    fn test_field_is_continuous_at_small_steps() {
        let field = SimplexField::new(99);
        let mut previous = field.sample(0.0, 0.0);
        for i in 1..1000 {
            let current = field.sample(i as f64 * 0.01, 0.0);
            assert!(
                (current - previous).abs() < 0.2,
                "coherent noise should not jump between close samples: step {i}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_negative_seed_is_usable() {
        let field1 = SimplexField::new(-42);
        let field2 = SimplexField::new(-42);
        let s1 = field1.sample(3.7, -2.1);
        let s2 = field2.sample(3.7, -2.1);
        assert!(
            (s1 - s2).abs() < EPSILON,
            "negative seeds must still key a stable field: {s1} vs {s2}"
        );
    }
}
