//! Deterministic seed utilities.
//!
//! Everything a seed touches goes through here: the integer diffusion that
//! turns a seed into a unit-interval sample, candidate selection driven by
//! that diffusion, a position-keyed variant hash, and derivation of the
//! per-profile RNG stream.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::WorldGenError;

/// Multiplicative avalanche constant of the seed diffusion.
const AVALANCHE: i32 = 0x27d4_eb2d_u32 as i32;

/// Diffuse a 32-bit seed into a unit-interval sample.
///
/// Applies a fixed xor-shift / add-shift / multiply / xor-shift cascade with
/// wrapping arithmetic, then normalizes the low 31 bits of the result's
/// magnitude. Pure and platform-independent: the same seed always maps to
/// the same value in `[0, 1)`.
pub fn mix(seed: i32) -> f64 {
    let mut s = seed;
    s = (s ^ 61) ^ ((s as u32) >> 16) as i32;
    s = s.wrapping_add(s << 3);
    s ^= ((s as u32) >> 4) as i32;
    s = s.wrapping_mul(AVALANCHE);
    s ^= ((s as u32) >> 15) as i32;
    // Masking to 31 bits keeps the quotient strictly below 1.0 even when the
    // cascade lands on i32::MIN, whose magnitude would otherwise hit 1.0.
    f64::from(s.unsigned_abs() & 0x7fff_ffff) / (f64::from(i32::MAX) + 1.0)
}

/// Scale a unit-interval sample to an index into `len` candidates.
///
/// `len` must be nonzero. The clamp guards against float rounding pushing
/// `unit * len` up to `len` itself.
pub(crate) fn pick_index(unit: f64, len: usize) -> usize {
    ((unit * len as f64) as usize).min(len - 1)
}

/// Pick one of `candidates` deterministically from `seed`.
///
/// The index is `floor(mix(seed) * len)`, always in bounds. Returns
/// [`WorldGenError::EmptySelection`] when handed an empty slice.
pub fn pick_from_seed<T>(seed: i32, candidates: &[T]) -> Result<&T, WorldGenError> {
    if candidates.is_empty() {
        return Err(WorldGenError::EmptySelection);
    }
    Ok(&candidates[pick_index(mix(seed), candidates.len())])
}

/// Pick one of `candidates` from a world-space position.
///
/// Uses the classic sine-dot hash, evaluated through `libm` so the result is
/// bit-identical across platforms. Deterministic per `(x, z)`; suited to
/// choosing per-tile asset variants without carrying extra state.
pub fn position_pick<T>(x: f64, z: f64, candidates: &[T]) -> Result<&T, WorldGenError> {
    if candidates.is_empty() {
        return Err(WorldGenError::EmptySelection);
    }
    let hashed = libm::sin(x * 12.9898 + z * 78.233) * 43758.5453;
    let index = (hashed.floor() as i64).unsigned_abs() as usize % candidates.len();
    Ok(&candidates[index])
}

/// Derive the profile's RNG stream from its base seed.
///
/// The same base seed always yields the same ChaCha8 sequence, which keeps
/// the randomize-branch draws reproducible per world.
pub fn profile_rng(base_seed: i32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(u64::from(base_seed as u32))
}
