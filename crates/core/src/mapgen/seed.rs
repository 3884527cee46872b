//! Deterministic seed mixing and a uniform float stream for map generation.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Seed for the `generation`-th map of a run. Regenerating bumps `generation`,
/// so each new map differs while the whole sequence stays reproducible.
pub fn derive_map_seed(run_seed: u64, generation: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(generation).wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

pub(crate) struct UnitStream {
    rng: ChaCha8Rng,
}

impl UnitStream {
    pub(crate) fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw in `[0, 1)` using the top 53 bits of the next word.
    pub(crate) fn next_unit(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1_u64 << 53) as f64;
        (self.rng.next_u64() >> 11) as f64 * SCALE
    }
}
