//! Random source helpers.
//!
//! The engine never owns an RNG: every randomized call takes `&mut R`.
//! These helpers only build reproducible sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded, reproducible RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a uniform value in `[0, 1)`.
#[inline]
pub(crate) fn uniform<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}
