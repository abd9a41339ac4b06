//! Built-in population initializers.

use super::types::{Genome, Initializer, Randomize};
use rand::Rng;

/// Fills the population with randomized copies of the prototype.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInitializer;

impl<G: Randomize> Initializer<G> for RandomInitializer {
    fn initialize<R: Rng>(&self, prototype: &G, size: usize, rng: &mut R) -> Vec<G> {
        (0..size).map(|_| prototype.randomized(rng)).collect()
    }
}

/// Fills the population with exact copies of the prototype.
///
/// Diversity then comes only from mutation and breeding.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneInitializer;

impl<G: Genome> Initializer<G> for CloneInitializer {
    fn initialize<R: Rng>(&self, prototype: &G, size: usize, _rng: &mut R) -> Vec<G> {
        vec![prototype.clone(); size]
    }
}
