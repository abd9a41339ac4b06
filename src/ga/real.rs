//! Real-valued genome with bounded genes.

use super::types::{Breeder, Genome, Mutator, Objective, Randomize};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A vector of `f64` genes kept within `[lower, upper]`.
///
/// The score is computed once, at construction, from the shared objective.
/// Lower scores rank first.
#[derive(Clone)]
pub struct RealGenome {
    genes: Vec<f64>,
    bounds: (f64, f64),
    score: f64,
    objective: Objective<f64>,
}

impl RealGenome {
    /// Creates a genome, clamping every gene into `bounds`.
    ///
    /// # Panics
    /// Panics if either bound is not finite or `bounds.0 > bounds.1`.
    pub fn new<F>(genes: Vec<f64>, bounds: (f64, f64), objective: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        assert!(
            bounds.0.is_finite() && bounds.1.is_finite(),
            "bounds must be finite"
        );
        assert!(bounds.0 <= bounds.1, "lower bound exceeds upper bound");
        Self::from_parts(genes, bounds, Arc::new(objective))
    }

    fn from_parts(mut genes: Vec<f64>, bounds: (f64, f64), objective: Objective<f64>) -> Self {
        for g in &mut genes {
            *g = g.clamp(bounds.0, bounds.1);
        }
        let score = objective(&genes);
        Self {
            genes,
            bounds,
            score,
            objective,
        }
    }

    /// A sibling genome: same bounds and objective, new genes.
    pub fn with_genes(&self, genes: Vec<f64>) -> Self {
        Self::from_parts(genes, self.bounds, Arc::clone(&self.objective))
    }

    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }
}

impl fmt::Debug for RealGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealGenome")
            .field("genes", &self.genes)
            .field("bounds", &self.bounds)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for RealGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, g) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g:.4}")?;
        }
        write!(f, "]")
    }
}

impl Genome for RealGenome {
    fn score(&self) -> f64 {
        self.score
    }
}

impl Randomize for RealGenome {
    fn randomized<R: Rng>(&self, rng: &mut R) -> Self {
        let (lo, hi) = self.bounds;
        let genes = self
            .genes
            .iter()
            .map(|_| if lo < hi { rng.random_range(lo..=hi) } else { lo })
            .collect();
        self.with_genes(genes)
    }
}

/// Single-point crossover: children swap tails after a random cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePointCrossover;

impl Breeder<RealGenome> for OnePointCrossover {
    fn breed<R: Rng>(
        &self,
        parent1: &RealGenome,
        parent2: &RealGenome,
        rng: &mut R,
    ) -> (RealGenome, RealGenome) {
        let n = parent1.genes.len().min(parent2.genes.len());
        if n < 2 {
            return (parent1.clone(), parent2.clone());
        }
        let point = rng.random_range(1..n);

        let mut c1 = parent1.genes.clone();
        let mut c2 = parent2.genes.clone();
        c1[point..n].copy_from_slice(&parent2.genes[point..n]);
        c2[point..n].copy_from_slice(&parent1.genes[point..n]);
        (parent1.with_genes(c1), parent2.with_genes(c2))
    }
}

/// Shifts one random gene by a uniform offset in `(-amplitude, amplitude)`,
/// clamped to the genome's bounds. A non-positive or non-finite amplitude
/// leaves the genome unchanged.
#[derive(Debug, Clone, Copy)]
pub struct PerturbMutator {
    pub amplitude: f64,
}

impl Default for PerturbMutator {
    fn default() -> Self {
        Self { amplitude: 0.5 }
    }
}

impl Mutator<RealGenome> for PerturbMutator {
    fn mutate<R: Rng>(&self, genome: &RealGenome, rng: &mut R) -> RealGenome {
        if genome.genes.is_empty() || !self.amplitude.is_finite() || self.amplitude <= 0.0 {
            return genome.clone();
        }
        let mut genes = genome.genes.clone();
        let i = rng.random_range(0..genes.len());
        genes[i] += rng.random_range(-self.amplitude..self.amplitude);
        genome.with_genes(genes)
    }
}
