//! Permutation genome and its operators.
//!
//! Ordering problems (TSP, job sequencing) encode a solution as a
//! permutation of `0..n`. Every operator here maps valid permutations to
//! valid permutations.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::{Breeder, Genome, Mutator, Objective, Randomize};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A permutation of `0..n` scored by a shared objective (lower is better).
#[derive(Clone)]
pub struct PermutationGenome {
    order: Vec<usize>,
    score: f64,
    objective: Objective<usize>,
}

impl PermutationGenome {
    /// # Panics
    /// Panics if `order` is not a permutation of `0..order.len()`.
    pub fn new<F>(order: Vec<usize>, objective: F) -> Self
    where
        F: Fn(&[usize]) -> f64 + Send + Sync + 'static,
    {
        assert!(is_permutation(&order), "order must be a permutation of 0..n");
        Self::from_parts(order, Arc::new(objective))
    }

    /// The identity permutation `0, 1, …, n-1`.
    pub fn identity<F>(n: usize, objective: F) -> Self
    where
        F: Fn(&[usize]) -> f64 + Send + Sync + 'static,
    {
        Self::from_parts((0..n).collect(), Arc::new(objective))
    }

    fn from_parts(order: Vec<usize>, objective: Objective<usize>) -> Self {
        let score = objective(&order);
        Self {
            order,
            score,
            objective,
        }
    }

    fn sibling(&self, order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order));
        Self::from_parts(order, Arc::clone(&self.objective))
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl fmt::Debug for PermutationGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationGenome")
            .field("order", &self.order)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PermutationGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.order)
    }
}

impl Genome for PermutationGenome {
    fn score(&self) -> f64 {
        self.score
    }
}

impl Randomize for PermutationGenome {
    fn randomized<R: Rng>(&self, rng: &mut R) -> Self {
        let mut order = self.order.clone();
        order.shuffle(rng);
        self.sibling(order)
    }
}

/// Order Crossover (OX).
///
/// Each child keeps a random segment of one parent in place and fills the
/// remaining positions, starting after the segment and wrapping around,
/// with the other parent's elements in their original order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderCrossover;

impl Breeder<PermutationGenome> for OrderCrossover {
    /// # Panics
    /// Panics if the parents have different lengths.
    fn breed<R: Rng>(
        &self,
        parent1: &PermutationGenome,
        parent2: &PermutationGenome,
        rng: &mut R,
    ) -> (PermutationGenome, PermutationGenome) {
        let (p1, p2) = (&parent1.order, &parent2.order);
        assert_eq!(p1.len(), p2.len(), "parents must have equal length");
        if p1.len() < 2 {
            return (parent1.clone(), parent2.clone());
        }

        let (start, end) = random_segment(p1.len(), rng);
        (
            parent1.sibling(ox_child(p1, p2, start, end)),
            parent2.sibling(ox_child(p2, p1, start, end)),
        )
    }
}

/// Exchanges two random positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapMutator;

impl Mutator<PermutationGenome> for SwapMutator {
    fn mutate<R: Rng>(&self, genome: &PermutationGenome, rng: &mut R) -> PermutationGenome {
        let mut order = genome.order.clone();
        let n = order.len();
        if n >= 2 {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            order.swap(i, j);
        }
        genome.sibling(order)
    }
}

/// Reverses a random segment (2-opt move).
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertMutator;

impl Mutator<PermutationGenome> for InvertMutator {
    fn mutate<R: Rng>(&self, genome: &PermutationGenome, rng: &mut R) -> PermutationGenome {
        let mut order = genome.order.clone();
        if order.len() >= 2 {
            let (start, end) = random_segment(order.len(), rng);
            order[start..=end].reverse();
        }
        genome.sibling(order)
    }
}

fn ox_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = template.to_vec();
    let mut kept = vec![false; n];
    for &v in &template[start..=end] {
        kept[v] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 1..=n {
        let v = donor[(end + offset) % n];
        if !kept[v] {
            child[pos] = v;
            pos = (pos + 1) % n;
        }
    }
    child
}

/// Random `[start, end]` with `start <= end < n`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    (a.min(b), a.max(b))
}

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    order.iter().all(|&v| {
        v < seen.len() && !std::mem::replace(&mut seen[v], true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::create_rng;
    use crate::ga::{Engine, RandomInitializer, Selection};

    /// Number of adjacent pairs out of ascending order.
    fn descents(order: &[usize]) -> f64 {
        order.windows(2).filter(|w| w[0] > w[1]).count() as f64
    }

    fn genome(order: Vec<usize>) -> PermutationGenome {
        PermutationGenome::new(order, descents)
    }

    #[test]
    fn test_new_scores() {
        let g = genome(vec![2, 0, 1, 3]);
        assert_eq!(g.order(), &[2, 0, 1, 3]);
        assert!((g.score() - 1.0).abs() < 1e-12);
        assert_eq!(g.to_string(), "[2, 0, 1, 3]");
    }

    #[test]
    #[should_panic(expected = "order must be a permutation of 0..n")]
    fn test_new_rejects_duplicates() {
        genome(vec![0, 1, 1]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[1, 0, 2]));
        assert!(!is_permutation(&[0, 3, 1]));
        assert!(!is_permutation(&[0, 0]));
    }

    #[test]
    fn test_randomized_is_valid() {
        let mut rng = create_rng(42);
        let g = PermutationGenome::identity(12, descents);
        for _ in 0..50 {
            assert!(is_permutation(g.randomized(&mut rng).order()));
        }
    }

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1 = genome((0..8).collect());
        let p2 = genome((0..8).rev().collect());
        for _ in 0..100 {
            let (c1, c2) = OrderCrossover.breed(&p1, &p2, &mut rng);
            assert!(is_permutation(c1.order()), "child1 invalid: {c1}");
            assert!(is_permutation(c2.order()), "child2 invalid: {c2}");
        }
    }

    #[test]
    fn test_ox_keeps_segment() {
        let p1 = [0, 1, 2, 3, 4, 5];
        let p2 = [5, 4, 3, 2, 1, 0];
        let child = ox_child(&p1, &p2, 2, 3);
        assert_eq!(&child[2..=3], &[2, 3]);
        // Filled from the donor after the segment, wrapping: 1, 0, 5, 4.
        assert_eq!(child, vec![5, 4, 2, 3, 1, 0]);
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        let p = genome(vec![0]);
        let (c1, c2) = OrderCrossover.breed(&p, &p, &mut rng);
        assert_eq!(c1.order(), &[0]);
        assert_eq!(c2.order(), &[0]);
    }

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = create_rng(42);
        let g = PermutationGenome::identity(10, descents);
        for _ in 0..100 {
            let m = SwapMutator.mutate(&g, &mut rng);
            assert!(is_permutation(m.order()));
        }
        assert_eq!(g.order(), (0..10).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_invert_eventually_changes() {
        let mut rng = create_rng(42);
        let g = PermutationGenome::identity(5, descents);
        let changed = (0..100).any(|_| {
            let m = InvertMutator.mutate(&g, &mut rng);
            assert!(is_permutation(m.order()));
            m.order() != g.order()
        });
        assert!(changed, "invert should change the permutation eventually");
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end && end < 10);
        }
    }

    #[test]
    fn test_sorting_problem_improves() {
        let mut rng = create_rng(42);
        let mut engine = Engine::new(
            RandomInitializer,
            Selection::Tournament(2),
            InvertMutator,
            OrderCrossover,
        );
        engine.probability_breed = 0.4;
        engine.probability_mutate = 0.4;
        engine.init(40, &PermutationGenome::identity(8, descents), &mut rng);
        let start = engine.best().unwrap().score();

        // Rotations such as [3, 4, 5, 6, 7, 0, 1, 2] are a local optimum
        // with one descent, so an exact sort is not guaranteed.
        let generations = engine.evolve_until(|best| best.score() == 0.0, Some(500), &mut rng);

        let best = engine.best().unwrap();
        assert!(generations <= 500);
        assert!(best.score() <= start, "best got worse: {} > {start}", best.score());
        assert!(best.score() <= 1.0, "expected at most one descent, got {best}");
        assert!(is_permutation(best.order()));
    }
}
