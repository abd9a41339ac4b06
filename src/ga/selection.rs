//! Built-in parent selection strategies.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Genome, Selector};
use rand::Rng;
use std::cmp::Ordering;

/// Selection strategy for choosing parents.
///
/// Follows the genome order: an individual ranked lower by
/// [`Genome::rank_cmp`] is preferred. [`Roulette`](Selection::Roulette) is
/// the only variant that looks at raw scores.
///
/// # Examples
///
/// ```
/// use u_galib::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (score-proportionate, minimization)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Pick `k` individuals at random (with replacement), keep the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Score-proportionate selection with inverse weights, so the lowest
    /// score gets the largest slice of the wheel.
    ///
    /// **Warning**: a single outlier score dominates the wheel.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Linear ranking: the i-th best of n gets weight `n - i`.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,

    /// Every individual is equally likely.
    Uniform,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl<G: Genome> Selector<G> for Selection {
    /// # Panics
    /// Panics if `population` is empty.
    fn select<R: Rng>(&self, population: &[G], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
            Selection::Uniform => rng.random_range(0..population.len()),
        }
    }
}

fn tournament<G: Genome, R: Rng>(population: &[G], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if population[idx].rank_cmp(&population[best_idx]) == Ordering::Less {
            best_idx = idx;
        }
    }
    best_idx
}

/// weight_i = max_score - score_i + epsilon
fn roulette<G: Genome, R: Rng>(population: &[G], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let scores: Vec<f64> = population.iter().map(Genome::score).collect();
    let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let epsilon = 1e-10;

    let weights: Vec<f64> = scores
        .iter()
        .map(|&s| (max_score - s + epsilon).max(epsilon))
        .collect();
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    n - 1
}

fn rank<G: Genome, R: Rng>(population: &[G], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| population[a].rank_cmp(&population[b]));

    let total = (n * (n + 1) / 2) as f64;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (position, &idx) in order.iter().enumerate() {
        cumulative += (n - position) as f64;
        if cumulative > threshold {
            return idx;
        }
    }
    order[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fixtures::Num;
    use crate::ga::random::create_rng;

    fn make_population(values: &[i64]) -> Vec<Num> {
        values.iter().map(|&v| Num(v)).collect()
    }

    fn histogram(sel: Selection, pop: &[Num], n: usize) -> Vec<u32> {
        let mut rng = create_rng(42);
        let mut counts = vec![0u32; pop.len()];
        for _ in 0..n {
            counts[sel.select(pop, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10, 5, 1, 8]);
        let counts = histogram(Selection::Tournament(4), &pop, 10_000);
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10, 5, 1, 8]);
        for c in histogram(Selection::Tournament(1), &pop, 10_000) {
            assert!(c > 1500, "expected uniform, got {c}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[100, 50, 1, 80]);
        let counts = histogram(Selection::Roulette, &pop, 10_000);
        assert!(counts[2] > counts[0], "best={} worst={}", counts[2], counts[0]);
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = make_population(&[100, 50, 1, 80]);
        let counts = histogram(Selection::Rank, &pop, 10_000);
        assert!(counts[2] > counts[0], "best={} worst={}", counts[2], counts[0]);
    }

    #[test]
    fn test_uniform_covers_everyone() {
        let pop = make_population(&[3, 1, 2]);
        for c in histogram(Selection::Uniform, &pop, 9_000) {
            assert!(c > 2000, "expected uniform, got {c}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);
        for sel in [
            Selection::Tournament(3),
            Selection::Roulette,
            Selection::Rank,
            Selection::Uniform,
        ] {
            assert_eq!(sel.select(&pop, &mut rng), 0);
        }
    }

    #[test]
    fn test_equal_scores_roulette_is_uniform() {
        let pop = make_population(&[5, 5, 5, 5]);
        for c in histogram(Selection::Roulette, &pop, 10_000) {
            assert!(c > 1500, "expected roughly uniform, got {c}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Num> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }
}
