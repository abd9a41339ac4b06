//! Core trait definitions for the GA engine.
//!
//! [`Genome`] is the candidate-solution contract. The generic
//! [`Engine`](super::Engine) is parameterized by four strategy traits:
//! [`Initializer`], [`Selector`], [`Mutator`] and [`Breeder`].

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A candidate solution.
///
/// The engine never modifies a genome: new genomes only come out of a
/// [`Mutator`] or a [`Breeder`]. Genomes are ranked with
/// [`rank_cmp`](Genome::rank_cmp) in **ascending** order, and rank 0 is
/// treated as the best individual.
///
/// The default ordering compares [`score`](Genome::score), so lower scores
/// win (minimization). For maximization, either negate the score or
/// override `rank_cmp`. Nothing checks that the order matches what the
/// caller means by "better"; an inverted order silently evolves toward the
/// worst solutions.
///
/// # Implementing
///
/// ```
/// use std::fmt;
/// use u_galib::ga::Genome;
///
/// #[derive(Clone)]
/// struct Distance(f64);
///
/// impl fmt::Display for Distance {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{:.3}", self.0)
///     }
/// }
///
/// impl Genome for Distance {
///     fn score(&self) -> f64 {
///         self.0.abs()
///     }
/// }
/// ```
pub trait Genome: Clone + fmt::Display {
    /// Scalar fitness used for reporting and by score-based selection.
    fn score(&self) -> f64;

    /// Total order used to rank the population. `Less` means better.
    ///
    /// Incomparable scores (NaN) are treated as equal.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score()
            .partial_cmp(&other.score())
            .unwrap_or(Ordering::Equal)
    }
}

/// Genomes that can produce a randomized copy of themselves.
///
/// Used by [`RandomInitializer`](super::RandomInitializer) to build a
/// starting population from a prototype.
pub trait Randomize: Genome {
    /// Returns a new genome with the same shape as `self` and random content.
    fn randomized<R: Rng>(&self, rng: &mut R) -> Self;
}

/// Builds the starting population.
pub trait Initializer<G: Genome> {
    /// Returns exactly `size` genomes derived from `prototype`.
    ///
    /// The engine trusts the returned length; a short population breaks the
    /// size invariant of every following generation.
    fn initialize<R: Rng>(&self, prototype: &G, size: usize, rng: &mut R) -> Vec<G>;
}

/// Picks one individual from a population.
pub trait Selector<G: Genome> {
    /// Returns an index into `population`.
    ///
    /// # Panics
    /// Implementations may panic on an empty population.
    fn select<R: Rng>(&self, population: &[G], rng: &mut R) -> usize;
}

/// Produces a mutated copy of a genome.
pub trait Mutator<G: Genome> {
    /// Returns a new genome; `genome` itself is left untouched.
    fn mutate<R: Rng>(&self, genome: &G, rng: &mut R) -> G;
}

/// Recombines two parents into two children.
pub trait Breeder<G: Genome> {
    /// Returns two new genomes; the parents are left untouched.
    fn breed<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R) -> (G, G);
}

/// Shared objective function over a gene slice, as stored by the built-in
/// genomes. Cloning a genome only clones the `Arc`.
pub type Objective<T> = Arc<dyn Fn(&[T]) -> f64 + Send + Sync>;
