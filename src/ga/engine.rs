//! Generation stepping and population lifecycle.
//!
//! [`Engine`] owns the population and advances it one generation at a time:
//! stochastic breeding and mutation grow the population, then ranking and
//! truncation bring it back to the target size.

use super::config::EngineConfig;
use super::random::uniform;
use super::types::{Breeder, Genome, Initializer, Mutator, Selector};
use log::{debug, warn};
use rand::Rng;
use std::fmt::{self, Write as _};

/// Default per-individual mutation probability.
pub const DEFAULT_PROBABILITY_MUTATE: f64 = 0.05;

/// Default per-individual breeding probability.
pub const DEFAULT_PROBABILITY_BREED: f64 = 0.10;

/// Counters describing one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Generation number after the step (1 for the first step).
    pub generation: usize,
    /// Children appended by breeding.
    pub offspring: usize,
    /// Mutants appended by mutation.
    pub mutants: usize,
    /// Population size just before truncation.
    pub candidates: usize,
    /// Population size after truncation.
    pub survivors: usize,
}

/// The GA engine.
///
/// Generic over the genome type and the four strategies. Randomness is
/// never stored: every randomized operation borrows the caller's RNG.
///
/// # Usage
///
/// ```
/// use u_galib::ga::{
///     create_rng, CloneInitializer, Engine, Genome, InvertMutator, OrderCrossover,
///     PermutationGenome, Selection,
/// };
///
/// // Sort 0..6: the score counts misplaced elements.
/// let prototype = PermutationGenome::new(vec![5, 4, 3, 2, 1, 0], |order| {
///     order.iter().enumerate().filter(|(i, v)| *i != **v).count() as f64
/// });
///
/// let mut rng = create_rng(42);
/// let mut engine = Engine::new(
///     CloneInitializer,
///     Selection::Tournament(2),
///     InvertMutator,
///     OrderCrossover,
/// );
/// engine.init(20, &prototype, &mut rng);
/// engine.evolve(50, &mut rng);
///
/// assert_eq!(engine.generations_elapsed(), 50);
/// assert!(engine.best().unwrap().score() <= prototype.score());
/// ```
pub struct Engine<G, I, S, M, B> {
    population: Vec<G>,

    initializer: I,
    selector: S,
    mutator: M,
    breeder: B,

    /// Per-individual probability of appending a mutated copy.
    ///
    /// Not validated: values ≤ 0 never trigger, values ≥ 1 always do.
    pub probability_mutate: f64,

    /// Per-individual probability of a breeding event (two children).
    ///
    /// Not validated: values ≤ 0 never trigger, values ≥ 1 always do.
    pub probability_breed: f64,

    target_size: usize,
    generation_count: usize,
}

impl<G, I, S, M, B> Engine<G, I, S, M, B>
where
    G: Genome,
    I: Initializer<G>,
    S: Selector<G>,
    M: Mutator<G>,
    B: Breeder<G>,
{
    /// Creates an engine with default probabilities and an empty population.
    ///
    /// Call [`init`](Self::init) before stepping.
    pub fn new(initializer: I, selector: S, mutator: M, breeder: B) -> Self {
        Self {
            population: Vec::new(),
            initializer,
            selector,
            mutator,
            breeder,
            probability_mutate: DEFAULT_PROBABILITY_MUTATE,
            probability_breed: DEFAULT_PROBABILITY_BREED,
            target_size: 0,
            generation_count: 0,
        }
    }

    /// Applies the probabilities of `config`.
    ///
    /// The population size is applied by [`init`](Self::init) or
    /// [`optimize`](Self::optimize).
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.probability_mutate = config.probability_mutate;
        self.probability_breed = config.probability_breed;
        self
    }

    /// Builds the starting population and resets the generation counter.
    ///
    /// The initializer is expected to return exactly `target_size` genomes.
    pub fn init<R: Rng>(&mut self, target_size: usize, prototype: &G, rng: &mut R) {
        self.population = self.initializer.initialize(prototype, target_size, rng);
        self.target_size = target_size;
        self.generation_count = 0;
        if self.population.len() != target_size {
            warn!(
                "initializer returned {} genomes, expected {}",
                self.population.len(),
                target_size
            );
        }
    }

    /// Advances the population by exactly one generation.
    ///
    /// Only the individuals present on entry are visited. For each of them,
    /// one uniform draw decides a breeding event (two independently selected
    /// parents from the current, possibly grown, population; two children
    /// appended) and a second draw decides whether a mutated copy of that
    /// individual is appended. The whole population is then ranked and the
    /// best `target_size` individuals survive.
    pub fn run_generation<R: Rng>(&mut self, rng: &mut R) -> GenerationStats {
        let snapshot = self.population.len();
        let mut offspring = 0;
        let mut mutants = 0;

        for p in 0..snapshot {
            if uniform(rng) < self.probability_breed {
                let i = self.selector.select(&self.population, rng);
                let j = self.selector.select(&self.population, rng);
                let (a, b) = self
                    .breeder
                    .breed(&self.population[i], &self.population[j], rng);
                self.population.push(a);
                self.population.push(b);
                offspring += 2;
            }
            if uniform(rng) < self.probability_mutate {
                let mutant = self.mutator.mutate(&self.population[p], rng);
                self.population.push(mutant);
                mutants += 1;
            }
        }

        let candidates = self.population.len();
        self.rank();
        if candidates < self.target_size {
            warn!(
                "population of {} is below target size {}; nothing truncated",
                candidates, self.target_size
            );
        }
        self.population.truncate(self.target_size);
        self.generation_count += 1;

        let stats = GenerationStats {
            generation: self.generation_count,
            offspring,
            mutants,
            candidates,
            survivors: self.population.len(),
        };
        debug!(
            "generation {}: {} offspring, {} mutants, {} -> {} (best score {:?})",
            stats.generation,
            stats.offspring,
            stats.mutants,
            stats.candidates,
            stats.survivors,
            self.population.first().map(Genome::score)
        );
        stats
    }

    /// Number of generations run since the last [`init`](Self::init).
    pub fn generations_elapsed(&self) -> usize {
        self.generation_count
    }

    /// Ranks the population and returns its best individual.
    ///
    /// Reorders the population in place. Returns `None` when the population
    /// is empty.
    pub fn best(&mut self) -> Option<&G> {
        self.rank();
        self.population.first()
    }

    /// The current population, in whatever order the last operation left it.
    pub fn population(&self) -> &[G] {
        &self.population
    }

    /// Survivor count fixed by the last [`init`](Self::init).
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Consumes the engine and returns its population.
    pub fn into_population(self) -> Vec<G> {
        self.population
    }

    /// Formats the best `n` individuals, one per line.
    ///
    /// Ranks the population as a side effect. Lists everyone when `n`
    /// exceeds the population size.
    pub fn format_top(&mut self, n: usize) -> String {
        self.rank();
        format_lines(&self.population[..n.min(self.population.len())])
    }

    /// Formats the whole population, ranked, one individual per line.
    pub fn format_population(&mut self) -> String {
        self.rank();
        format_lines(&self.population)
    }

    /// Prints [`format_top`](Self::format_top) to stdout.
    pub fn print_top(&mut self, n: usize) {
        print!("{}", self.format_top(n));
    }

    /// Prints the ranked population to stdout.
    pub fn print_population(&mut self) {
        println!("Current Population:");
        print!("{}", self.format_population());
    }

    /// Stable ascending sort by the genome order.
    fn rank(&mut self) {
        self.population.sort_by(|a, b| a.rank_cmp(b));
    }
}

impl<G, I, S, M, B> fmt::Display for Engine<G, I, S, M, B>
where
    I: fmt::Debug,
    S: fmt::Debug,
    M: fmt::Debug,
    B: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Initializer = {:?}, Selector = {:?}, Mutator = {:?}, Breeder = {:?}",
            self.initializer, self.selector, self.mutator, self.breeder
        )
    }
}

impl<G, I, S, M, B> fmt::Debug for Engine<G, I, S, M, B>
where
    I: fmt::Debug,
    S: fmt::Debug,
    M: fmt::Debug,
    B: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("initializer", &self.initializer)
            .field("selector", &self.selector)
            .field("mutator", &self.mutator)
            .field("breeder", &self.breeder)
            .field("probability_mutate", &self.probability_mutate)
            .field("probability_breed", &self.probability_breed)
            .field("target_size", &self.target_size)
            .field("generation_count", &self.generation_count)
            .field("population_len", &self.population.len())
            .finish()
    }
}

fn format_lines<G: Genome>(genomes: &[G]) -> String {
    let mut out = String::new();
    for (i, g) in genomes.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{i:2}: {g} Score = {:.6}", g.score());
    }
    out
}
