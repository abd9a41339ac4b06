//! Engine configuration.
//!
//! [`EngineConfig`] holds the parameters of a complete optimization run:
//! population size, operator probabilities, the generation cap and the seed.

use super::engine::{DEFAULT_PROBABILITY_BREED, DEFAULT_PROBABILITY_MUTATE};
use super::random::create_rng;
use rand::rngs::StdRng;

/// Configuration for a GA run.
///
/// # Defaults
///
/// ```
/// use u_galib::ga::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, Some(500));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_galib::ga::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(40)
///     .with_probability_breed(0.3)
///     .with_probability_mutate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of survivors kept after every generation.
    pub population_size: usize,

    /// Per-individual probability of appending a mutated copy (0.0–1.0).
    pub probability_mutate: f64,

    /// Per-individual probability of a breeding event (0.0–1.0).
    ///
    /// Each event appends two children.
    pub probability_breed: f64,

    /// Generation cap for [`Engine::optimize`](super::Engine::optimize).
    ///
    /// `None` runs until the stop predicate fires.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            probability_mutate: DEFAULT_PROBABILITY_MUTATE,
            probability_breed: DEFAULT_PROBABILITY_BREED,
            max_generations: Some(500),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation probability, clamped to [0, 1].
    pub fn with_probability_mutate(mut self, p: f64) -> Self {
        self.probability_mutate = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the breeding probability, clamped to [0, 1].
    pub fn with_probability_breed(mut self, p: f64) -> Self {
        self.probability_breed = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Removes the generation cap.
    pub fn unbounded(mut self) -> Self {
        self.max_generations = None;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset favouring exploration: breeds and mutates aggressively.
    ///
    /// - Breed: 0.5, Mutate: 0.2
    pub fn exploratory() -> Self {
        Self {
            probability_mutate: 0.2,
            probability_breed: 0.5,
            ..Self::default()
        }
    }

    /// Preset favouring exploitation: few new candidates per generation.
    ///
    /// - Breed: 0.05, Mutate: 0.01
    pub fn conservative() -> Self {
        Self {
            probability_mutate: 0.01,
            probability_breed: 0.05,
            ..Self::default()
        }
    }

    /// Creates the random source for a run, seeded from [`seed`](Self::seed)
    /// when present.
    pub fn create_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.probability_mutate) {
            return Err("probability_mutate must lie in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.probability_breed) {
            return Err("probability_breed must lie in [0, 1]".into());
        }
        Ok(())
    }
}
