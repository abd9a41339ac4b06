//! Genetic Algorithm engine.
//!
//! A generic GA core built on trait-based strategies. The [`Engine`] owns a
//! fixed-size population and advances it one generation at a time:
//! stochastic breeding and mutation append new genomes, then the whole
//! population is ranked and the best `target_size` survive.
//!
//! # Core Traits
//!
//! - [`Genome`]: A candidate solution with a score and a ranking order
//! - [`Initializer`], [`Selector`], [`Mutator`], [`Breeder`]: Pluggable
//!   strategies consumed by the engine
//!
//! # Key Types
//!
//! - [`Engine`]: Generation stepping, queries and driver loops
//! - [`EngineConfig`]: Run parameters (population size, probabilities, cap, seed)
//! - [`EvolutionResult`]: Outcome of [`Engine::optimize`]
//!
//! # Built-in Strategies
//!
//! - [`Selection`]: Tournament, roulette, rank and uniform selection
//! - [`RandomInitializer`], [`CloneInitializer`]
//! - [`RealGenome`] with [`OnePointCrossover`] and [`PerturbMutator`]
//! - [`PermutationGenome`] with [`OrderCrossover`], [`SwapMutator`] and
//!   [`InvertMutator`]
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod driver;
mod engine;
mod initializer;
mod permutation;
pub mod random;
mod real;
mod selection;
mod types;

#[cfg(test)]
mod fixtures;

pub use config::EngineConfig;
pub use driver::EvolutionResult;
pub use engine::{
    Engine, GenerationStats, DEFAULT_PROBABILITY_BREED, DEFAULT_PROBABILITY_MUTATE,
};
pub use initializer::{CloneInitializer, RandomInitializer};
pub use permutation::{InvertMutator, OrderCrossover, PermutationGenome, SwapMutator};
pub use random::create_rng;
pub use real::{OnePointCrossover, PerturbMutator, RealGenome};
pub use selection::Selection;
pub use types::{Breeder, Genome, Initializer, Mutator, Objective, Randomize, Selector};
