//! Driver loops on top of [`Engine::run_generation`].
//!
//! - [`Engine::evolve`]: a fixed number of generations
//! - [`Engine::evolve_until`]: until a predicate on the best genome holds,
//!   with an optional cap
//! - [`Engine::optimize`] / [`Engine::optimize_until`]: a complete run from
//!   an [`EngineConfig`], with score history

use super::config::EngineConfig;
use super::engine::Engine;
use super::types::{Breeder, Genome, Initializer, Mutator, Selector};
use log::info;
use rand::Rng;

/// Result of a complete optimization run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<G> {
    /// Best genome of the final population.
    pub best: G,

    /// Score of [`best`](Self::best).
    pub best_score: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best score after initialization and after each generation.
    ///
    /// Always `generations + 1` entries long.
    pub score_history: Vec<f64>,
}

impl<G, I, S, M, B> Engine<G, I, S, M, B>
where
    G: Genome,
    I: Initializer<G>,
    S: Selector<G>,
    M: Mutator<G>,
    B: Breeder<G>,
{
    /// Runs exactly `generations` generations.
    pub fn evolve<R: Rng>(&mut self, generations: usize, rng: &mut R) {
        for _ in 0..generations {
            self.run_generation(rng);
        }
    }

    /// Runs generations until `stop` returns `true` for the best genome.
    ///
    /// `stop` is checked before every generation, including against the
    /// initial population, so a population that already satisfies it runs
    /// zero generations. With `Some(cap)`, at most `cap` generations run;
    /// `None` is unbounded. An empty population stops immediately.
    ///
    /// Returns the number of generations executed.
    pub fn evolve_until<F, R>(
        &mut self,
        mut stop: F,
        max_generations: Option<usize>,
        rng: &mut R,
    ) -> usize
    where
        F: FnMut(&G) -> bool,
        R: Rng,
    {
        let mut generations = 0;
        while max_generations.map_or(true, |cap| generations < cap) {
            let done = match self.best() {
                Some(best) => stop(best),
                None => true,
            };
            if done {
                break;
            }
            self.run_generation(rng);
            generations += 1;
        }
        generations
    }

    /// Runs a complete optimization until the configured generation cap.
    ///
    /// With an unbounded config this never returns; use
    /// [`optimize_until`](Self::optimize_until) instead.
    pub fn optimize(
        &mut self,
        prototype: &G,
        config: &EngineConfig,
    ) -> Result<EvolutionResult<G>, String> {
        self.optimize_until(prototype, config, |_| false)
    }

    /// Runs a complete optimization: validates `config`, applies its
    /// probabilities, seeds an RNG, initializes from `prototype` and calls
    /// [`evolve_until`](Self::evolve_until) with the configured cap.
    pub fn optimize_until<F>(
        &mut self,
        prototype: &G,
        config: &EngineConfig,
        mut stop: F,
    ) -> Result<EvolutionResult<G>, String>
    where
        F: FnMut(&G) -> bool,
    {
        config.validate()?;

        self.probability_mutate = config.probability_mutate;
        self.probability_breed = config.probability_breed;
        let mut rng = config.create_rng();

        info!(
            "optimizing: population {}, breed {}, mutate {}, cap {:?}",
            config.population_size,
            config.probability_breed,
            config.probability_mutate,
            config.max_generations
        );

        self.init(config.population_size, prototype, &mut rng);

        let mut score_history = Vec::new();
        let generations = self.evolve_until(
            |best| {
                score_history.push(best.score());
                stop(best)
            },
            config.max_generations,
            &mut rng,
        );

        let best = self
            .best()
            .cloned()
            .ok_or_else(|| "initializer produced an empty population".to_string())?;
        // The predicate is not consulted after the capped final generation.
        if score_history.len() == generations {
            score_history.push(best.score());
        }

        info!(
            "finished after {} generations, best score {}",
            generations,
            best.score()
        );

        Ok(EvolutionResult {
            best_score: best.score(),
            best,
            generations,
            score_history,
        })
    }
}
