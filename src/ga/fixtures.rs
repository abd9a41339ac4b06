//! Minimal genome and strategies shared by the unit tests.

use super::types::{Breeder, Genome, Initializer, Mutator, Selector};
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::fmt;

/// Integer genome; lower is better.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Num(pub i64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Genome for Num {
    fn score(&self) -> f64 {
        self.0 as f64
    }
}

/// Produces `prototype + size - i` for `i in 0..size`, i.e. worst first.
pub(crate) struct Reversed;

impl Initializer<Num> for Reversed {
    fn initialize<R: Rng>(&self, prototype: &Num, size: usize, _rng: &mut R) -> Vec<Num> {
        (0..size)
            .map(|i| Num(prototype.0 + (size - i) as i64))
            .collect()
    }
}

/// Returns only half of the requested population.
pub(crate) struct ShortInitializer;

impl Initializer<Num> for ShortInitializer {
    fn initialize<R: Rng>(&self, prototype: &Num, size: usize, rng: &mut R) -> Vec<Num> {
        Reversed.initialize(prototype, size / 2, rng)
    }
}

/// Uniform selection that counts its invocations.
#[derive(Default)]
pub(crate) struct Uniform {
    pub calls: Cell<usize>,
}

impl Selector<Num> for Uniform {
    fn select<R: Rng>(&self, population: &[Num], rng: &mut R) -> usize {
        self.calls.set(self.calls.get() + 1);
        rng.random_range(0..population.len())
    }
}

/// Uniform selection that records the population length of every call.
#[derive(Default)]
pub(crate) struct LengthRecorder {
    pub lengths: RefCell<Vec<usize>>,
}

impl Selector<Num> for LengthRecorder {
    fn select<R: Rng>(&self, population: &[Num], rng: &mut R) -> usize {
        self.lengths.borrow_mut().push(population.len());
        rng.random_range(0..population.len())
    }
}

pub(crate) struct Decrement;

impl Mutator<Num> for Decrement {
    fn mutate<R: Rng>(&self, genome: &Num, _rng: &mut R) -> Num {
        Num(genome.0 - 1)
    }
}

/// Decrements like [`Decrement`] and records every input value.
#[derive(Default)]
pub(crate) struct Recorder {
    pub seen: RefCell<Vec<i64>>,
}

impl Mutator<Num> for Recorder {
    fn mutate<R: Rng>(&self, genome: &Num, _rng: &mut R) -> Num {
        self.seen.borrow_mut().push(genome.0);
        Num(genome.0 - 1)
    }
}

/// Children one step below the smaller and above the larger parent.
pub(crate) struct Widen;

impl Breeder<Num> for Widen {
    fn breed<R: Rng>(&self, parent1: &Num, parent2: &Num, _rng: &mut R) -> (Num, Num) {
        let lo = parent1.0.min(parent2.0);
        let hi = parent1.0.max(parent2.0);
        (Num(lo - 1), Num(hi + 1))
    }
}
