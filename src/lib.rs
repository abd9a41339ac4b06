//! Minimal generic genetic-algorithm engine.
//!
//! Client code supplies a genome type and four strategies (initializer,
//! selector, mutator, breeder); the [`ga::Engine`] evolves a fixed-size
//! population across discrete generations with ranking-based survivor
//! selection and implicit elitism.
//!
//! # Architecture
//!
//! The crate is single-threaded and synchronous. It never owns ambient
//! randomness: every randomized call borrows an RNG from the caller, so a
//! seeded source reproduces a run exactly. Logging goes through the `log`
//! facade; installing a logger is left to the application.

pub mod ga;
