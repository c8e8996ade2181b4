//! Grammatical evolution core.
//!
//! Provides the individual representation and fitness machinery that a
//! grammatical evolution search is built on:
//!
//! - **Representation**: [`Individual`](representation::Individual) wraps a
//!   genome together with the phenotype, derivation tree and metadata an
//!   external [`Mapper`](representation::Mapper) produced for it.
//! - **Ordering**: individuals compare by fitness under a single run-wide
//!   maximise/minimise direction; unevaluated individuals always rank worst.
//! - **Evaluation**: scoring through any
//!   [`FitnessFunction`](fitness::FitnessFunction), with or without a
//!   training/test split, in place or on a rayon worker pool.
//! - **Configuration**: [`Params`] and the fitness wheel that resolves the
//!   grammar file and fitness input for a run.
//!
//! # Architecture
//!
//! Grammar parsing, concrete fitness functions, selection, crossover,
//! mutation and the generational loop are defined by consumers. This crate
//! only fixes the contracts between them.

pub mod error;
pub mod evaluation;
pub mod fitness;
mod params;
pub mod representation;

pub use error::ConfigError;
pub use params::Params;
