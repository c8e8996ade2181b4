//! Genome representation and the individual.
//!
//! # Core Types
//!
//! - [`Individual`]: Genome, derivation tree, mapping metadata and fitness
//! - [`Mapper`]: Contract for the grammar-driven genome-to-phenotype mapping
//! - [`RunContext`]: Parameters, mapper and fitness function for a run
//! - [`Ranking`]: Direction-aware ordering (worst first, best last)
//!
//! # Lifecycle
//!
//! Individuals are created by mapping a genome ([`Individual::new`]) or by
//! [`Individual::deep_copy`] before genetic operators modify them. A copy
//! keeps the mapping metadata but not the fitness, so it must be scored
//! again with [`Individual::evaluate`].

mod individual;
mod ranking;
mod types;

pub use individual::{Individual, IndividualOf, RunContext};
pub use ranking::{less_than_fitness, Ranking};
pub use types::{generate_genome, Codon, Genome, Mapper, Mapping};
