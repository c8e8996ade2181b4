//! Fitness contracts and run-time fitness configuration.
//!
//! # Core Traits
//!
//! - [`FitnessValue`]: A comparable fitness with a direction-aware
//!   "unevaluated" sentinel
//! - [`FitnessFunction`]: Scores a phenotype, declares its direction and
//!   whether it distinguishes training and test data
//!
//! # Configuration
//!
//! - [`set_fitness_params`]: Resolves grammar file and fitness input from
//!   the declared [`FitnessKind`]

mod types;
mod wheel;

pub use types::{Capability, Distribution, FitnessFunction, FitnessValue};
pub use wheel::{
    set_fitness_params, FitnessKind, FitnessParams, GRAMMAR_DIR, STRING_MATCH_GRAMMAR,
};
