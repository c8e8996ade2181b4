//! Run configuration.
//!
//! [`Params`] holds every setting the representation and fitness layers
//! read. It is built once, resolved by [`set_fitness_params`], and then
//! passed by reference; nothing in the crate mutates it afterwards.
//!
//! [`set_fitness_params`]: crate::fitness::set_fitness_params

use crate::error::ConfigError;
use crate::fitness::{set_fitness_params, FitnessParams};
use std::path::PathBuf;

/// Configuration for a grammatical evolution run.
///
/// # Defaults
///
/// ```
/// use u_gevo::Params;
///
/// let params = Params::default();
/// assert_eq!(params.fitness_function, "regression");
/// assert!(!params.multicore);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_gevo::Params;
///
/// let params = Params::default()
///     .with_fitness_function("string_match")
///     .with_string_match_target("hello")
///     .with_genome_operations(true)
///     .configure()
///     .unwrap();
///
/// assert_eq!(params.fitness_func_input.as_deref(), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    /// Declared fitness function kind (`FITNESS_FUNCTION`).
    ///
    /// Kept as text until [`configure`](Self::configure) so that an
    /// unrecognised kind is reported as a configuration error.
    pub fitness_function: String,

    /// Problem suite for regression and classification (`SUITE`).
    pub suite: String,

    /// Target string for string matching (`STRING_MATCH_TARGET`).
    pub string_match_target: String,

    /// Grammar file resolved by the fitness wheel (`GRAMMAR_FILE`).
    pub grammar_file: Option<PathBuf>,

    /// Fitness function input resolved by the fitness wheel
    /// (`FITNESS_FUNC_INPUT`).
    pub fitness_func_input: Option<String>,

    /// Operators work on genomes only (`GENOME_OPERATIONS`).
    ///
    /// When set, copies of an individual skip the derivation tree.
    pub genome_operations: bool,

    /// Evaluate individuals on a worker pool (`MULTICORE`).
    pub multicore: bool,

    /// Exclusive upper bound for randomly generated codons (`CODON_SIZE`).
    pub codon_size: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            fitness_function: "regression".into(),
            suite: "Keijzer6".into(),
            string_match_target: "ponyge_rocks".into(),
            grammar_file: None,
            fitness_func_input: None,
            genome_operations: false,
            multicore: false,
            codon_size: 100_000,
        }
    }
}

impl Params {
    /// Sets the fitness function kind.
    pub fn with_fitness_function(mut self, kind: impl Into<String>) -> Self {
        self.fitness_function = kind.into();
        self
    }

    /// Sets the problem suite.
    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = suite.into();
        self
    }

    /// Sets the string match target.
    pub fn with_string_match_target(mut self, target: impl Into<String>) -> Self {
        self.string_match_target = target.into();
        self
    }

    /// Enables or disables genome-only operations.
    pub fn with_genome_operations(mut self, enabled: bool) -> Self {
        self.genome_operations = enabled;
        self
    }

    /// Enables or disables multicore evaluation.
    pub fn with_multicore(mut self, enabled: bool) -> Self {
        self.multicore = enabled;
        self
    }

    /// Sets the codon size.
    pub fn with_codon_size(mut self, codon_size: u32) -> Self {
        self.codon_size = codon_size;
        self
    }

    /// Writes the resolved grammar file and fitness input.
    pub fn with_fitness_params(mut self, resolved: FitnessParams) -> Self {
        self.grammar_file = Some(resolved.grammar_file);
        self.fitness_func_input = Some(resolved.fitness_func_input);
        self
    }

    /// Validates the parameters and resolves the fitness settings.
    ///
    /// Returns a new, fully resolved configuration. On error `self` is
    /// untouched and no output value exists anywhere.
    pub fn configure(&self) -> Result<Self, ConfigError> {
        self.validate()?;
        let resolved = set_fitness_params(self)?;
        Ok(self.clone().with_fitness_params(resolved))
    }

    /// Reads the input keys from same-named environment variables.
    ///
    /// Unset variables keep their defaults. Only `FITNESS_FUNCTION`,
    /// `SUITE` and `STRING_MATCH_TARGET` are read.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Self::default();
        if let Some(kind) = lookup("FITNESS_FUNCTION") {
            params.fitness_function = kind;
        }
        if let Some(suite) = lookup("SUITE") {
            params.suite = suite;
        }
        if let Some(target) = lookup("STRING_MATCH_TARGET") {
            params.string_match_target = target;
        }
        params
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.codon_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "CODON_SIZE",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
