//! Fitness wheel: picks the grammar and fitness input for a run.
//!
//! | kind | grammar | fitness input |
//! |---|---|---|
//! | `regression`, `classification` | `grammars/<suite>.bnf` | suite |
//! | `string_match` | `grammars/letter.bnf` | target string |
//!
//! Any other kind is a [`ConfigError::UnknownFitnessFunction`].

use crate::error::ConfigError;
use crate::params::Params;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Directory grammar files are resolved against.
pub const GRAMMAR_DIR: &str = "grammars";

/// Grammar shared by every string matching run.
pub const STRING_MATCH_GRAMMAR: &str = "letter.bnf";

/// Known fitness function kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitnessKind {
    Regression,
    Classification,
    StringMatch,
}

impl FitnessKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FitnessKind::Regression => "regression",
            FitnessKind::Classification => "classification",
            FitnessKind::StringMatch => "string_match",
        }
    }
}

impl fmt::Display for FitnessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regression" => Ok(FitnessKind::Regression),
            "classification" => Ok(FitnessKind::Classification),
            "string_match" => Ok(FitnessKind::StringMatch),
            other => Err(ConfigError::UnknownFitnessFunction {
                kind: other.to_string(),
            }),
        }
    }
}

/// Values resolved by [`set_fitness_params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitnessParams {
    /// Grammar file for the run.
    pub grammar_file: PathBuf,
    /// Input handed to the fitness function (suite name or target string).
    pub fitness_func_input: String,
}

/// Resolves the grammar file and fitness input for the declared kind.
///
/// Deterministic and side-effect free: the caller writes the result into
/// its configuration with [`Params::with_fitness_params`], so a failure
/// leaves nothing half-configured.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use u_gevo::fitness::set_fitness_params;
/// use u_gevo::Params;
///
/// let params = Params::default().with_suite("keijzer6");
/// let resolved = set_fitness_params(&params).unwrap();
/// assert_eq!(resolved.grammar_file, PathBuf::from("grammars/keijzer6.bnf"));
/// assert_eq!(resolved.fitness_func_input, "keijzer6");
/// ```
pub fn set_fitness_params(params: &Params) -> Result<FitnessParams, ConfigError> {
    let kind: FitnessKind = params.fitness_function.parse()?;

    let resolved = match kind {
        FitnessKind::Regression | FitnessKind::Classification => FitnessParams {
            grammar_file: Path::new(GRAMMAR_DIR).join(format!("{}.bnf", params.suite)),
            fitness_func_input: params.suite.clone(),
        },
        FitnessKind::StringMatch => FitnessParams {
            grammar_file: Path::new(GRAMMAR_DIR).join(STRING_MATCH_GRAMMAR),
            fitness_func_input: params.string_match_target.clone(),
        },
    };

    info!(
        "fitness '{}': grammar {}, input '{}'",
        kind,
        resolved.grammar_file.display(),
        resolved.fitness_func_input
    );
    Ok(resolved)
}
