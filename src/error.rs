//! Error types.
//!
//! Only run configuration can fail fatally. Mapping failures are carried as
//! data on the individual (`invalid`), and fitness function errors are
//! propagated unchanged through their own associated type.

use thiserror::Error;

/// Process exit status used for any configuration failure.
pub const CONFIG_EXIT_CODE: i32 = 2;

/// A fatal run configuration error.
///
/// Raised before any individual is constructed. The library never exits the
/// process itself; the top-level entry point maps this to
/// [`exit_code`](ConfigError::exit_code).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("fitness function '{kind}' is not recognised (expected regression, classification or string_match)")]
    UnknownFitnessFunction { kind: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ConfigError {
    /// Exit status the entry point should terminate with.
    pub fn exit_code(&self) -> i32 {
        CONFIG_EXIT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_message_names_kind() {
        let err = ConfigError::UnknownFitnessFunction {
            kind: "bogus".into(),
        };
        assert!(err.to_string().contains("'bogus'"));
    }

    #[test]
    fn test_every_variant_exits_with_two() {
        let errors = [
            ConfigError::UnknownFitnessFunction { kind: "x".into() },
            ConfigError::InvalidParameter {
                name: "CODON_SIZE",
                reason: "must be positive".into(),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 2);
        }
    }
}
