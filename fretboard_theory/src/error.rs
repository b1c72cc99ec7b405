// Error types for the theory value model.
//
// Every fallible operation in this crate reports one of two kinds: a
// numeric or ordinal argument outside its documented bound (`OutOfRange`),
// or note/pitch text that does not match the accepted grammar
// (`InvalidFormat`). Validation happens at construction or at the single
// operation that would break an invariant; nothing here is retried or
// partially applied.
//
// `ConfigError` is separate because it is the only path that touches I/O
// (loading a `ConcertPitch` from JSON, see `config.rs`).

use std::fmt;
use thiserror::Error;

/// Error type for value-model operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("{name} out of range: {value}")]
    OutOfRange { name: &'static str, value: String },

    #[error("invalid format {input:?}: {reason}")]
    InvalidFormat { input: String, reason: &'static str },
}

impl TheoryError {
    pub(crate) fn out_of_range(name: &'static str, value: impl fmt::Display) -> Self {
        TheoryError::OutOfRange {
            name,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        TheoryError::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }

    /// True for the `OutOfRange` kind.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TheoryError::OutOfRange { .. })
    }

    /// True for the `InvalidFormat` kind.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TheoryError::InvalidFormat { .. })
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Errors from loading configuration. Invalid values (a zero reference
/// frequency, an unparseable pitch) surface as `Json` because deserialization
/// goes through the validating constructors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
