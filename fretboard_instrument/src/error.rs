// Error types for the instrument layer and the CLI.

use fretboard_theory::{ConfigError, TheoryError};
use thiserror::Error;

/// Errors surfaced by the instrument layer and the CLI.
///
/// Fretboard and string operations return `TheoryError` directly; this
/// type adds the failures that only make sense above the value model.
#[derive(Error, Debug)]
pub enum InstrumentError {
    #[error("Unknown tuning preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    #[error(transparent)]
    Theory(#[from] TheoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
