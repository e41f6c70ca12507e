//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;
use yieldrank_core::CoreError;
use yieldrank_scoring::ScoringError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Unrecognized rating symbol.
    #[error("Invalid rating: {0}. Use S&P or Moody's notation, e.g. AA- or Aa3.")]
    InvalidRating(String),

    /// An input file that could not be read or parsed.
    #[error("Cannot read {path}: {message}")]
    Input {
        /// File that failed.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// A bond or profile that failed validation.
    #[error("Invalid input in {path}: {source}")]
    Validation {
        /// File holding the bad record.
        path: PathBuf,
        /// Underlying validation error.
        source: CoreError,
    },

    /// No candidate with the requested CUSIP.
    #[error("No candidate with CUSIP {0}")]
    UnknownCusip(String),

    /// Score table loading or validation error.
    #[error("Score tables: {0}")]
    Tables(#[from] ScoringError),
}

impl CliError {
    /// Creates an input error for `path`.
    #[must_use]
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
