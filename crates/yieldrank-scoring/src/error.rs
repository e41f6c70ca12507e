//! Error types for score table loading.

use thiserror::Error;

/// A specialized Result type for scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Errors raised while loading or validating score tables.
///
/// Scoring itself never fails; only table configuration can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// A table entry is out of range or its key is unrecognized.
    #[error("Invalid {table} table entry '{key}': {reason}")]
    InvalidTable {
        /// Table name (sectors, states, ratings, defaults).
        table: String,
        /// Offending key.
        key: String,
        /// Description of the problem.
        reason: String,
    },

    /// The table source could not be read or parsed.
    #[error("Failed to load score tables: {message}")]
    Parse {
        /// Underlying parser or I/O message.
        message: String,
    },
}

impl ScoringError {
    /// Creates an invalid-table error.
    #[must_use]
    pub fn invalid_table(
        table: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidTable {
            table: table.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ScoringError {
    fn from(err: toml::de::Error) -> Self {
        Self::parse(err.to_string())
    }
}

impl From<std::io::Error> for ScoringError {
    fn from(err: std::io::Error) -> Self {
        Self::parse(err.to_string())
    }
}
