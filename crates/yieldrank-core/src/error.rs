//! Error types for the Yieldrank core types.
//!
//! Computation paths in Yieldrank are total and never fail. These errors
//! are reserved for constructing and validating inputs: parsing dates and
//! checking that caller-supplied rates and prices are in range.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or validating core value types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date parsing or an out-of-range date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A tax rate outside `[0, 1]`.
    #[error("Invalid rate for {field}: {value} (expected a fraction in [0, 1])")]
    InvalidRate {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// Any other field that failed validation.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(field: impl Into<String>, value: f64) -> Self {
        Self::InvalidRate {
            field: field.into(),
            value,
        }
    }

    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
