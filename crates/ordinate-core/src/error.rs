//! Error types for the core value types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or converting core value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A tenor string does not follow the `<positive integer><unit>` grammar.
    #[error("Cannot parse tenor '{input}': {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A day count cannot be expressed as a tenor.
    #[error("Cannot convert {days} days to a tenor: {reason}")]
    Conversion {
        /// The rejected day count.
        days: i64,
        /// Why the conversion failed.
        reason: String,
    },

    /// A tenor multiplier must be a positive integer.
    #[error("Invalid tenor multiplier: {multiplier}")]
    InvalidMultiplier {
        /// The rejected multiplier.
        multiplier: u32,
    },
}

impl CoreError {
    /// Creates a tenor parse error.
    #[must_use]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a day-count conversion error.
    #[must_use]
    pub fn conversion(days: i64, reason: impl Into<String>) -> Self {
        Self::Conversion {
            days,
            reason: reason.into(),
        }
    }
}
