//! Error types for the numeric kernels.

use thiserror::Error;

/// A specialized Result type for kernel operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while building or evaluating a kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Evaluation point is outside the grid and extrapolation is not allowed.
    #[error("Extrapolation not allowed: {x} is outside [{min}, {max}]")]
    ExtrapolationNotAllowed {
        /// The query point.
        x: f64,
        /// Minimum valid value.
        min: f64,
        /// Maximum valid value.
        max: f64,
    },

    /// Evaluation point is not a grid node of a kernel that does not interpolate.
    #[error("No interpolation: {x} is not a grid node")]
    NotOnGrid {
        /// The query point.
        x: f64,
    },

    /// Insufficient data points for the kernel.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
