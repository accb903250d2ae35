//! Error types for curve operations.
//!
//! Covers construction, evaluation, alignment and the grid utilities.
//! Failures inside the numeric kernels and tenor parsing are wrapped from
//! the lower crates.

use ordinate_core::CoreError;
use ordinate_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// x and y arrays have different lengths.
    #[error("Length mismatch: {x_len} x values but {y_len} y values")]
    LengthMismatch {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },

    /// An operation would leave a curve without any point.
    #[error("Empty result: {operation} leaves no points")]
    EmptyResult {
        /// The operation that emptied the curve.
        operation: String,
    },

    /// Unrecognized or unsupported axis selector.
    #[error("Invalid axis '{axis}' for {operation}")]
    InvalidAxis {
        /// The rejected axis.
        axis: String,
        /// The operation it was passed to.
        operation: String,
    },

    /// Unrecognized dimension selector (1 = x, 2 = y).
    #[error("Invalid dimension {dims}: expected 1 (x) or 2 (y)")]
    InvalidDimension {
        /// The rejected dimension.
        dims: usize,
    },

    /// Invalid argument value.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the invalid argument.
        reason: String,
    },

    /// Curve configuration could not be read.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Tenor parsing or conversion error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Interpolation kernel error.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(x_len: usize, y_len: usize) -> Self {
        Self::LengthMismatch { x_len, y_len }
    }

    /// Creates an empty result error.
    #[must_use]
    pub fn empty_result(operation: impl Into<String>) -> Self {
        Self::EmptyResult {
            operation: operation.into(),
        }
    }

    /// Creates an invalid axis error.
    #[must_use]
    pub fn invalid_axis(axis: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::InvalidAxis {
            axis: axis.into(),
            operation: operation.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
