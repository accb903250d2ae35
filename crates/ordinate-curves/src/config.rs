//! Curve construction settings.
//!
//! Every curve-producing operation takes its settings from a
//! [`CurveConfig`]. Operations that compute new values (algebra, resampling,
//! mapping) start from [`CurveConfig::default`] rather than inheriting the
//! settings of their inputs: a curve with negative values must not silently
//! pick up a log-scaled axis from an operand.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};

/// How construction treats the order of the input points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortPolicy {
    /// Drop duplicate x values (first occurrence wins), then sort by x.
    #[default]
    Normalize,

    /// Take the points as given.
    ///
    /// For transforms that leave x untouched. Unsorted or duplicated input
    /// is still rejected by the interpolation kernel.
    AssumeSorted,
}

/// Settings a curve is built with.
///
/// # Example
///
/// ```rust
/// use ordinate_curves::{CurveConfig, ExtrapolationMethod};
///
/// let config = CurveConfig::default()
///     .with_logy(true)
///     .with_extrapolation(ExtrapolationMethod::Linear);
/// assert!(config.logy);
/// assert!(!config.logx);
///
/// let loaded = CurveConfig::from_json(r#"{"logy": true, "extrapolation": "Linear"}"#).unwrap();
/// assert_eq!(loaded, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CurveConfig {
    /// Interpolation between grid points.
    pub method: InterpolationMethod,

    /// Extrapolation beyond the grid.
    pub extrapolation: ExtrapolationMethod,

    /// Interpolate and extrapolate in `ln(x)`.
    pub logx: bool,

    /// Interpolate and extrapolate in `ln(y)`.
    pub logy: bool,

    /// Treatment of unsorted and duplicated input.
    pub sort: SortPolicy,
}

impl CurveConfig {
    /// Sets the interpolation method.
    #[must_use]
    pub fn with_method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the extrapolation method.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: ExtrapolationMethod) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Sets log scaling of the x axis.
    #[must_use]
    pub fn with_logx(mut self, logx: bool) -> Self {
        self.logx = logx;
        self
    }

    /// Sets log scaling of the y axis.
    #[must_use]
    pub fn with_logy(mut self, logy: bool) -> Self {
        self.logy = logy;
        self
    }

    /// Sets the sort policy.
    #[must_use]
    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }

    /// Reads a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfig`] if the JSON does not describe a
    /// configuration.
    pub fn from_json(json: &str) -> CurveResult<Self> {
        serde_json::from_str(json).map_err(|e| CurveError::invalid_config(e.to_string()))
    }

    /// Writes the configuration as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfig`] if serialization fails.
    pub fn to_json(&self) -> CurveResult<String> {
        serde_json::to_string(self).map_err(|e| CurveError::invalid_config(e.to_string()))
    }
}
