//! Interpolation and extrapolation settings, and the evaluable interpolant
//! built from them.

use std::fmt;
use std::sync::Arc;

use ordinate_math::extrapolation::{
    Extrapolator, FillExtrapolator, FlatExtrapolator, LinearExtrapolator,
};
use ordinate_math::interpolation::{
    ConstantInterpolator, GridInterpolator, Interpolator, LinearInterpolator,
};
use ordinate_math::MathError;
use serde::{Deserialize, Serialize};

use crate::error::CurveResult;

/// How a curve is evaluated between its grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Linear interpolation between neighbouring grid points.
    #[default]
    LinearOnGrid,

    /// Value of the nearest grid point.
    ConstantOnGrid,

    /// Only grid points can be evaluated.
    NoInterpolation,
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LinearOnGrid => "Linear",
            Self::ConstantOnGrid => "Constant",
            Self::NoInterpolation => "None",
        };
        write!(f, "{name}")
    }
}

/// How a curve is evaluated outside its grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ExtrapolationMethod {
    /// Boundary value, unchanged.
    #[default]
    Flat,

    /// Continue with the boundary slope.
    Linear,

    /// Fail with an out-of-range error.
    Throw,

    /// A fixed value.
    ///
    /// The value lives in interpolation space: on a `logy` curve it is
    /// exponentiated like any other interpolated value.
    Fill {
        /// The fill value.
        value: f64,
    },
}

impl fmt::Display for ExtrapolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "Flat"),
            Self::Linear => write!(f, "Linear"),
            Self::Throw => write!(f, "Throw"),
            Self::Fill { value } => write!(f, "Fill({value})"),
        }
    }
}

/// An interpolation kernel wrapped with an extrapolation rule.
///
/// Operates purely on the (possibly log-transformed) numbers it was built
/// from; log scaling is the curve's concern.
#[derive(Clone)]
pub struct Interpolant {
    kernel: Arc<dyn Interpolator>,
    extrapolation: ExtrapolationMethod,
}

impl fmt::Debug for Interpolant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolant")
            .field("kernel", &self.kernel.name())
            .field("min_x", &self.kernel.min_x())
            .field("max_x", &self.kernel.max_x())
            .field("extrapolation", &self.extrapolation)
            .finish()
    }
}

impl Interpolant {
    /// Builds the kernel for `method` over `xs`/`ys`.
    ///
    /// # Errors
    ///
    /// Propagates kernel validation failures: fewer than two points,
    /// non-finite or non-increasing abscissae.
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        method: InterpolationMethod,
        extrapolation: ExtrapolationMethod,
    ) -> CurveResult<Self> {
        let kernel: Arc<dyn Interpolator> = match method {
            InterpolationMethod::LinearOnGrid => Arc::new(LinearInterpolator::new(xs, ys)?),
            InterpolationMethod::ConstantOnGrid => Arc::new(ConstantInterpolator::new(xs, ys)?),
            InterpolationMethod::NoInterpolation => Arc::new(GridInterpolator::new(xs, ys)?),
        };
        tracing::trace!(kernel = kernel.name(), %extrapolation, "built interpolant");

        Ok(Self {
            kernel,
            extrapolation,
        })
    }

    /// Evaluates at `x`, extrapolating outside the grid.
    pub fn value(&self, x: f64) -> CurveResult<f64> {
        let kernel = self.kernel.as_ref();
        if x.is_nan() || kernel.in_range(x) {
            return Ok(kernel.interpolate(x)?);
        }

        let edge = if x < kernel.min_x() {
            kernel.min_x()
        } else {
            kernel.max_x()
        };

        let fill;
        let extrapolator: &dyn Extrapolator = match self.extrapolation {
            ExtrapolationMethod::Throw => {
                return Err(MathError::ExtrapolationNotAllowed {
                    x,
                    min: kernel.min_x(),
                    max: kernel.max_x(),
                }
                .into());
            }
            ExtrapolationMethod::Flat => &FlatExtrapolator,
            ExtrapolationMethod::Linear => &LinearExtrapolator,
            ExtrapolationMethod::Fill { value } => {
                fill = FillExtrapolator::new(value);
                &fill
            }
        };

        let edge_value = kernel.interpolate(edge)?;
        let edge_derivative = kernel.derivative(edge)?;
        Ok(extrapolator.extrapolate(x, edge, edge_value, edge_derivative))
    }

    /// Returns the extrapolation rule.
    #[must_use]
    pub fn extrapolation(&self) -> ExtrapolationMethod {
        self.extrapolation
    }

    /// Returns the kernel's grid bounds.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.kernel.min_x(), self.kernel.max_x())
    }
}
