use std::fmt;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::value::{composite::Composite, core::Value},
    util::num::{f64_to_i64_exact, snap_to_integer},
};

/// The normalized result of an evaluation.
///
/// Scalars are reported as [`Integer`](Outcome::Integer) whenever the snapped
/// value is integral and fits in an `i64`, and as [`Real`](Outcome::Real)
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<C> {
    /// An integral scalar result.
    Integer(i64),
    /// A fractional or out-of-range scalar result.
    Real(f64),
    /// A composite result with every magnitude snapped.
    Composite(C),
}

impl<C> Outcome<C> {
    /// Returns the scalar result as an `f64`, or `None` for a composite.
    ///
    /// # Example
    /// ```
    /// use seriesmath::{Outcome, interpreter::value::series::TimeSeries};
    ///
    /// assert_eq!(Outcome::<TimeSeries>::Integer(3).as_f64(), Some(3.0));
    /// assert_eq!(Outcome::<TimeSeries>::Real(2.5).as_f64(), Some(2.5));
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Real(r) => Some(*r),
            Self::Composite(_) => None,
        }
    }

    /// Returns the composite result, or `None` for a scalar.
    #[must_use]
    pub const fn as_composite(&self) -> Option<&C> {
        match self {
            Self::Composite(c) => Some(c),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the composite result, if any.
    #[must_use]
    pub fn into_composite(self) -> Option<C> {
        match self {
            Self::Composite(c) => Some(c),
            _ => None,
        }
    }

    /// Returns `true` if the outcome is [`Integer`](Outcome::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

/// Snaps a final value onto nearby integers.
///
/// A composite keeps its structure; each magnitude is snapped on its own. A
/// scalar is snapped once and then classified as integer or real.
///
/// # Errors
/// Returns `RuntimeError::NonFiniteResult` if a scalar result is infinite or
/// NaN. Composite magnitudes pass through unchecked.
///
/// # Example
/// ```
/// use seriesmath::{
///     Outcome,
///     interpreter::{
///         normalize::normalize,
///         value::{core::Value, series::TimeSeries},
///     },
/// };
///
/// let v: Value<TimeSeries> = Value::Scalar(6.999_999_999_996);
/// assert_eq!(normalize(v, 1e-10), Ok(Outcome::Integer(7)));
///
/// let v: Value<TimeSeries> = Value::Scalar(2.5);
/// assert_eq!(normalize(v, 1e-10), Ok(Outcome::Real(2.5)));
///
/// let v: Value<TimeSeries> = Value::Scalar(f64::INFINITY);
/// assert!(normalize(v, 1e-10).is_err());
/// ```
pub fn normalize<C: Composite>(value: Value<C>, epsilon: f64) -> Result<Outcome<C>, RuntimeError> {
    match value {
        Value::Scalar(v) if !v.is_finite() => Err(RuntimeError::NonFiniteResult { index: None }),
        Value::Scalar(v) => {
            let snapped = snap_to_integer(v, epsilon);
            trace!(raw = v, snapped, "normalized scalar");
            Ok(f64_to_i64_exact(snapped).map_or(Outcome::Real(snapped), Outcome::Integer))
        },
        Value::Composite(c) => {
            trace!("normalizing composite magnitudes");
            Ok(Outcome::Composite(c.map_magnitudes(|v| snap_to_integer(v, epsilon))))
        },
    }
}

impl<C: fmt::Display> fmt::Display for Outcome<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Composite(c) => write!(f, "{c}"),
        }
    }
}
