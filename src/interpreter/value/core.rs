use std::fmt;

use crate::{error::RuntimeError, interpreter::value::composite::Composite};

/// Represents an operand in the expression grammar.
///
/// Values are immutable from the evaluator's point of view: every arithmetic
/// method returns a new value and leaves its operands untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<C> {
    /// A plain number (double precision floating-point).
    Scalar(f64),
    /// A structured value implementing [`Composite`].
    Composite(C),
}

impl<C> From<f64> for Value<C> {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl<C> From<i32> for Value<C> {
    fn from(v: i32) -> Self {
        Self::Scalar(f64::from(v))
    }
}

impl<C> From<u32> for Value<C> {
    fn from(v: u32) -> Self {
        Self::Scalar(f64::from(v))
    }
}

impl<C> Value<C> {
    /// Returns `true` if the value is the scalar zero (either sign).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Scalar(v) if *v == 0.0)
    }

    /// Returns `true` if the value is [`Composite`](Value::Composite).
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(..))
    }

    /// Returns a short name for the operand class, used in log events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Composite(_) => "composite",
        }
    }
}

impl<C: Composite> Value<C> {
    /// Wraps a composite.
    #[must_use]
    pub const fn composite(c: C) -> Self {
        Self::Composite(c)
    }

    /// Adds two values.
    ///
    /// If either operand is a composite the result is a composite; the scalar
    /// side, if any, is folded in with [`Composite::add_scalar`] whichever
    /// side it is on.
    ///
    /// # Example
    /// ```
    /// use seriesmath::interpreter::value::{core::Value, series::TimeSeries};
    ///
    /// let a: Value<TimeSeries> = Value::Scalar(2.0);
    /// assert_eq!(a.add(&Value::Scalar(3.0)), Value::Scalar(5.0));
    ///
    /// let s = Value::composite(TimeSeries::new(vec![1, 2], vec![1.0, 2.0]).unwrap());
    /// assert_eq!(s.add(&Value::Scalar(3.0)), Value::Scalar(3.0).add(&s));
    /// ```
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a + b),
            (Self::Composite(a), Self::Composite(b)) => Self::Composite(a.add(b)),
            (Self::Composite(c), Self::Scalar(s)) | (Self::Scalar(s), Self::Composite(c)) => {
                Self::Composite(c.add_scalar(*s))
            },
        }
    }

    /// Multiplies two values, dispatching like [`Value::add`].
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a * b),
            (Self::Composite(a), Self::Composite(b)) => Self::Composite(a.multiply(b)),
            (Self::Composite(c), Self::Scalar(s)) | (Self::Scalar(s), Self::Composite(c)) => {
                Self::Composite(c.multiply_scalar(*s))
            },
        }
    }

    /// Returns the additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Scalar(v) => Self::Scalar(-v),
            Self::Composite(c) => Self::Composite(c.negate()),
        }
    }

    /// Returns the multiplicative inverse.
    ///
    /// Callers are expected to have rejected a scalar zero beforehand.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self {
            Self::Scalar(v) => Self::Scalar(1.0 / v),
            Self::Composite(c) => Self::Composite(c.invert()),
        }
    }

    /// Raises the value to a scalar power.
    ///
    /// # Errors
    /// - `RuntimeError::CompositeExponent` if `exponent` is a composite.
    /// - `RuntimeError::NonFiniteResult` if a scalar power overflows or is not
    ///   a real number. Composite magnitudes are not checked.
    ///
    /// `index` is the position of the `**` operator.
    ///
    /// # Example
    /// ```
    /// use seriesmath::interpreter::value::{core::Value, series::TimeSeries};
    ///
    /// let base: Value<TimeSeries> = Value::Scalar(2.0);
    /// assert_eq!(base.pow(&Value::Scalar(10.0), 1).unwrap(), Value::Scalar(1024.0));
    /// assert!(Value::<TimeSeries>::Scalar(0.0).pow(&Value::Scalar(-1.0), 1).is_err());
    /// ```
    pub fn pow(&self, exponent: &Self, index: usize) -> Result<Self, RuntimeError> {
        match (self, exponent) {
            (Self::Scalar(b), Self::Scalar(e)) => {
                let raised = b.powf(*e);
                if raised.is_finite() {
                    Ok(Self::Scalar(raised))
                } else {
                    Err(RuntimeError::NonFiniteResult { index: Some(index) })
                }
            },
            (Self::Composite(b), Self::Scalar(e)) => Ok(Self::Composite(b.exponentiate(*e))),
            (_, Self::Composite(_)) => Err(RuntimeError::CompositeExponent { index }),
        }
    }
}

impl<C: fmt::Display> fmt::Display for Value<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Composite(c) => write!(f, "{c}"),
        }
    }
}
