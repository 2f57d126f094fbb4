/// Parsing errors.
///
/// Defines the errors raised while scanning the expression text: malformed or
/// missing number literals, unbalanced parentheses, and input left over after a
/// complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while building the variable table or while
/// combining values, such as unknown variables, division by zero, or an
/// unsupported composite exponent.
pub mod runtime_error;
/// Series construction errors.
///
/// Raised by [`TimeSeries::new`](crate::interpreter::value::series::TimeSeries::new)
/// when the timestamp and magnitude sequences do not line up.
pub mod series_error;

use std::fmt;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use series_error::SeriesError;

/// Result type used by the scanning primitives.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type used by the grammar layers and the public entry points.
///
/// Every layer propagates the first failure unchanged; no partial value is
/// ever returned alongside an error.
pub type EvalResult<T> = Result<T, Error>;

/// The single failure reported by an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression text is syntactically invalid.
    Parse(ParseError),
    /// The expression is well formed but could not be evaluated.
    Runtime(RuntimeError),
    /// A composite operand could not be constructed.
    Series(SeriesError),
}

impl Error {
    /// Returns the character index at which the problem was detected, if the
    /// failure is tied to a position in the expression text.
    ///
    /// # Example
    /// ```
    /// use seriesmath::evaluate_scalar;
    ///
    /// let err = evaluate_scalar("5/0", std::iter::empty::<(&str, f64)>()).unwrap_err();
    /// assert_eq!(err.index(), Some(1));
    /// ```
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.index(),
            Self::Runtime(e) => e.index(),
            Self::Series(_) => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<SeriesError> for Error {
    fn from(e: SeriesError) -> Self {
        Self::Series(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Series(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Series(e) => Some(e),
        }
    }
}
