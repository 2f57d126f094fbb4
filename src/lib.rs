//! # seriesmath
//!
//! seriesmath evaluates arithmetic expressions written as text. Besides plain
//! numbers, a variable may be bound to a composite value, such as a
//! [`TimeSeries`], which takes part in the same grammar: `2*flow + inflow - 200`
//! works whether `flow` and `inflow` are numbers or series.
//!
//! The grammar supports `+`, `-`, `*`, `/`, `**` (left-associative), unary
//! minus, parentheses, decimal literals, and the constants `pi` and `e`.
//! Results are snapped onto nearby integers to hide floating-point noise.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    error::{Error, EvalResult},
    interpreter::{
        normalize::Outcome,
        value::{composite::Composite, core::Value, series::TimeSeries},
    },
    options::Options,
};
use crate::interpreter::{normalize::normalize, parser::core::Parser, variables::VariableTable};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every failure an evaluation can report. Each variant
/// carries its own structured fields, such as the character index where the
/// problem was detected, and implements `Display` with a human-readable
/// message.
///
/// # Responsibilities
/// - Defines error enums for syntax, runtime, and series construction
///   failures.
/// - Wraps them in a single [`Error`] returned by the entry points.
pub mod error;
/// Implements the expression pipeline.
///
/// This module ties together the cursor, the scanning primitives, the grammar
/// layers, the value algebra, and the result normalizer.
///
/// # Responsibilities
/// - Scans and evaluates the expression in a single left-to-right pass.
/// - Dispatches arithmetic between scalar and composite operands.
/// - Normalizes the final value.
pub mod interpreter;
/// Evaluation options.
///
/// Holds the snapping tolerance and the exponent reduction cap, with defaults
/// suitable for everyday use.
pub mod options;
/// General numeric utilities.
///
/// The exact `f64` to `i64` conversion and the epsilon-tolerant integer
/// snapping used by the normalizer.
pub mod util;

/// Evaluates `text` with the given variable bindings.
///
/// Bindings are `(name, value)` pairs; a value may be anything convertible to
/// a [`Value`], such as an `f64` or a `Value::Composite`. Supplying the same
/// name twice, or one of the constants `pi` and `e`, is an error.
///
/// # Errors
/// Returns the first error encountered while binding, parsing, or evaluating.
///
/// # Examples
/// ```
/// use seriesmath::{Outcome, TimeSeries, Value, evaluate};
///
/// let flow = TimeSeries::new(vec![0, 1440], vec![100.0, 250.0]).unwrap();
/// let bindings = [("flow", Value::Composite(flow)), ("k", Value::Scalar(2.0))];
///
/// let result = evaluate("k*flow - 200", bindings).unwrap();
/// let series = result.as_composite().unwrap();
/// assert_eq!(series.values(), &[0.0, 300.0]);
///
/// let result = evaluate::<TimeSeries, _, _, _>("2*(3+4)", std::iter::empty::<(&str, f64)>());
/// assert_eq!(result.unwrap(), Outcome::Integer(14));
/// ```
pub fn evaluate<C, I, K, V>(text: &str, bindings: I) -> EvalResult<Outcome<C>>
    where C: Composite,
          I: IntoIterator<Item = (K, V)>,
          K: Into<String>,
          V: Into<Value<C>>
{
    evaluate_with(text, bindings, &Options::default())
}

/// Evaluates `text` with explicit [`Options`].
///
/// # Errors
/// Returns the first error encountered while binding, parsing, or evaluating.
///
/// # Example
/// ```
/// use seriesmath::{Options, Outcome, TimeSeries, evaluate_with};
///
/// let options = Options::default().with_epsilon(0.01);
/// let result = evaluate_with::<TimeSeries, _, _, _>("2.995", [("unused", 0.0)], &options);
/// assert_eq!(result.unwrap(), Outcome::Integer(3));
/// ```
pub fn evaluate_with<C, I, K, V>(text: &str,
                                 bindings: I,
                                 options: &Options)
                                 -> EvalResult<Outcome<C>>
    where C: Composite,
          I: IntoIterator<Item = (K, V)>,
          K: Into<String>,
          V: Into<Value<C>>
{
    let variables = VariableTable::new(bindings)?;
    debug!(chars = text.chars().count(), bindings = variables.len(), "evaluating expression");

    let value = Parser::new(text, &variables, options).parse()?;
    debug!(kind = value.kind(), "expression evaluated");

    Ok(normalize(value, options.snap_epsilon)?)
}

/// Evaluates `text` with plain numeric bindings only.
///
/// # Errors
/// Returns the first error encountered while binding, parsing, or evaluating.
///
/// # Example
/// ```
/// use seriesmath::{Outcome, evaluate_scalar};
///
/// assert_eq!(evaluate_scalar("x ** 2 + 1", [("x", 3.0)]).unwrap(), Outcome::Integer(10));
/// assert_eq!(evaluate_scalar("10/4", [("x", 3.0)]).unwrap(), Outcome::Real(2.5));
/// ```
pub fn evaluate_scalar<I, K>(text: &str, bindings: I) -> EvalResult<Outcome<TimeSeries>>
    where I: IntoIterator<Item = (K, f64)>,
          K: Into<String>
{
    evaluate(text, bindings)
}
