use tracing::trace;

use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::{
        parser::core::Parser,
        value::{composite::Composite, core::Value},
    },
};

/// An entry in the multiplication level's working list.
///
/// `**` does not combine immediately: its right operand is recorded as a
/// pending exponent and folded into the preceding factor by
/// [`reduce_exponents`].
#[derive(Debug, Clone, PartialEq)]
pub enum Factor<C> {
    /// A factor ready to be multiplied.
    Operand(Value<C>),
    /// The right operand of a `**`, waiting to be applied to the factor before
    /// it.
    Exponent {
        /// The exponent.
        value: Value<C>,
        /// Index of the `**` in the input.
        index: usize,
    },
}

impl<C> Factor<C> {
    const fn value(&self) -> &Value<C> {
        match self {
            Self::Operand(value) | Self::Exponent { value, .. } => value,
        }
    }

    fn into_value(self) -> Value<C> {
        match self {
            Self::Operand(value) | Self::Exponent { value, .. } => value,
        }
    }
}

/// Applies every pending exponent to the factor before it, left to right.
///
/// The scan index does not advance after a reduction, so `a ** b ** c`
/// becomes `(a ** b) ** c`. At most `cap` steps are taken; a well-formed list
/// finishes in fewer than twice its length.
///
/// # Errors
/// - `RuntimeError::CompositeExponent` if an exponent is a composite.
/// - `RuntimeError::ExponentReductionStalled` if the cap is reached.
///
/// # Example
/// ```
/// use seriesmath::interpreter::{
///     parser::binary::{Factor, reduce_exponents},
///     value::{core::Value, series::TimeSeries},
/// };
///
/// let factors: Vec<Factor<TimeSeries>> = vec![Factor::Operand(Value::Scalar(2.0)),
///                                             Factor::Exponent { value: Value::Scalar(3.0),
///                                                                index: 1, },
///                                             Factor::Exponent { value: Value::Scalar(2.0),
///                                                                index: 6, }];
///
/// let reduced = reduce_exponents(factors, 12).unwrap();
/// assert_eq!(reduced, vec![Value::Scalar(64.0)]);
/// ```
pub fn reduce_exponents<C: Composite>(mut factors: Vec<Factor<C>>,
                                      cap: usize)
                                      -> EvalResult<Vec<Value<C>>> {
    let mut steps = 0;
    let mut i = 0;

    while i < factors.len() {
        if steps >= cap {
            return Err(RuntimeError::ExponentReductionStalled { steps }.into());
        }
        steps += 1;

        if let Some(Factor::Exponent { value, index }) = factors.get(i + 1) {
            let raised = factors[i].value().pow(value, *index)?;
            trace!(index, kind = raised.kind(), "applied pending exponent");
            factors[i] = Factor::Operand(raised);
            factors.remove(i + 1);
        } else {
            i += 1;
        }
    }

    Ok(factors.into_iter().map(Factor::into_value).collect())
}

impl<C: Composite> Parser<'_, C> {
    /// Parses addition and subtraction.
    ///
    /// Subtracted terms are negated as they are read; all terms are then
    /// summed left to right. Parsing stops at the first character that is not
    /// `+` or `-`, leaving it unconsumed.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> EvalResult<Value<C>> {
        let mut terms = vec![self.parse_multiplicative()?];

        loop {
            self.cursor.skip_whitespace();

            if self.cursor.eat('+') {
                terms.push(self.parse_multiplicative()?);
            } else if self.cursor.eat('-') {
                terms.push(self.parse_multiplicative()?.negate());
            } else {
                break;
            }
        }

        Ok(terms.iter().fold(Value::Scalar(0.0), |sum, term| sum.add(term)))
    }

    /// Parses multiplication, division, and exponentiation.
    ///
    /// Division multiplies by the inverse of the right operand, which is taken
    /// as soon as the operand is read. `**` must be written as two adjacent
    /// asterisks; its operand becomes a pending exponent resolved by
    /// [`reduce_exponents`] before the factors are multiplied.
    ///
    /// Grammar: `multiplicative := grouping (("*" | "**" | "/") grouping)*`
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` at the index of the `/` when the
    /// divisor is the scalar zero.
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self)
                                                               -> EvalResult<Value<C>> {
        let mut factors = vec![Factor::Operand(self.parse_parenthesis()?)];

        loop {
            self.cursor.skip_whitespace();
            let index = self.cursor.position();

            if self.cursor.eat('*') {
                if self.cursor.eat('*') {
                    let value = self.parse_parenthesis()?;
                    factors.push(Factor::Exponent { value, index });
                } else {
                    factors.push(Factor::Operand(self.parse_parenthesis()?));
                }
            } else if self.cursor.eat('/') {
                let divisor = self.parse_parenthesis()?;
                if divisor.is_zero() {
                    return Err(RuntimeError::DivisionByZero { index }.into());
                }
                factors.push(Factor::Operand(divisor.invert()));
            } else {
                break;
            }
        }

        let cap = self.options.reduction_cap(factors.len());
        let factors = reduce_exponents(factors, cap)?;

        Ok(factors.iter().fold(Value::Scalar(1.0), |product, factor| product.multiply(factor)))
    }
}
