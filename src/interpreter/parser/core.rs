use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        cursor::Cursor,
        value::{composite::Composite, core::Value},
        variables::VariableTable,
    },
    options::Options,
};

/// Evaluates one expression over one variable table.
///
/// The parser computes values while it descends, so each grammar function
/// returns a [`Value`] rather than a syntax node. A parser is consumed by
/// [`Parser::parse`] and cannot be reused.
#[derive(Debug)]
pub struct Parser<'a, C> {
    pub(in crate::interpreter::parser) cursor:    Cursor,
    pub(in crate::interpreter::parser) variables: &'a VariableTable<C>,
    pub(in crate::interpreter::parser) options:   &'a Options,
}

impl<'a, C: Composite> Parser<'a, C> {
    /// Creates a parser positioned at the start of `text`.
    #[must_use]
    pub fn new(text: &str, variables: &'a VariableTable<C>, options: &'a Options) -> Self {
        Self { cursor: Cursor::new(text),
               variables,
               options }
    }

    /// Parses and evaluates the complete input.
    ///
    /// Grammar: `input := expression whitespace*`
    ///
    /// # Errors
    /// Returns `ParseError::TrailingInput` if anything but whitespace follows
    /// the expression, and propagates every error raised while parsing it.
    ///
    /// # Example
    /// ```
    /// use seriesmath::{
    ///     Options,
    ///     interpreter::{
    ///         parser::core::Parser,
    ///         value::{core::Value, series::TimeSeries},
    ///         variables::VariableTable,
    ///     },
    /// };
    ///
    /// let variables = VariableTable::<TimeSeries>::new([("x", 4.0)]).unwrap();
    /// let options = Options::default();
    /// let value = Parser::new("x * (1 + 2) ", &variables, &options).parse().unwrap();
    /// assert_eq!(value, Value::Scalar(12.0));
    /// ```
    pub fn parse(mut self) -> EvalResult<Value<C>> {
        let value = self.parse_expression()?;

        self.cursor.skip_whitespace();
        if let Some(found) = self.cursor.peek() {
            return Err(ParseError::TrailingInput { found,
                                                   index: self.cursor.position() }.into());
        }

        Ok(value)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for recursive descent; it starts at the
    /// loosest-binding level.
    ///
    /// Grammar: `expression := additive`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> EvalResult<Value<C>> {
        self.parse_additive()
    }
}
