use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        lexer::{is_number_start, scan_number, scan_variable},
        parser::core::Parser,
        value::{composite::Composite, core::Value},
    },
};

impl<C: Composite> Parser<'_, C> {
    /// Parses a parenthesized subexpression, or falls through to unary minus.
    ///
    /// Grammar: `grouping := "(" expression ")" | negation`
    ///
    /// # Errors
    /// Returns `ParseError::UnclosedParenthesis` at the position where the
    /// `)` was expected.
    pub(in crate::interpreter::parser) fn parse_parenthesis(&mut self) -> EvalResult<Value<C>> {
        self.cursor.skip_whitespace();

        if self.cursor.eat('(') {
            let value = self.parse_expression()?;

            self.cursor.skip_whitespace();
            if !self.cursor.eat(')') {
                return Err(ParseError::UnclosedParenthesis { index: self.cursor.position() }.into());
            }

            Ok(value)
        } else {
            self.parse_negative()
        }
    }

    /// Parses prefix negation.
    ///
    /// The operand is a full grouping, so `-(1 + 2)` and `--3` are accepted.
    ///
    /// Grammar: `negation := "-" grouping | value`
    fn parse_negative(&mut self) -> EvalResult<Value<C>> {
        self.cursor.skip_whitespace();

        if self.cursor.eat('-') {
            Ok(self.parse_parenthesis()?.negate())
        } else {
            self.parse_value()
        }
    }

    /// Parses a number literal or a variable reference.
    ///
    /// End of input is routed to the number scan so that it reports
    /// `UnexpectedEnd`; any other character that cannot start a number is
    /// treated as the start of a name.
    ///
    /// Grammar: `value := number | identifier`
    fn parse_value(&mut self) -> EvalResult<Value<C>> {
        self.cursor.skip_whitespace();

        if self.cursor.peek().is_none_or(is_number_start) {
            Ok(Value::Scalar(scan_number(&mut self.cursor)?))
        } else {
            scan_variable(&mut self.cursor, self.variables)
        }
    }
}
