use crate::{
    error::{EvalResult, ParseError, ParseResult, RuntimeError},
    interpreter::{cursor::Cursor, value::core::Value, variables::VariableTable},
};

/// Returns `true` for characters that may appear in a variable name.
///
/// Only ASCII letters, digits, and `_` qualify. Non-ASCII letters, including
/// ones whose lowercase form is ASCII such as `\u{212A}` (KELVIN SIGN), end
/// the identifier.
///
/// # Example
/// ```
/// use seriesmath::interpreter::lexer::is_identifier_char;
///
/// assert!(is_identifier_char('K'));
/// assert!(is_identifier_char('_'));
/// assert!(!is_identifier_char('\u{212A}'));
/// assert!(!is_identifier_char('é'));
/// ```
#[must_use]
pub const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` for characters that start a number literal.
#[must_use]
pub const fn is_number_start(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Scans a decimal number literal.
///
/// Consumes digits and at most one `.`. Leading whitespace is skipped.
///
/// # Errors
/// - `MalformedNumber` at the index of a second `.`.
/// - `UnexpectedEnd` if the input is exhausted before anything was scanned.
/// - `ExpectedNumber` if no digits were found.
///
/// # Example
/// ```
/// use seriesmath::{
///     error::ParseError,
///     interpreter::{cursor::Cursor, lexer::scan_number},
/// };
///
/// let mut cursor = Cursor::new(" 12.5+1");
/// assert_eq!(scan_number(&mut cursor), Ok(12.5));
/// assert_eq!(cursor.peek(), Some('+'));
///
/// let mut cursor = Cursor::new("1.2.3");
/// assert_eq!(scan_number(&mut cursor), Err(ParseError::MalformedNumber { index: 3 }));
/// ```
pub fn scan_number(cursor: &mut Cursor) -> ParseResult<f64> {
    cursor.skip_whitespace();
    let start = cursor.position();

    let mut literal = String::new();
    let mut decimal_found = false;

    while let Some(c) = cursor.peek() {
        if c == '.' {
            if decimal_found {
                return Err(ParseError::MalformedNumber { index: cursor.position() });
            }
            decimal_found = true;
        } else if !c.is_ascii_digit() {
            break;
        }
        literal.push(c);
        cursor.advance();
    }

    if literal.is_empty() {
        return match cursor.peek() {
            Some(found) => Err(ParseError::ExpectedNumber { found, index: start }),
            None => Err(ParseError::UnexpectedEnd),
        };
    }

    // A lone "." has no digits.
    literal.parse()
           .map_err(|_| ParseError::ExpectedNumber { found: '.', index: start })
}

/// Scans a variable name and resolves it against `variables`.
///
/// Consumes a maximal run of ASCII letters, digits, and underscores. An empty
/// run is looked up like any other name and fails.
///
/// # Errors
/// Returns `RuntimeError::UnknownVariable` if the name has no binding.
pub fn scan_variable<C: Clone>(cursor: &mut Cursor,
                               variables: &VariableTable<C>)
                               -> EvalResult<Value<C>> {
    cursor.skip_whitespace();
    let index = cursor.position();

    let mut name = String::new();
    while let Some(c) = cursor.peek()
          && is_identifier_char(c)
    {
        name.push(c);
        cursor.advance();
    }

    variables.get(&name)
             .ok_or_else(|| RuntimeError::UnknownVariable { name, index }.into())
}
