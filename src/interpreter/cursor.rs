/// Characters skipped between grammar elements.
const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// A read position over the expression text.
///
/// The position is a character offset and always satisfies
/// `0 <= position <= len`. A cursor belongs to a single evaluation.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars:    Vec<char>,
    position: usize,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `text`.
    ///
    /// # Example
    /// ```
    /// use seriesmath::interpreter::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1 + 2");
    /// assert_eq!(cursor.position(), 0);
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars:    text.chars().collect(),
               position: 0, }
    }

    /// Returns the character at the current position without advancing, or
    /// `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Moves the position forward by one character. Does nothing at end of
    /// input.
    pub const fn advance(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
    }

    /// Returns the current character offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Advances past spaces, tabs, newlines, and carriage returns.
    ///
    /// # Example
    /// ```
    /// use seriesmath::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\n x");
    /// cursor.skip_whitespace();
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.position(), 4);
    /// assert_eq!(cursor.peek(), Some('x'));
    /// ```
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek()
              && WHITESPACE.contains(&c)
        {
            self.position += 1;
        }
    }

    /// Consumes the current character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }
}
