#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning the expression text.
pub enum ParseError {
    /// A number literal contained a second decimal point.
    MalformedNumber {
        /// The index of the offending `.`.
        index: usize,
    },
    /// A number literal was expected but no digits were found.
    ExpectedNumber {
        /// The character found instead.
        found: char,
        /// The index where the literal should have started.
        index: usize,
    },
    /// The input ended where a value was expected.
    UnexpectedEnd,
    /// A `(` was never matched by a `)`.
    UnclosedParenthesis {
        /// The index where the `)` was expected.
        index: usize,
    },
    /// Characters remain after a complete expression.
    TrailingInput {
        /// The first unconsumed character.
        found: char,
        /// The index of that character.
        index: usize,
    },
}

impl ParseError {
    /// Returns the recorded character index, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::MalformedNumber { index }
            | Self::ExpectedNumber { index, .. }
            | Self::UnclosedParenthesis { index }
            | Self::TrailingInput { index, .. } => Some(*index),
            Self::UnexpectedEnd => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { index } => {
                write!(f, "Found an extra period in a number at character {index}.")
            },
            Self::ExpectedNumber { found, index } => write!(f,
                                                            "Expected a number at character {index} but found '{found}'."),
            Self::UnexpectedEnd => write!(f, "Unexpected end of input."),
            Self::UnclosedParenthesis { index } => {
                write!(f, "No closing parenthesis found at character {index}.")
            },
            Self::TrailingInput { found, index } => {
                write!(f, "Unexpected character found: '{found}' at index {index}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
