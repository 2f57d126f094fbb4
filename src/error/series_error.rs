#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while constructing a series.
pub enum SeriesError {
    /// The timestamp and magnitude sequences differ in length.
    LengthMismatch {
        /// Number of timestamps supplied.
        times:  usize,
        /// Number of magnitudes supplied.
        values: usize,
    },
    /// Timestamps are not strictly ascending.
    Unordered {
        /// Position of the first timestamp that is not greater than its
        /// predecessor.
        index: usize,
    },
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { times, values } => write!(f,
                                                             "Series has {times} timestamps but {values} values."),
            Self::Unordered { index } => write!(f,
                                                "Series timestamps must be strictly ascending (position {index})."),
        }
    }
}

impl std::error::Error for SeriesError {}
