#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while binding variables or combining
/// values.
pub enum RuntimeError {
    /// A caller-supplied binding collides with a constant or an earlier
    /// binding.
    VariableRedefined {
        /// The name of the variable.
        name: String,
    },
    /// An identifier has no binding.
    UnknownVariable {
        /// The scanned name. Empty when no identifier character was found.
        name:  String,
        /// The index where the identifier starts.
        index: usize,
    },
    /// The right operand of `/` is the scalar zero.
    DivisionByZero {
        /// The index of the `/`.
        index: usize,
    },
    /// A composite value was used as an exponent.
    CompositeExponent {
        /// The index of the `**`.
        index: usize,
    },
    /// A scalar result overflowed or left the real numbers, as in `0 ** -1`,
    /// `10 ** 400`, or a negative base raised to a fractional power.
    NonFiniteResult {
        /// The index of the `**` that produced it. `None` when the final
        /// result itself is not finite.
        index: Option<usize>,
    },
    /// The exponent reduction hit its iteration cap without finishing.
    ExponentReductionStalled {
        /// The number of steps taken before giving up.
        steps: usize,
    },
}

impl RuntimeError {
    /// Returns the recorded character index, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::UnknownVariable { index, .. }
            | Self::DivisionByZero { index }
            | Self::CompositeExponent { index } => Some(*index),
            Self::NonFiniteResult { index } => *index,
            Self::VariableRedefined { .. }
            | Self::ExponentReductionStalled { .. } => None,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableRedefined { name } => {
                write!(f, "Cannot redefine the value of '{name}'.")
            },
            Self::UnknownVariable { name, index } => {
                write!(f, "Unrecognized variable '{name}' at character {index}.")
            },
            Self::DivisionByZero { index } => {
                write!(f, "Division by zero at character {index}.")
            },
            Self::CompositeExponent { index } => write!(f,
                                                        "Exponent at character {index} must be a scalar, found a series."),
            Self::NonFiniteResult { index: Some(index) } => write!(f,
                                                                    "Exponent at character {index} produced a non-finite result."),
            Self::NonFiniteResult { index: None } => write!(f, "The result is not a finite number."),
            Self::ExponentReductionStalled { steps } => write!(f,
                                                               "Exponent reduction did not finish after {steps} steps."),
        }
    }
}

impl std::error::Error for RuntimeError {}
