#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// An arithmetic operator was applied to a value it does not support.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A condition used an operator that is not a comparison.
    UnknownComparator {
        /// The operator text found in the condition.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::UnknownComparator { operator, line } => write!(f,
                                                                 "Error on line {line}: '{operator}' is not a comparison operator."),
        }
    }
}

impl std::error::Error for RuntimeError {}
