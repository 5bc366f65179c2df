#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The grammar required another token but the input had ended.
    ///
    /// Raised for a `maano` without a name or `=`, a condition with fewer
    /// than three tokens, a missing `{`, or a block without a closing brace.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { expected, line } => {
                write!(f, "Error on line {line}: Unexpected end of input, expected {expected}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
