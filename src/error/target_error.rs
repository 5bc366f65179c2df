#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised while selecting a code generation target.
pub enum TargetError {
    /// The tag is not one of `js`, `cpp`, `c`, `java` or `python`.
    UnknownTarget {
        /// The tag that was given.
        name: String,
    },
}

impl std::fmt::Display for TargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTarget { name } => write!(f,
                                                   "Unknown target language '{name}'. Expected one of: js, cpp, c, java, python."),
        }
    }
}

impl std::error::Error for TargetError {}
