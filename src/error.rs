/// Parsing errors.
///
/// Defines the errors that can occur while building the syntax tree. The
/// lexer itself never fails, and the parser is lenient about most malformed
/// input; only running out of tokens where the grammar needs one is reported.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program,
/// such as division by zero or arithmetic on text.
pub mod runtime_error;
/// Target selection errors.
///
/// Raised when a code generation target tag is not recognised.
pub mod target_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use target_error::TargetError;
