/// Parser entry points and expression text collection.
///
/// Holds the program level loop and the greedy, precedence free expression
/// scanner shared by every statement that carries a value.
pub mod core;

/// Block parsing.
///
/// Parses the statements between an already consumed opening brace and the
/// next brace token.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the first token of a statement and builds declarations,
/// assignments, prints, conditionals and loops.
pub mod statement;

/// Helpers for consuming required tokens.
pub mod utils;
