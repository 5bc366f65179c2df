/// The codegen module renders the syntax tree in other languages.
///
/// The same tree the evaluator runs is written out as JavaScript, C++, C,
/// Java or Python source text. Nothing generated is ever executed.
///
/// # Responsibilities
/// - Defines the `Target` tags and their per-language formatting rules.
/// - Renders every statement kind, nesting blocks recursively.
pub mod codegen;
/// The evaluator module executes the syntax tree and collects its output.
///
/// The evaluator walks statements in order, keeps one flat namespace of
/// variables, evaluates expression text by strict left to right folding, and
/// accumulates printed lines.
///
/// # Responsibilities
/// - Executes declarations, assignments, prints, conditionals and loops.
/// - Caps every loop at a fixed number of iterations.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat stream of tokens:
/// strings, keywords, identifiers, numbers, operators and braces. It never
/// fails; input it does not recognise is skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Distinguishes the five keywords from other identifiers.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser consumes the token stream front to back and builds statement
/// nodes. Expressions are not parsed into trees; their tokens are captured as
/// text.
///
/// # Responsibilities
/// - Converts tokens into `Program` and `Statement` nodes.
/// - Drops tokens that begin no statement.
/// - Reports input that ends in the middle of a statement.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum of numbers and text.
/// - Formats values for printing.
pub mod value;
