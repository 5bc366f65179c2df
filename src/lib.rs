//! # maano
//!
//! maano is a tiny teaching language with the keywords `maano` (declare),
//! `likho` (print), `agar`/`warna` (if/else) and `jabtak` (while).
//! Programs are lexed, parsed into a syntax tree, and then both translated to
//! JavaScript, C++, C, Java or Python and executed directly by a tree-walking
//! interpreter.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the structure of parsed code.
///
/// This module declares `Program`, `Statement` and `Condition`, the syntax
/// tree built by the parser. The tree is read by both the code generator and
/// the evaluator and is never modified after parsing.
///
/// # Responsibilities
/// - Defines one node type per statement kind.
/// - Records the source line of every statement for error reporting.
pub mod ast;
/// Provides unified error types for parsing, evaluation and target selection.
///
/// # Responsibilities
/// - Defines error enums for each failure mode.
/// - Attaches line numbers and detailed messages for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the pipeline from source text to output.
///
/// This module ties together lexing, parsing, code generation and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates the four stages: lexer, parser, code generator, evaluator.
/// - Provides entry points for each stage.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Convert integer literals to `f64` without silent data loss.
/// - Format numbers for program output.
pub mod util;

pub use crate::interpreter::{
    codegen::{core::generate, target::Target},
    evaluator::core::execute,
    lexer::lex,
    parser::core::parse,
};

/// The result of running a program through the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The program rendered in the requested target language.
    pub code:   String,
    /// Everything the program printed, with trailing whitespace trimmed.
    pub output: String,
}

/// Translates and runs a program.
///
/// The source is lexed and parsed once. The resulting tree is rendered in
/// `target` and, independently, executed by the interpreter. Either every
/// stage succeeds or nothing is returned.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use maano::{Target, translate};
///
/// let result = translate("maano x = 5 likho x", Target::Java).unwrap();
///
/// assert_eq!(result.code, "int x = 5;\nSystem.out.println(x);");
/// assert_eq!(result.output, "5");
///
/// // Arithmetic on text fails at runtime.
/// assert!(translate("maano x = hello * 2", Target::Js).is_err());
/// ```
pub fn translate(source: &str, target: Target) -> Result<Translation, Box<dyn std::error::Error>> {
    let program = parse(&lex(source))?;

    let code = generate(&program, target);
    let output = execute(&program)?;

    debug!(%target, "translated program");
    Ok(Translation { code, output })
}

/// Generates code without executing the program.
///
/// # Errors
/// Returns an error if parsing fails.
pub fn transpile(source: &str, target: Target) -> Result<String, Box<dyn std::error::Error>> {
    let program = parse(&lex(source))?;
    Ok(generate(&program, target))
}

/// Executes a program without generating code.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use maano::run;
///
/// assert_eq!(run(r#"agar 1 < 2 { likho "yes" } warna { likho "no" }"#).unwrap(), "yes");
/// ```
pub fn run(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let program = parse(&lex(source))?;
    Ok(execute(&program)?)
}
