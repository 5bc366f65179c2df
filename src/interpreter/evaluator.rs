/// Core evaluation logic and context management.
///
/// Contains the runtime context, statement execution and the `execute` entry
/// point.
pub mod core;

/// Expression evaluation.
///
/// Evaluates expression text by strict left to right folding and resolves
/// single tokens to numbers, variable values or literal text.
pub mod expression;

/// Condition evaluation.
///
/// Compares the two atomic operands of an `agar` or `jabtak` condition.
pub mod comparison;

/// Evaluation of `jabtak` loops.
///
/// Runs the loop body while its condition holds, up to a fixed iteration cap.
pub mod while_loop;
