use std::cmp::Ordering;

use crate::{
    ast::Condition,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the condition of an `agar` or `jabtak`.
    ///
    /// Both operands are atomic and are resolved with [`Context::eval_token`],
    /// exactly like an operand of expression text. Operands are never
    /// evaluated as expressions.
    ///
    /// # Parameters
    /// - `condition`: The parsed comparison.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownComparator` if the operator is not a
    /// comparison.
    pub fn eval_condition(&self, condition: &Condition, line: usize) -> EvalResult<bool> {
        let left = self.eval_token(&condition.left.to_string());
        let right = self.eval_token(&condition.right.to_string());

        compare(&condition.operator, &left, &right, line)
    }
}

/// Compares two values with one of `< > <= >= == !=`.
///
/// Numbers compare numerically and text compares lexicographically. A number
/// and a piece of text are never equal and never ordered, so only `!=` holds
/// between them. `NaN` behaves the same way.
///
/// # Errors
/// Returns `RuntimeError::UnknownComparator` for any other operator.
///
/// # Example
/// ```
/// use maano::interpreter::{evaluator::comparison::compare, value::core::Value};
///
/// assert!(compare("<", &Value::Number(1.0), &Value::Number(2.0), 1).unwrap());
/// assert!(compare("!=", &Value::Number(1.0), &Value::from("a"), 1).unwrap());
/// assert!(!compare(">=", &Value::Number(1.0), &Value::from("a"), 1).unwrap());
/// assert!(compare("+", &Value::Number(1.0), &Value::Number(2.0), 1).is_err());
/// ```
pub fn compare(operator: &str, left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    let ordering = match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.partial_cmp(r),
        (Value::Text(l), Value::Text(r)) => Some(l.cmp(r)),
        _ => None,
    };

    match operator {
        "==" => Ok(ordering == Some(Ordering::Equal)),
        "!=" => Ok(ordering != Some(Ordering::Equal)),
        "<" => Ok(ordering == Some(Ordering::Less)),
        "<=" => Ok(matches!(ordering, Some(Ordering::Less | Ordering::Equal))),
        ">" => Ok(ordering == Some(Ordering::Greater)),
        ">=" => Ok(matches!(ordering, Some(Ordering::Greater | Ordering::Equal))),
        _ => Err(RuntimeError::UnknownComparator { operator: operator.to_string(),
                                                   line }),
    }
}
