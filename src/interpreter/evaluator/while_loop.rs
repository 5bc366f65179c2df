use tracing::warn;

use crate::{
    ast::{Condition, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Upper bound on the iterations of a single `jabtak` loop.
pub const MAX_LOOP_ITERATIONS: usize = 1000;

impl Context {
    /// Executes a `jabtak` loop.
    ///
    /// The condition is checked before every iteration and the body runs
    /// while it holds. After [`MAX_LOOP_ITERATIONS`] iterations the loop
    /// stops even if the condition still holds; this is not an error, and
    /// execution continues with the next statement.
    ///
    /// # Parameters
    /// - `condition`: The loop condition.
    /// - `body`: Statements run on every iteration.
    /// - `line`: Line number of the loop, for diagnostics.
    ///
    /// # Errors
    /// Propagates errors from the condition or the body.
    ///
    /// # Example
    /// ```
    /// use maano::interpreter::{
    ///     evaluator::{core::execute, while_loop::MAX_LOOP_ITERATIONS},
    ///     lexer::lex,
    ///     parser::core::parse,
    /// };
    ///
    /// let program = parse(&lex(r#"jabtak 1 < 2 { likho "again" }"#)).unwrap();
    /// let output = execute(&program).unwrap();
    ///
    /// assert_eq!(output.lines().count(), MAX_LOOP_ITERATIONS);
    /// ```
    pub fn exec_loop(&mut self,
                     condition: &Condition,
                     body: &[Statement],
                     line: usize)
                     -> EvalResult<()> {
        let mut iterations = 0;

        while self.eval_condition(condition, line)? {
            if iterations == MAX_LOOP_ITERATIONS {
                warn!(line, iterations, "loop stopped at the iteration limit");
                break;
            }

            self.exec_block(body)?;
            iterations += 1;
        }

        Ok(())
    }
}
