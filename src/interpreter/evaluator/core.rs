use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Program, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state of a single run: one flat
/// namespace of variables and the output printed so far. A fresh context is
/// built for every [`execute`] call, so nothing leaks between runs.
pub struct Context {
    /// Variable bindings. Created by declarations, overwritten by
    /// assignments.
    pub variables: HashMap<String, Value>,
    /// Printed output, one line per print.
    output:        String,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no variables and no output.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               output:    String::new(), }
    }

    /// Executes statements in order, stopping at the first error.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.exec_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Declarations and assignments both bind the evaluated value, so an
    /// assignment to an undeclared name simply creates it. Prints append a
    /// line to the output. Conditionals and loops evaluate their condition
    /// with [`Context::eval_condition`].
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Returns the `RuntimeError` raised while evaluating an expression or a
    /// condition.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Declaration { name, value, line }
            | Statement::Assignment { name, value, line } => {
                let value = self.eval_expression(value, *line)?;
                self.variables.insert(name.clone(), value);
                Ok(())
            },
            Statement::Print { is_string: true,
                               value,
                               .. } => {
                self.print(value);
                Ok(())
            },
            Statement::Print { is_string: false,
                               value,
                               line, } => {
                let value = self.eval_expression(value, *line)?;
                self.print(&value.to_string());
                Ok(())
            },
            Statement::Conditional { condition,
                                     body,
                                     else_body,
                                     line, } => {
                if self.eval_condition(condition, *line)? {
                    self.exec_block(body)
                } else {
                    self.exec_block(else_body)
                }
            },
            Statement::Loop { condition,
                              body,
                              line, } => self.exec_loop(condition, body, *line),
        }
    }

    /// Returns the current value of a variable, if it is bound.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Appends one line of output.
    pub fn print(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Consumes the context and returns its output with trailing whitespace
    /// removed.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output.trim_end().to_string()
    }
}

/// Runs a program and returns everything it printed.
///
/// Lines are separated by `\n` and trailing whitespace is trimmed. The
/// program is executed directly from the syntax tree in a fresh
/// [`Context`].
///
/// # Errors
/// Returns a `RuntimeError` if any statement fails. No partial output is
/// returned in that case.
///
/// # Example
/// ```
/// use maano::interpreter::{evaluator::core::execute, lexer::lex, parser::core::parse};
///
/// let program = parse(&lex("maano a = 0 jabtak a < 3 { likho a  a = a + 1 }")).unwrap();
///
/// assert_eq!(execute(&program).unwrap(), "0\n1\n2");
/// ```
pub fn execute(program: &Program) -> EvalResult<String> {
    let mut context = Context::new();
    context.exec_block(&program.body)?;

    let output = context.into_output();
    debug!(lines = output.lines().count(), "executed program");
    Ok(output)
}
