use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Characters that split expression text into operands.
const ARITHMETIC_OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// An arithmetic operator found in expression text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithmeticOperator {
    /// Maps `+ - * /` to an operator.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl Context {
    /// Evaluates expression text.
    ///
    /// Text without `+ - * /` is a single token and goes through
    /// [`Context::eval_token`]. Otherwise the text is split at every
    /// arithmetic operator and the operands are folded strictly from left to
    /// right. There is no precedence: `2 + 3 * 4` is `(2 + 3) * 4`, which is
    /// `20`, while the same text in generated code follows the target
    /// language's precedence rules and gives `14`.
    ///
    /// An empty leading operand, as in `- 5`, counts as `0`.
    ///
    /// # Parameters
    /// - `text`: Expression text as stored in the syntax tree.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` from [`apply_arithmetic`].
    ///
    /// # Example
    /// ```
    /// use maano::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let ctx = Context::new();
    ///
    /// assert_eq!(ctx.eval_expression("2 + 3 * 4", 1).unwrap(), Value::Number(20.0));
    /// ```
    pub fn eval_expression(&self, text: &str, line: usize) -> EvalResult<Value> {
        if !text.contains(ARITHMETIC_OPERATORS) {
            return Ok(self.eval_token(text.trim()));
        }

        let (first, steps) = split_arithmetic(text);

        let mut result = if first.is_empty() {
            Value::Number(0.0)
        } else {
            self.eval_token(first)
        };

        for (op, operand) in steps {
            result = apply_arithmetic(op, result, self.eval_token(operand), line)?;
        }

        Ok(result)
    }

    /// Evaluates a single token of expression text.
    ///
    /// Text that parses as a finite number is that number. Otherwise, a bound
    /// variable of that name yields its value, and anything else yields the
    /// text itself. Evaluating a token never fails: an unbound identifier
    /// evaluates to its own name.
    ///
    /// # Example
    /// ```
    /// use maano::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// ctx.variables.insert("x".into(), Value::Number(7.0));
    ///
    /// assert_eq!(ctx.eval_token("2.5"), Value::Number(2.5));
    /// assert_eq!(ctx.eval_token("x"), Value::Number(7.0));
    /// assert_eq!(ctx.eval_token("y"), Value::Text("y".into()));
    /// ```
    #[must_use]
    pub fn eval_token(&self, text: &str) -> Value {
        if let Ok(number) = text.parse::<f64>()
           && number.is_finite()
        {
            return Value::Number(number);
        }

        self.get_variable(text)
            .cloned()
            .unwrap_or_else(|| Value::Text(text.to_string()))
    }
}

/// Splits expression text into its first operand and the following
/// `(operator, operand)` pairs. Operands are trimmed.
fn split_arithmetic(text: &str) -> (&str, Vec<(ArithmeticOperator, &str)>) {
    let mut operands = Vec::new();
    let mut operators = Vec::new();
    let mut start = 0;

    for (index, symbol) in text.match_indices(ARITHMETIC_OPERATORS) {
        operands.push(text[start..index].trim());
        operators.extend(symbol.chars().filter_map(ArithmeticOperator::from_char));
        start = index + symbol.len();
    }
    operands.push(text[start..].trim());

    let mut operands = operands.into_iter();
    let first = operands.next().unwrap_or_default();

    (first, operators.into_iter().zip(operands).collect())
}

/// Applies one arithmetic step.
///
/// Two numbers combine as `f64`, so dividing by zero gives an infinity or
/// `NaN` rather than an error. `+` with a text operand concatenates the
/// display forms of both sides. Any other operator on text is a type error.
///
/// # Errors
/// Returns `RuntimeError::TypeError` for `-`, `*` or `/` with a text operand.
///
/// # Example
/// ```
/// use maano::interpreter::{
///     evaluator::expression::{ArithmeticOperator, apply_arithmetic},
///     value::core::Value,
/// };
///
/// let sum = apply_arithmetic(ArithmeticOperator::Add, 2.0.into(), 3.0.into(), 1).unwrap();
/// assert_eq!(sum, Value::Number(5.0));
///
/// let joined = apply_arithmetic(ArithmeticOperator::Add, "y".into(), 1.0.into(), 1).unwrap();
/// assert_eq!(joined, Value::Text("y1".into()));
///
/// let quotient = apply_arithmetic(ArithmeticOperator::Div, 1.0.into(), 0.0.into(), 1).unwrap();
/// assert_eq!(quotient, Value::Number(f64::INFINITY));
///
/// assert!(apply_arithmetic(ArithmeticOperator::Mul, "y".into(), 2.0.into(), 1).is_err());
/// ```
pub fn apply_arithmetic(op: ArithmeticOperator,
                        left: Value,
                        right: Value,
                        line: usize)
                        -> EvalResult<Value> {
    match (op, left, right) {
        (op, Value::Number(l), Value::Number(r)) => Ok(Value::Number(match op {
                                                                   ArithmeticOperator::Add => l + r,
                                                                   ArithmeticOperator::Sub => l - r,
                                                                   ArithmeticOperator::Mul => l * r,
                                                                   ArithmeticOperator::Div => l / r,
                                                               })),
        (ArithmeticOperator::Add, l, r) => Ok(Value::Text(format!("{l}{r}"))),
        (op, l, r) => {
            Err(RuntimeError::TypeError { details: format!("cannot apply '{}' to {} and {}",
                                                           op.symbol(),
                                                           l.type_name(),
                                                           r.type_name()),
                                          line })
        },
    }
}
