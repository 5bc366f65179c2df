use std::fmt;

use crate::interpreter::lexer::Token;

/// The root of a parsed program: its statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top level statements.
    pub body: Vec<Statement>,
}

/// A comparison between two atomic operands, as written after `agar` or
/// `jabtak`.
///
/// The operands are kept as the raw tokens the parser consumed. The operator
/// is one of `<`, `>`, `<=`, `>=`, `==`, `!=` in a well formed program, but the
/// parser does not check this; the evaluator rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left operand, a number or an identifier.
    pub left:     Token,
    /// Comparison operator text.
    pub operator: String,
    /// Right operand, a number or an identifier.
    pub right:    Token,
}

/// Renders the condition as `left operator right` using the raw token values.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// A statement node.
///
/// Expressions are not trees: `value` fields hold the expression text, the
/// consumed operator, identifier and number lexemes joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `maano name = value`
    Declaration {
        /// The declared variable.
        name:  String,
        /// Expression text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name = value`
    Assignment {
        /// The assigned variable.
        name:  String,
        /// Expression text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `likho "text"` or `likho expression`
    Print {
        /// `true` when `value` is the contents of a string literal, `false`
        /// when it is expression text.
        is_string: bool,
        /// Literal text or expression text.
        value:     String,
        /// Line number in the source code.
        line:      usize,
    },
    /// `agar cond { body } warna { else_body }`
    Conditional {
        /// The tested comparison.
        condition: Condition,
        /// Statements run when the condition holds.
        body:      Vec<Self>,
        /// Statements run otherwise. Empty when there is no `warna`.
        else_body: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `jabtak cond { body }`
    Loop {
        /// The comparison checked before every iteration.
        condition: Condition,
        /// Statements run on every iteration.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Returns the source line the statement starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Declaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::Conditional { line, .. }
            | Self::Loop { line, .. } => *line,
        }
    }
}
