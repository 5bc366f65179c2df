use std::iter::Peekable;

use crate::{
    ast::Condition,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, whatever it is.
///
/// The grammar names what it expects at each position (a name, `=`, `{`), but
/// the token found there is taken as is; only its absence is an error.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `expected`: Description of the awaited token, used in the error.
/// - `line`: Line number of the enclosing statement.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if no tokens remain.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &'static str,
                                                          line: usize)
                                                          -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next()
          .map(|(token, _)| token)
          .ok_or(ParseError::UnexpectedEndOfInput { expected, line })
}

/// Parses the `left operator right` comparison of `agar` and `jabtak`.
///
/// Exactly three tokens are consumed. Their kinds are not checked.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if fewer than three tokens
/// remain.
pub(in crate::interpreter::parser) fn parse_condition<'a, I>(tokens: &mut Peekable<I>,
                                                             line: usize)
                                                             -> ParseResult<Condition>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = expect_token(tokens, "a left operand", line)?.clone();
    let operator = expect_token(tokens, "a comparison operator", line)?.to_string();
    let right = expect_token(tokens, "a right operand", line)?.clone();

    Ok(Condition { left,
                   operator,
                   right })
}
