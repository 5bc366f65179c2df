use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::statement::parse_statement,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a [`Program`].
///
/// Statements are parsed until the tokens run out. Tokens that do not start a
/// statement are consumed and dropped, so stray input never stops the parse;
/// only a construct that runs past the end of the input is an error.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if a statement needs more tokens
/// than remain.
///
/// # Example
/// ```
/// use maano::{
///     ast::Statement,
///     interpreter::{lexer::lex, parser::core::parse},
/// };
///
/// let program = parse(&lex("maano x = 5 likho x")).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// assert!(matches!(&program.body[0], Statement::Declaration { name, value, .. }
///                  if name == "x" && value == "5"));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut body = Vec::new();

    while iter.peek().is_some() {
        if let Some(statement) = parse_statement(&mut iter)? {
            body.push(statement);
        }
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}

/// Collects expression text.
///
/// Consumes operator, identifier and number tokens for as long as they
/// continue and joins their values with single spaces. No structure is
/// built: `2 + 3 * 4` becomes the text `"2 + 3 * 4"`. Stops, without
/// consuming, at the first token of any other kind or at the end of input, so
/// the result may be empty.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the expression.
///
/// # Returns
/// The expression text.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> String
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut parts = Vec::new();

    while let Some((token, _)) = tokens.next_if(|(token, _)| {
                                            matches!(token.kind(),
                                                     TokenKind::Operator
                                                     | TokenKind::Identifier
                                                     | TokenKind::Number)
                                        })
    {
        parts.push(token.to_string());
    }

    parts.join(" ")
}
