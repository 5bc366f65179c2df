use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses the statements of a block.
///
/// Statements are parsed until the next token is a brace, which is consumed
/// as the closing delimiter. Any brace ends the block, `{` included. The
/// opening brace must already have been consumed by the caller.
///
/// Grammar: `block := statement* brace`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the statement owning the block.
///
/// # Returns
/// The statements of the block in source order.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if the input ends before a
/// closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::Brace(_), _)) => {
                tokens.next();
                break;
            },
            Some(_) => {
                if let Some(statement) = parse_statement(tokens)? {
                    statements.push(statement);
                }
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'}' to close the block",
                                                              line });
            },
        }
    }

    Ok(statements)
}
