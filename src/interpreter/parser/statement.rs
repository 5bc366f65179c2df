use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_condition},
        },
    },
};

/// Parses a single statement.
///
/// The first token is always consumed and decides the rule:
/// - `maano` starts a declaration.
/// - an identifier followed by `=` is an assignment.
/// - `likho` starts a print.
/// - `agar` starts a conditional.
/// - `jabtak` starts a loop.
///
/// Any other token, including an identifier that is not followed by `=`,
/// produces no statement and is dropped.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// - `Ok(Some(statement))` if a statement was parsed,
/// - `Ok(None)` if the token was dropped or the input was empty.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = tokens.next() else {
        return Ok(None);
    };
    let line = *line;

    match token {
        Token::Keyword(Keyword::Maano) => parse_declaration(tokens, line).map(Some),
        Token::Identifier(name) => Ok(parse_assignment(tokens, name, line)),
        Token::Keyword(Keyword::Likho) => parse_print(tokens, line).map(Some),
        Token::Keyword(Keyword::Agar) => parse_conditional(tokens, line).map(Some),
        Token::Keyword(Keyword::Jabtak) => parse_loop(tokens, line).map(Some),
        _ => {
            trace!(%token, line, "dropping token outside any statement");
            Ok(None)
        },
    }
}

/// Parses `maano <name> = <expression>` after the `maano` keyword.
///
/// The token in the `=` position is consumed without being checked.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = expect_token(tokens, "a variable name after 'maano'", line)?.to_string();
    expect_token(tokens, "'=' after the variable name", line)?;
    let value = parse_expression(tokens);

    Ok(Statement::Declaration { name, value, line })
}

/// Parses `<name> = <expression>` after the identifier.
///
/// Returns `None` without consuming anything when the next token is not `=`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, name: &str, line: usize) -> Option<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if tokens.next_if(|(token, _)| token.has_value("=")).is_none() {
        trace!(name, line, "dropping identifier without assignment");
        return None;
    }

    let value = parse_expression(tokens);

    Some(Statement::Assignment { name: name.to_string(),
                                 value,
                                 line })
}

/// Parses `likho <value>` after the keyword.
///
/// Exactly one token is taken. A string token prints its text; any other
/// token prints the value of its text, so `likho x + 1` prints `x` and leaves
/// `+ 1` to be dropped.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if no token follows.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let token = expect_token(tokens, "a value after 'likho'", line)?;

    Ok(Statement::Print { is_string: matches!(token, Token::String(_)),
                          value: token.to_string(),
                          line })
}

/// Parses `agar <cond> { ... }` with an optional `warna { ... }`.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if the condition, an opening
/// brace, or a closing brace is missing.
fn parse_conditional<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let condition = parse_condition(tokens, line)?;
    expect_token(tokens, "'{' after the condition", line)?;
    let body = parse_block(tokens, line)?;

    let else_body = if tokens.next_if(|(token, _)| token.has_value(Keyword::Warna.as_str()))
                             .is_some()
    {
        expect_token(tokens, "'{' after 'warna'", line)?;
        parse_block(tokens, line)?
    } else {
        Vec::new()
    };

    Ok(Statement::Conditional { condition,
                                body,
                                else_body,
                                line })
}

/// Parses `jabtak <cond> { ... }` after the keyword.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if the condition, the opening
/// brace, or the closing brace is missing.
fn parse_loop<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let condition = parse_condition(tokens, line)?;
    expect_token(tokens, "'{' after the condition", line)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::Loop { condition,
                         body,
                         line })
}
