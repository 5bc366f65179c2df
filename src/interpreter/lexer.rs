use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Anything that matches none of the variants below is skipped by [`lex`]
/// without producing a token.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Double quoted text such as `"hello"`.
    ///
    /// The value excludes the quotes. A string without a closing quote runs
    /// to the end of the input.
    #[regex(r#""[^"]*"?"#, parse_string, allow_greedy = true)]
    String(String),
    /// One of the reserved words `maano`, `likho`, `agar`, `warna`, `jabtak`.
    #[token("maano", |_| Keyword::Maano)]
    #[token("likho", |_| Keyword::Likho)]
    #[token("agar", |_| Keyword::Agar)]
    #[token("warna", |_| Keyword::Warna)]
    #[token("jabtak", |_| Keyword::Jabtak)]
    Keyword(Keyword),
    /// A run of ASCII letters that is not a keyword, such as `x` or `total`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A run of ASCII digits, such as `42`, kept as written.
    ///
    /// The digits are not converted here, so a run of any length stays one
    /// token and its value is decided when it is evaluated.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+ - * / = < > !`, each optionally followed by `=`.
    #[regex(r"[-+*/=<>!]=?", |lex| lex.slice().to_string())]
    Operator(String),
    /// `{` or `}`.
    #[token("{", |_| '{')]
    #[token("}", |_| '}')]
    Brace(char),

    /// `\n`
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces.
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// The reserved words of the language.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    /// `maano`, declares a variable.
    Maano,
    /// `likho`, prints a string or a value.
    Likho,
    /// `agar`, opens a conditional.
    Agar,
    /// `warna`, introduces the else branch of a conditional.
    Warna,
    /// `jabtak`, opens a loop.
    Jabtak,
}

impl Keyword {
    /// Returns the source spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maano => "maano",
            Self::Likho => "likho",
            Self::Agar => "agar",
            Self::Warna => "warna",
            Self::Jabtak => "jabtak",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of a [`Token`], without its value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    String,
    Keyword,
    Identifier,
    Number,
    Operator,
    Brace,
    /// Never produced by [`lex`]; newlines and spaces are skipped.
    Whitespace,
}

impl Token {
    /// Returns the category of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::String(_) => TokenKind::String,
            Self::Keyword(_) => TokenKind::Keyword,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Number(_) => TokenKind::Number,
            Self::Operator(_) => TokenKind::Operator,
            Self::Brace(_) => TokenKind::Brace,
            Self::NewLine | Self::Ignored => TokenKind::Whitespace,
        }
    }

    /// Returns `true` if the raw value of this token is exactly `text`,
    /// whatever its kind.
    #[must_use]
    pub fn has_value(&self, text: &str) -> bool {
        match self {
            Self::String(s) | Self::Identifier(s) | Self::Number(s) | Self::Operator(s) => {
                s == text
            },
            Self::Keyword(k) => k.as_str() == text,
            _ => self.to_string() == text,
        }
    }
}

/// Writes the raw value of the token: string contents without quotes, the
/// keyword or identifier text, the digits, the operator or the brace.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Identifier(s) | Self::Number(s) | Self::Operator(s) => {
                f.write_str(s)
            },
            Self::Keyword(k) => write!(f, "{k}"),
            Self::Brace(c) => write!(f, "{c}"),
            Self::NewLine => f.write_str("\n"),
            Self::Ignored => f.write_str(" "),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits source text into tokens, each paired with the line it ends on.
///
/// Lexing never fails. Characters that start no token, such as tabs,
/// punctuation or non-ASCII letters, are dropped.
///
/// # Example
/// ```
/// use maano::interpreter::lexer::{Keyword, Token, lex};
///
/// let tokens: Vec<Token> = lex("maano x = 5").into_iter().map(|(t, _)| t).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Keyword(Keyword::Maano),
///                 Token::Identifier("x".into()),
///                 Token::Operator("=".into()),
///                 Token::Number("5".into())]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => trace!(slice = lexer.slice(), line = lexer.extras.line, "skipping input"),
        }
    }

    debug!(tokens = tokens.len(), "lexed source");
    tokens
}

/// Strips the quotes from a string literal and counts the newlines it spans.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    let inner = &slice[1..];
    inner.strip_suffix('"').unwrap_or(inner).to_string()
}
