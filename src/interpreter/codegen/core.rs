use tracing::debug;

use crate::{
    ast::{Program, Statement},
    interpreter::codegen::target::Target,
};

/// Renders a program as source text in the target language.
///
/// Statements are rendered in order and joined by newlines. Generation
/// cannot fail: the target has already been validated and every statement
/// kind has a rendering for every target.
///
/// Expression text is copied verbatim, so the target language applies its
/// own operator precedence to it. The interpreter does not, and the two can
/// disagree for expressions mixing `+`/`-` with `*`/`/`.
///
/// # Example
/// ```
/// use maano::interpreter::{
///     codegen::{core::generate, target::Target},
///     lexer::lex,
///     parser::core::parse,
/// };
///
/// let program = parse(&lex("maano x = 5 likho x")).unwrap();
///
/// assert_eq!(generate(&program, Target::Js), "let x = 5;\nconsole.log(x);");
/// assert_eq!(generate(&program, Target::Python), "x = 5\nprint(x)");
/// ```
#[must_use]
pub fn generate(program: &Program, target: Target) -> String {
    let code = generate_block(&program.body, target);
    debug!(%target, bytes = code.len(), "generated code");
    code
}

/// Renders a sequence of statements, one per line.
#[must_use]
pub fn generate_block(statements: &[Statement], target: Target) -> String {
    statements.iter()
              .map(|statement| generate_statement(statement, target))
              .collect::<Vec<_>>()
              .join("\n")
}

/// Renders a single statement, recursing into nested blocks.
///
/// Conditions are always written `left operator right` from the raw token
/// values; every target accepts that form.
#[must_use]
pub fn generate_statement(statement: &Statement, target: Target) -> String {
    match statement {
        Statement::Declaration { name, value, .. } => target.declaration(name, value),
        Statement::Assignment { name, value, .. } => target.assignment(name, value),
        Statement::Print { is_string: true,
                           value,
                           .. } => target.print_text(value),
        Statement::Print { is_string: false,
                           value,
                           .. } => target.print_value(value),
        Statement::Conditional { condition,
                                 body,
                                 else_body,
                                 .. } => target.conditional(&condition.to_string(),
                                                            &generate_block(body, target),
                                                            &generate_block(else_body, target)),
        Statement::Loop { condition, body, .. } => {
            target.while_loop(&condition.to_string(), &generate_block(body, target))
        },
    }
}
