use std::{fmt, str::FromStr};

use crate::error::TargetError;

/// Indentation added to each nesting level of Python output.
const PYTHON_INDENT: &str = "    ";

/// A code generation target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// JavaScript, tag `js`.
    Js,
    /// C++, tag `cpp`.
    Cpp,
    /// C, tag `c`.
    C,
    /// Java, tag `java`.
    Java,
    /// Python, tag `python`.
    Python,
}

impl Target {
    /// Every target, in tag order.
    pub const ALL: [Self; 5] = [Self::Js, Self::Cpp, Self::C, Self::Java, Self::Python];

    /// Returns the tag that selects this target.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Java => "java",
            Self::Python => "python",
        }
    }

    /// Renders a variable declaration.
    ///
    /// The C family always declares an `int`, whatever the expression
    /// evaluates to. JavaScript uses `let` and Python a bare assignment.
    #[must_use]
    pub fn declaration(self, name: &str, value: &str) -> String {
        match self {
            Self::Js => format!("let {name} = {value};"),
            Self::Cpp | Self::C | Self::Java => format!("int {name} = {value};"),
            Self::Python => format!("{name} = {value}"),
        }
    }

    /// Renders an assignment.
    ///
    /// Identical for every target, Python included, which therefore gets a
    /// trailing `;` as well.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn assignment(self, name: &str, value: &str) -> String {
        format!("{name} = {value};")
    }

    /// Renders a print of literal text, which is emitted quoted.
    #[must_use]
    pub fn print_text(self, text: &str) -> String {
        match self {
            Self::Js => format!("console.log(\"{text}\");"),
            Self::Cpp => format!("std::cout << \"{text}\" << std::endl;"),
            Self::C => format!("printf(\"{text}\\n\");"),
            Self::Java => format!("System.out.println(\"{text}\");"),
            Self::Python => format!("print(\"{text}\")"),
        }
    }

    /// Renders a print of expression text, which is emitted unquoted.
    #[must_use]
    pub fn print_value(self, expression: &str) -> String {
        match self {
            Self::Js => format!("console.log({expression});"),
            Self::Cpp => format!("std::cout << {expression} << std::endl;"),
            Self::C => format!("printf(\"%d\\n\", {expression});"),
            Self::Java => format!("System.out.println({expression});"),
            Self::Python => format!("print({expression})"),
        }
    }

    /// Renders an `if` with an optional `else`.
    ///
    /// The `else` part is emitted only when `else_body` is not empty.
    #[must_use]
    pub fn conditional(self, condition: &str, body: &str, else_body: &str) -> String {
        match self {
            Self::Python => {
                let mut code = format!("if {condition}:{}", indent(body));
                if !else_body.is_empty() {
                    code.push_str("\nelse:");
                    code.push_str(&indent(else_body));
                }
                code
            },
            _ => {
                let mut code = format!("if ({condition}) {{\n{body}\n}}");
                if !else_body.is_empty() {
                    code.push_str(&format!(" else {{\n{else_body}\n}}"));
                }
                code
            },
        }
    }

    /// Renders a `while` loop.
    #[must_use]
    pub fn while_loop(self, condition: &str, body: &str) -> String {
        match self {
            Self::Python => format!("while {condition}:{}", indent(body)),
            _ => format!("while ({condition}) {{\n{body}\n}}"),
        }
    }
}

/// Indents a generated Python block by one level.
///
/// Every newline of `"\n" + block` becomes a newline followed by four spaces.
/// Nested blocks were already indented when they were generated, so each
/// enclosing level adds exactly one more level.
fn indent(block: &str) -> String {
    format!("\n{block}").replace('\n', &format!("\n{PYTHON_INDENT}"))
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Target {
    type Err = TargetError;

    /// Parses a target tag.
    ///
    /// # Example
    /// ```
    /// use maano::interpreter::codegen::target::Target;
    ///
    /// assert_eq!("python".parse::<Target>().unwrap(), Target::Python);
    /// assert!("rust".parse::<Target>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|target| target.tag() == s)
                 .ok_or_else(|| TargetError::UnknownTarget { name: s.to_string() })
    }
}
