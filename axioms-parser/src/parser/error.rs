//! Errors that can occur while parsing an expression.
//!
//! Each kind of error is its own struct implementing [`ErrorKind`]; the parser wraps them in an
//! [`Error`] along with the spans of source code they point to.

use ariadne::Fmt;
use axioms_attrs::ErrorKind;
use axioms_error::{ErrorKind, EXPR};

pub use axioms_error::Error;

/// A parenthesis was never closed, or a closing parenthesis has no opening partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = [if *opening {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching opening parenthesis"
    }],
    help = if *opening {
        format!("add a closing {} after the expression", ")".fg(EXPR))
    } else {
        format!("remove this {} or add an opening {} before it", ")".fg(EXPR), "(".fg(EXPR))
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the unmatched parenthesis is an opening parenthesis.
    pub opening: bool,
}

/// A pair of parentheses contains nothing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = ["there is nothing inside these parentheses"],
    help = format!("add an {} between the parentheses", "expression".fg(EXPR)),
)]
pub struct EmptyParenthesis;

/// The input contains no expression at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    help = "there is nothing to parse",
)]
pub struct EmptyExpression;

/// An operator is missing one of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing operand for `{}`", op),
    labels = [format!("this operator needs an {} on both sides", "expression".fg(EXPR))],
)]
pub struct MissingOperand {
    /// The operator that is missing an operand.
    pub op: String,
}

/// Two expressions are next to each other without an operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = ["this expression does not follow an operator"],
    help = format!("multiplication must be written explicitly, like `{}`", "2*x".fg(EXPR)),
)]
pub struct MissingOperator;

/// Two binary operators are adjacent, such as in `2^-x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "ambiguous precedence",
    labels = [format!("`{}` directly follows `{}`", second, first)],
    help = format!("use parentheses to make the meaning clear, like `{}`", "2^(-x)".fg(EXPR)),
)]
pub struct AmbiguousPrecedence {
    /// The first of the two operators.
    pub first: String,

    /// The second of the two operators.
    pub second: String,
}

/// A word containing a `.` is not a valid decimal number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("malformed number `{}`", lexeme),
    labels = ["this is not a valid number"],
    help = format!("decimal numbers need digits on both sides of the point, like `{}`", "0.5".fg(EXPR)),
)]
pub struct MalformedNumber {
    /// The malformed word.
    pub lexeme: String,
}

/// An identifier starts with a digit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid identifier `{}`", name),
    labels = ["identifiers cannot start with a digit"],
    help = format!("if you meant to multiply, write it explicitly, like `{}`", "2*x".fg(EXPR)),
)]
pub struct InvalidIdentifier {
    /// The invalid identifier.
    pub name: String,
}

/// A character that is not part of any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", symbol),
    labels = ["I do not know what this character means"],
)]
pub struct InvalidCharacter {
    /// The invalid character.
    pub symbol: String,
}

/// A comma appears outside of a function call's argument list.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected comma",
    labels = ["commas can only separate the arguments of a function call"],
)]
pub struct UnexpectedComma;
