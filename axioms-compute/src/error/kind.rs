use ariadne::Fmt;
use axioms_attrs::ErrorKind;
use axioms_error::{ErrorKind, EXPR};

/// The variable to solve for does not appear in the expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` does not appear in the expression", name),
    help = if suggestions.is_empty() {
        "arguments of function calls are not searched for variables".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean `{}`?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these variables? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownVariable {
    /// The name of the variable.
    pub name: String,

    /// Variables in the expression with a similar name, if any.
    pub suggestions: Vec<String>,
}

/// An operator between the root of the expression and the variable has no inverse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot invert the `{}` operator", op),
    help = "only arithmetic operators and the named functions can be inverted",
)]
pub struct NoInverse {
    /// The operator that could not be inverted.
    pub op: String,
}

/// An operator in the expression has no derivative rule.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}`", op),
    help = "only arithmetic operators and the named functions can be differentiated",
)]
pub struct NoDerivativeRule {
    /// The operator, or name of the function, that could not be differentiated.
    pub op: String,
}

/// Both sides of an equation evaluated to different values.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "both sides of the equation are not equal",
    help = format!("the left side is `{}`, but the right side is `{}`", left.fg(EXPR), right.fg(EXPR)),
)]
pub struct UnequalSides {
    /// The value of the left side.
    pub left: String,

    /// The value of the right side.
    pub right: String,
}

/// Zero was raised to the power of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "`0^0` is undefined",
    help = "zero to the power of zero has no agreed-upon value",
)]
pub struct ZeroToZero;

/// An operator was applied to values of the wrong type, such as `1.5 & 2`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to {}", op, operands),
)]
pub struct InvalidOperands {
    /// The operator that was used.
    pub op: String,

    /// A description of the operand types, such as "`Float` and `Integer`".
    pub operands: String,
}
