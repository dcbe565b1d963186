//! Chain rules for the named functions.

use axioms_parser::parser::{ast::Node, token::op::UnaryOpKind};
use crate::error::{kind::NoDerivativeRule, Error};

fn unary(op: UnaryOpKind, operand: &Node) -> Node {
    Node::unary(op, operand.clone())
}

/// `(1 - f^2)^0.5`, found in the derivatives of `asin` and `acos`.
fn one_minus_square_root(f: &Node) -> Node {
    Node::pow(
        Node::sub(Node::int(1), Node::pow(f.clone(), Node::int(2))),
        Node::float(0.5),
    )
}

/// Differentiates `op(f)`, given `f` and its derivative `df`.
pub(crate) fn chain_rule(op: UnaryOpKind, f: &Node, df: Node) -> Result<Node, Error> {
    use UnaryOpKind::*;

    Ok(match op {
        // f' * cos(f)
        Sin => Node::mul(df, unary(Cos, f)),

        // (-1 * f') * sin(f)
        Cos => Node::mul(Node::mul(Node::int(-1), df), unary(Sin, f)),

        // f' * sec(f)^2
        Tan => Node::mul(df, Node::pow(unary(Sec, f), Node::int(2))),

        // -1 * (f' * (csc(f) * cot(f)))
        Csc => Node::mul(
            Node::int(-1),
            Node::mul(df, Node::mul(unary(Csc, f), unary(Cot, f))),
        ),

        // f' * (sec(f) * tan(f))
        Sec => Node::mul(df, Node::mul(unary(Sec, f), unary(Tan, f))),

        // -1 * (f' * csc(f)^2)
        Cot => Node::mul(
            Node::int(-1),
            Node::mul(df, Node::pow(unary(Csc, f), Node::int(2))),
        ),

        // f' / (1 - f^2)^0.5
        Asin => Node::div(df, one_minus_square_root(f)),

        // (-1 * f') / (1 - f^2)^0.5
        Acos => Node::div(Node::mul(Node::int(-1), df), one_minus_square_root(f)),

        // f' / (1 + f^2)
        Atan => Node::div(df, Node::add(Node::int(1), Node::pow(f.clone(), Node::int(2)))),

        // f' * exp(f)
        Exp => Node::mul(df, unary(Exp, f)),

        // f' / f
        Ln => Node::div(df, f.clone()),

        Not => return Err(Error::differentiation(NoDerivativeRule { op: op.to_string() })),
    })
}
