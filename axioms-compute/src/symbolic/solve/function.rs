//! Inverses of the named functions.

use axioms_parser::parser::{ast::Node, token::op::UnaryOpKind};

/// Given the value `acc` of `op(f)`, returns an expression for the value of `f`.
///
/// Only the principal branch of each inverse is returned.
pub(crate) fn invert(op: UnaryOpKind, acc: Node) -> Node {
    use UnaryOpKind::*;

    let reciprocal = |acc| Node::div(Node::int(1), acc);
    match op {
        Sin => Node::unary(Asin, acc),
        Cos => Node::unary(Acos, acc),
        Tan => Node::unary(Atan, acc),
        Csc => Node::unary(Asin, reciprocal(acc)),
        Sec => Node::unary(Acos, reciprocal(acc)),
        Cot => Node::unary(Atan, reciprocal(acc)),
        Asin => Node::unary(Sin, acc),
        Acos => Node::unary(Cos, acc),
        Atan => Node::unary(Tan, acc),
        Ln => Node::unary(Exp, acc),
        Exp => Node::unary(Ln, acc),
        Not => Node::unary(Not, acc),
    }
}
