//! Serialization of expression trees back into source code.
//!
//! The output uses the minimum number of parentheses needed for [`crate::parser::parse`] to
//! rebuild a structurally equal tree, deciding where they go from the same precedence table the
//! parser splits on.

use crate::parser::{
    ast::node::{Direction, Node},
    token::op::BinOpKind,
};
use std::fmt;

/// Formats a node, given whether it is the leftmost piece of its enclosing expression and
/// whether it is the base of a power.
fn fmt_node(f: &mut fmt::Formatter<'_>, node: &Node, leading: bool, power_base: bool) -> fmt::Result {
    match node {
        Node::Literal(lit) => {
            let text = lit.to_string();
            // `-2^2` and `x*-2` would parse differently
            if text.starts_with('-') && (!leading || power_base) {
                write!(f, "({})", text)
            } else {
                write!(f, "{}", text)
            }
        },
        Node::Symbol(name) => write!(f, "{}", name),
        Node::Call(name, args) => write!(f, "{}({})", name, args.join(",")),
        Node::Unary(op, operand) => {
            write!(f, "{}(", op)?;
            fmt_node(f, operand, true, false)?;
            write!(f, ")")
        },
        Node::Binary(op, lhs, rhs) => {
            fmt_operand(f, lhs, *op, Direction::Left, leading)?;
            write!(f, "{}", op)?;
            fmt_operand(f, rhs, *op, Direction::Right, false)
        },
    }
}

/// Formats one operand of a binary operator, surrounding it with parentheses if it binds more
/// weakly than its parent. A left operand using the same operator is also parenthesized, since
/// chains of one operator nest to the right.
fn fmt_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Node,
    parent: BinOpKind,
    side: Direction,
    leading: bool,
) -> fmt::Result {
    let needs_parens = match operand {
        Node::Binary(op, ..) => {
            op.precedence() < parent.precedence()
                || (side == Direction::Left && op.precedence() == parent.precedence())
        },
        _ => false,
    };

    if needs_parens {
        write!(f, "(")?;
        fmt_node(f, operand, true, false)?;
        write!(f, ")")
    } else {
        let power_base = side == Direction::Left && parent == BinOpKind::Exp;
        fmt_node(f, operand, leading, power_base)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(f, self, true, false)
    }
}
