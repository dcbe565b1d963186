//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the simplifier is responsible
//! for applying them to every node of the tree.

pub mod add;
pub mod divide;
pub mod log;
pub mod multiply;
pub mod power;
pub mod subtract;
pub mod trigonometry;

use axioms_parser::parser::{ast::Node, token::op::{BinOpKind, UnaryOpKind}};
use crate::error::Error;
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side of the expression.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Node,
    op: BinOpKind,
    f: impl Fn(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    match expr {
        Node::Binary(target_op, lhs, rhs) if *target_op == op => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is a unary expression with the given operator, calls the given
/// transformation function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_unary(
    expr: &Node,
    op: UnaryOpKind,
    f: impl Fn(&Node) -> Option<Node>,
) -> Option<Node> {
    match expr {
        Node::Unary(target_op, operand) if *target_op == op => f(operand),
        _ => None,
    }
}

/// Applies the first rule that matches the expression.
///
/// Returns an error if the expression is `0^0`, which has no simplified form.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Node>, Error> {
    power::zero_to_zero(expr)?;

    Ok(add::all(expr, step_collector)
        .or_else(|| subtract::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| log::all(expr, step_collector))
        .or_else(|| trigonometry::all(expr, step_collector)))
}
