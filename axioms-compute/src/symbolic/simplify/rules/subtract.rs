//! Simplification rules for subtraction.

use axioms_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};

/// `a-0 = a`
pub fn subtract_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        rhs.is_zero().then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0-a = -1*a`
pub fn subtract_from_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        lhs.is_zero().then(|| Node::mul(Node::int(-1), rhs.clone()))
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    subtract_zero(expr, step_collector)
        .or_else(|| subtract_from_zero(expr, step_collector))
}
