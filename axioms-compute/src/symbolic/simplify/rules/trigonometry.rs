//! Simplification rules for trigonometric functions.

use axioms_parser::parser::{ast::Node, token::op::UnaryOpKind};
use crate::symbolic::{
    simplify::{rules::do_unary, step::Step},
    step_collector::StepCollector,
};

/// `sin(0) = 0`
pub fn sin_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Sin, |operand| {
        operand.is_zero().then(|| Node::int(0))
    })?;

    step_collector.push(Step::SinZero);
    Some(opt)
}

/// `cos(0) = 1`
pub fn cos_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Cos, |operand| {
        operand.is_zero().then(|| Node::int(1))
    })?;

    step_collector.push(Step::CosZero);
    Some(opt)
}

/// Applies all trigonometric rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    sin_zero(expr, step_collector)
        .or_else(|| cos_zero(expr, step_collector))
}
