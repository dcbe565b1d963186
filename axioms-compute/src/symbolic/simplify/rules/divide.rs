//! Simplification rules for division.

use axioms_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};

/// `a/1 = a`
pub fn divide_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_one().then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `0/a = 0`
pub fn divide_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, _| {
        lhs.is_zero().then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// Applies all division rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    divide_one(expr, step_collector)
        .or_else(|| divide_zero(expr, step_collector))
}
