//! Simplification rules for multiplication.

use axioms_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};

/// `a*0 = 0`
/// `0*a = 0`
pub fn multiply_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if rhs.is_zero() {
            Some(rhs.clone())
        } else if lhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `a*1 = a`
/// `1*a = a`
pub fn multiply_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else if lhs.is_one() {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a*b^-1 = a/b`
pub fn multiply_reciprocal(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| match rhs {
        Node::Binary(BinOpKind::Exp, base, power) if power.is_neg_one() => {
            Some(Node::div(lhs.clone(), (**base).clone()))
        },
        _ => None,
    })?;

    step_collector.push(Step::MultiplyReciprocal);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| multiply_reciprocal(expr, step_collector))
}
