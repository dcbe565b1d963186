//! Simplification rules for addition.

use axioms_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};

/// `a+0 = a`
/// `0+a = a`
pub fn add_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if rhs.is_zero() {
            Some(lhs.clone())
        } else if lhs.is_zero() {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a+(-1*b) = a-b`
pub fn add_negation(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| match rhs {
        Node::Binary(BinOpKind::Mul, factor, negated) if factor.is_neg_one() => {
            Some(Node::sub(lhs.clone(), (**negated).clone()))
        },
        _ => None,
    })?;

    step_collector.push(Step::AddNegation);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add_zero(expr, step_collector)
        .or_else(|| add_negation(expr, step_collector))
}
