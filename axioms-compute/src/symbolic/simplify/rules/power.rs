//! Simplification rules for powers.

use axioms_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::error::{kind::ZeroToZero, Error};
use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};

/// Returns an error if the expression is `0^0`.
pub fn zero_to_zero(expr: &Node) -> Result<(), Error> {
    match expr {
        Node::Binary(BinOpKind::Exp, base, power) if base.is_zero() && power.is_zero() => {
            Err(Error::invalid_expression(ZeroToZero))
        },
        _ => Ok(()),
    }
}

/// `a^0 = 1`, where `a` is not the literal `0`
pub fn power_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Exp, |base, power| {
        (power.is_zero() && !base.is_zero()).then(|| Node::int(1))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `1^a = 1`
pub fn one_power(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Exp, |base, _| {
        base.is_one().then(|| base.clone())
    })?;

    step_collector.push(Step::OnePower);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Exp, |base, power| {
        power.is_one().then(|| base.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    power_zero(expr, step_collector)
        .or_else(|| one_power(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
}
