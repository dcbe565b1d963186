//! Simplification rules for `exp` and `ln`.

use axioms_parser::parser::{ast::Node, token::op::{BinOpKind, UnaryOpKind}};
use crate::symbolic::{
    simplify::{rules::do_unary, step::Step},
    step_collector::StepCollector,
};

/// `exp(0) = 1`
pub fn exp_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Exp, |operand| {
        operand.is_zero().then(|| Node::int(1))
    })?;

    step_collector.push(Step::ExpZero);
    Some(opt)
}

/// `exp(ln(a)) = a`
pub fn exp_ln(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Exp, |operand| match operand {
        Node::Unary(UnaryOpKind::Ln, inner) => Some((**inner).clone()),
        _ => None,
    })?;

    step_collector.push(Step::ExpLn);
    Some(opt)
}

/// `ln(e) = 1`
pub fn ln_e(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Ln, |operand| {
        operand.is_symbol("e").then(|| Node::int(1))
    })?;

    step_collector.push(Step::LnE);
    Some(opt)
}

/// `ln(e^a) = a`
pub fn ln_power_e(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Ln, |operand| match operand {
        Node::Binary(BinOpKind::Exp, base, power) if base.is_symbol("e") => Some((**power).clone()),
        _ => None,
    })?;

    step_collector.push(Step::LnPowerE);
    Some(opt)
}

/// `ln(exp(a)) = a`
pub fn ln_exp(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Ln, |operand| match operand {
        Node::Unary(UnaryOpKind::Exp, inner) => Some((**inner).clone()),
        _ => None,
    })?;

    step_collector.push(Step::LnExp);
    Some(opt)
}

/// Applies all `exp` and `ln` rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    exp_zero(expr, step_collector)
        .or_else(|| exp_ln(expr, step_collector))
        .or_else(|| ln_e(expr, step_collector))
        .or_else(|| ln_power_e(expr, step_collector))
        .or_else(|| ln_exp(expr, step_collector))
}
