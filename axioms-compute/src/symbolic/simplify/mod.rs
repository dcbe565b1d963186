//! Algebraic simplification of expression trees.
//!
//! The simplifier makes a single bottom-up pass over the tree: the children of a node are
//! simplified first, then the first rule in [`rules`] that matches the rebuilt node is applied to
//! it. At most one rule fires per node, so some expressions, such as `(x*1)*1`, may need more
//! than one pass to be fully simplified. Rules are purely structural; the simplifier never
//! evaluates an expression.
//!
//! The identities applied along the way can be recorded with [`simplify_with_steps`].

pub mod rules;
pub mod step;

use axioms_parser::parser::ast::Node;
use crate::error::Error;
use log::trace;
use super::step_collector::StepCollector;
use step::Step;

/// Simplifies every node of the tree, from the leaves to the root, reporting the identity
/// applied to each node to the step collector.
pub(crate) fn simplify_collect(
    expr: &Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Node, Error> {
    let rebuilt = match expr {
        Node::Unary(op, operand) => Node::unary(*op, simplify_collect(operand, step_collector)?),
        Node::Binary(op, lhs, rhs) => Node::binary(
            *op,
            simplify_collect(lhs, step_collector)?,
            simplify_collect(rhs, step_collector)?,
        ),
        // no rule applies to a leaf
        leaf => return Ok(leaf.clone()),
    };

    match rules::all(&rebuilt, step_collector)? {
        Some(simplified) => {
            trace!("simplified `{}` to `{}`", rebuilt, simplified);
            Ok(simplified)
        },
        None => Ok(rebuilt),
    }
}

/// Simplifies the given expression.
///
/// Returns an error if the expression contains `0^0`.
pub fn simplify(expr: &Node) -> Result<Node, Error> {
    simplify_collect(expr, &mut ())
}

/// Simplifies the given expression, returning the simplified expression and the identities that
/// were applied, in the order they were applied.
pub fn simplify_with_steps(expr: &Node) -> Result<(Node, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_collect(expr, &mut steps)?;
    Ok((simplified, steps))
}
