//! Symbolic transformations of expression trees.
//!
//! Every transformation takes a tree by reference and returns a new tree; the input is never
//! modified.

pub mod canonical;
pub mod derivative;
pub mod index;
pub mod simplify;
pub mod solve;
pub mod step_collector;

pub use canonical::{canonical, CanonicalOptions};
pub use derivative::{derivative, differentiate};
pub use index::{index, VariableIndex};
pub use simplify::{simplify, simplify_with_steps, step::Step};
pub use solve::{solve, SolveOptions};
pub use step_collector::StepCollector;

use axioms_parser::parser::ast::Node;

/// Replaces every occurrence of the variable `var` in the tree with a copy of `replacement`.
///
/// Arguments of function calls are not searched.
pub fn substitute(expr: &Node, var: &str, replacement: &Node) -> Node {
    index(expr)
        .get(var)
        .into_iter()
        .flatten()
        .fold(expr.clone(), |tree, path| {
            tree.replace_at(path, replacement.clone()).unwrap_or(tree)
        })
}

#[cfg(test)]
mod tests {
    use axioms_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn substitute_every_occurrence() {
        let expr = parse("x^2 + sin(x) = f(x)").unwrap();
        let replaced = substitute(&expr, "x", &parse("a+1").unwrap());
        assert_eq!(replaced.to_string(), "(a+1)^2+sin(a+1)=f(x)");
    }

    #[test]
    fn substitute_missing_variable() {
        let expr = parse("y + 1").unwrap();
        assert_eq!(substitute(&expr, "x", &Node::int(2)), expr);
    }
}
