//! Solving an equation for one of its variables.
//!
//! The solver isolates the variable by walking from the root of the equation down to the
//! variable, undoing each operator it passes through. It starts with the side of the equation that
//! does not contain the variable, and at every step applies the inverse of the current operator to
//! it. When the walk reaches the variable, the accumulated expression is its value.
//!
//! Only the first occurrence of the variable (from left to right) is followed. If the variable
//! appears more than once, the result still contains it.

mod function;

use axioms_parser::parser::{
    ast::{Direction, Node},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::error::{kind::{NoInverse, UnknownVariable}, Error};
use levenshtein::levenshtein;
use log::trace;
use super::{index::{index, VariableIndex}, simplify::simplify};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options that control the output of [`solve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveOptions {
    /// If true, the solution is returned as the equation `var = solution` instead of the
    /// solution alone.
    pub include_var: bool,
}

/// Returns the variables in the index with a name similar to `var`.
fn similar_variables(index: &VariableIndex, var: &str) -> Vec<String> {
    index.keys()
        .filter(|name| levenshtein(name, var) < 2)
        .cloned()
        .collect()
}

/// Given the value `acc` of the node `node`, returns the value of the child of `node` in
/// direction `dir`.
fn invert_step(node: &Node, dir: Direction, acc: Node) -> Result<Node, Error> {
    use BinOpKind::*;
    use Direction::*;

    let (op, lhs, rhs) = match node {
        Node::Unary(op, _) => return Ok(function::invert(*op, acc)),
        Node::Binary(op, lhs, rhs) => (*op, (**lhs).clone(), (**rhs).clone()),
        leaf => return Err(Error::inversion(NoInverse { op: leaf.to_string() })),
    };

    Ok(match (op, dir) {
        (Add, Left) => Node::sub(acc, rhs),
        (Add, Right) => Node::sub(acc, lhs),
        (Sub, Left) => Node::add(acc, rhs),
        (Sub, Right) => Node::sub(lhs, acc),
        (Mul, Left) => Node::div(acc, rhs),
        (Mul, Right) => Node::div(acc, lhs),
        (Div, Left) => Node::mul(acc, rhs),
        (Div, Right) => Node::div(lhs, acc),

        // acc = f^g, so f = acc^(1/g)
        (Exp, Left) => Node::pow(acc, Node::div(Node::int(1), rhs)),

        // acc = f^g, so g = ln(acc) / ln(f)
        (Exp, Right) => Node::div(
            Node::unary(UnaryOpKind::Ln, acc),
            Node::unary(UnaryOpKind::Ln, lhs),
        ),

        (Equation | Mod | Or | And | Eq | Less | LessEq | Greater | GreaterEq, _) => {
            return Err(Error::inversion(NoInverse { op: op.to_string() }));
        },
    })
}

/// Solves the given equation for `var`.
///
/// If the expression is not an equation, it is treated as the equation `expr = 0`. Returns an
/// error if `var` does not appear in the expression, or if an operator between the root of the
/// equation and the variable cannot be inverted.
pub fn solve(expr: &Node, var: &str, options: SolveOptions) -> Result<Node, Error> {
    let index = index(expr);
    let Some(first) = index.get(var).and_then(|paths| paths.first()) else {
        return Err(Error::lookup(UnknownVariable {
            name: var.to_string(),
            suggestions: similar_variables(&index, var),
        }));
    };

    let (equation, path) = match expr {
        Node::Binary(BinOpKind::Equation, ..) => (expr.clone(), first.clone()),
        _ => {
            let mut path = vec![Direction::Left];
            path.extend(first);
            (Node::equation(expr.clone(), Node::int(0)), path)
        },
    };

    let Node::Binary(BinOpKind::Equation, lhs, rhs) = &equation else {
        return Err(Error::inversion(NoInverse { op: BinOpKind::Equation.to_string() }));
    };

    // the first direction picks the side containing the variable, and the other side becomes the
    // starting value
    let (mut current, mut acc, rest) = match path.split_first() {
        Some((Direction::Left, rest)) => ((**lhs).clone(), (**rhs).clone(), rest),
        Some((Direction::Right, rest)) => ((**rhs).clone(), (**lhs).clone(), rest),
        None => return Err(Error::inversion(NoInverse { op: BinOpKind::Equation.to_string() })),
    };
    trace!("solving `{}` for {}", equation, var);

    for &dir in rest {
        acc = invert_step(&current, dir, acc)?;
        current = match current.child(dir) {
            Some(child) => child.clone(),
            None => return Err(Error::inversion(NoInverse { op: current.to_string() })),
        };
        trace!("`{}` = `{}`", current, acc);
    }

    let solution = if options.include_var {
        Node::equation(Node::symbol(var), acc)
    } else {
        acc
    };
    simplify(&solution)
}

#[cfg(test)]
mod tests {
    use axioms_parser::parser::parse;
    use crate::numerical::{ctxt::Ctxt, eval::Eval, value::Value};
    use pretty_assertions::assert_eq;
    use super::*;

    fn solved(source: &str, var: &str) -> String {
        solve(&parse(source).unwrap(), var, SolveOptions::default()).unwrap().to_string()
    }

    #[test]
    fn linear() {
        assert_eq!(solved("a*x+b=c", "x"), "(c-b)/a");
        assert_eq!(solved("c=a*x+b", "x"), "(c-b)/a");
        assert_eq!(solved("x-3=y", "x"), "y+3");
        assert_eq!(solved("3-x=y", "x"), "3-y");
        assert_eq!(solved("6/x=2", "x"), "6/2");
    }

    #[test]
    fn without_equals_sign() {
        // `2*x+3` is treated as `2*x+3 = 0`
        let expr = solve(&parse("2*x+3").unwrap(), "x", SolveOptions::default()).unwrap();
        assert_eq!(expr.eval_default().unwrap(), Some(Value::Float(-1.5)));
    }

    #[test]
    fn powers() {
        assert_eq!(solved("x^2=y", "x"), "y^(1/2)");
        assert_eq!(solved("2^x=y", "x"), "ln(y)/ln(2)");
    }

    #[test]
    fn functions() {
        assert_eq!(solved("sin(x)=y", "x"), "asin(y)");
        assert_eq!(solved("csc(x)=y", "x"), "asin(1/y)");
        assert_eq!(solved("ln(x+1)=2", "x"), "exp(2)-1");
        assert_eq!(solved("exp(2*x)=y", "x"), "ln(y)/2");
    }

    #[test]
    fn include_var() {
        let options = SolveOptions { include_var: true };
        let expr = solve(&parse("x+1=y").unwrap(), "x", options).unwrap();
        assert_eq!(expr.to_string(), "x=y-1");
    }

    #[test]
    fn first_occurrence() {
        // only the first `x` is isolated
        assert_eq!(solved("x+x=4", "x"), "4-x");
    }

    #[test]
    fn solution_satisfies_equation() {
        let expr = parse("3*x^2-4=23").unwrap();
        let solution = solve(&expr, "x", SolveOptions::default()).unwrap();
        let x = solution.eval_default().unwrap().unwrap();
        assert!(x.approx_eq(&Value::Integer(3)), "{x}");

        let ctxt = [("x", x)].into_iter().collect::<Ctxt>();
        assert!(expr.eval(&ctxt).is_ok());
    }

    #[test]
    fn unknown_variable() {
        let err = solve(&parse("xy + 1 = 2").unwrap(), "x", SolveOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Lookup(_)));

        let kind = err.downcast_ref::<UnknownVariable>().unwrap();
        assert_eq!(kind.name, "x");
        assert_eq!(kind.suggestions, vec!["xy".to_string()]);

        // arguments of calls are not searched
        let err = solve(&parse("f(x) = 2").unwrap(), "x", SolveOptions::default()).unwrap_err();
        assert!(err.is::<UnknownVariable>());
    }

    #[test]
    fn no_inverse() {
        for source in ["x % 3 = 1", "(x < 2) = 1", "(x | 1) = 1"] {
            let err = solve(&parse(source).unwrap(), "x", SolveOptions::default()).unwrap_err();
            assert!(matches!(err, Error::Inversion(_)), "{source}");
            assert!(err.is::<NoInverse>(), "{source}");
        }
    }
}
