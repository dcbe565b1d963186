//! Symbolic differentiation.
//!
//! [`differentiate`] applies the differentiation rules structurally, producing a tree that is
//! correct but full of trivial subexpressions like `0*ln(x)`. [`derivative`] cleans the result up
//! with one pass of the simplifier and one pass of the canonicalizer.

mod function;

use axioms_parser::parser::{ast::Node, token::op::{BinOpKind, UnaryOpKind}};
use crate::error::{kind::NoDerivativeRule, Error};
use log::trace;
use super::{canonical::{canonical, CanonicalOptions}, simplify::simplify};

/// Returns the derivative of the given expression with respect to `var`, without simplifying it.
///
/// Each side of an equation is differentiated separately. Returns an error if the expression
/// contains a function call, or an operator with no derivative rule (`%`, `!`, the logical
/// operators, and the comparison operators).
pub fn differentiate(expr: &Node, var: &str) -> Result<Node, Error> {
    use BinOpKind::*;

    match expr {
        Node::Symbol(name) if name == var => Ok(Node::int(1)),
        Node::Literal(_) | Node::Symbol(_) => Ok(Node::int(0)),
        Node::Call(name, _) => Err(Error::differentiation(NoDerivativeRule { op: name.clone() })),
        Node::Unary(op, f) => function::chain_rule(*op, f, differentiate(f, var)?),
        Node::Binary(op, f, g) => {
            let (f, g) = (&**f, &**g);
            match op {
                Equation => Ok(Node::equation(differentiate(f, var)?, differentiate(g, var)?)),
                Add => Ok(Node::add(differentiate(f, var)?, differentiate(g, var)?)),
                Sub => Ok(Node::sub(differentiate(f, var)?, differentiate(g, var)?)),

                // f' * g + f * g'
                Mul => Ok(Node::add(
                    Node::mul(differentiate(f, var)?, g.clone()),
                    Node::mul(f.clone(), differentiate(g, var)?),
                )),

                // (g * f' - f * g') / g^2
                Div => Ok(Node::div(
                    Node::sub(
                        Node::mul(g.clone(), differentiate(f, var)?),
                        Node::mul(f.clone(), differentiate(g, var)?),
                    ),
                    Node::pow(g.clone(), Node::int(2)),
                )),

                // f^g * (g' * ln(f) + g * f' / f)
                Exp => Ok(Node::mul(
                    expr.clone(),
                    Node::add(
                        Node::mul(differentiate(g, var)?, Node::unary(UnaryOpKind::Ln, f.clone())),
                        Node::div(Node::mul(g.clone(), differentiate(f, var)?), f.clone()),
                    ),
                )),

                Mod | Or | And | Eq | Less | LessEq | Greater | GreaterEq => {
                    Err(Error::differentiation(NoDerivativeRule { op: op.to_string() }))
                },
            }
        },
    }
}

/// Returns the simplified derivative of the given expression with respect to `var`.
///
/// The result of [`differentiate`] is passed once through the simplifier, then once through the
/// canonicalizer.
pub fn derivative(expr: &Node, var: &str) -> Result<Node, Error> {
    let raw = differentiate(expr, var)?;
    trace!("d/d{} `{}` = `{}`", var, expr, raw);
    canonical(&simplify(&raw)?, &CanonicalOptions::default())
}

#[cfg(test)]
mod tests {
    use axioms_parser::parser::parse;
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use pretty_assertions::assert_eq;
    use super::*;

    fn derived(source: &str) -> String {
        derivative(&parse(source).unwrap(), "x").unwrap().to_string()
    }

    #[test]
    fn polynomials() {
        assert_eq!(derived("x^2"), "2*x");
        assert_eq!(derived("3*x"), "3");
        assert_eq!(derived("x+y"), "1");
        assert_eq!(derived("7"), "0");
    }

    #[test]
    fn functions() {
        assert_eq!(derived("sin(x)"), "cos(x)");
        assert_eq!(derived("exp(x)"), "exp(x)");
        assert_eq!(derived("ln(x)"), "x^(-1)");
    }

    #[test]
    fn raw_rules() {
        let raw = differentiate(&parse("x*y").unwrap(), "x").unwrap();
        assert_eq!(raw.to_string(), "1*y+x*0");

        let raw = differentiate(&parse("cos(x)").unwrap(), "x").unwrap();
        assert_eq!(raw.to_string(), "(-1*1)*sin(x)");
    }

    #[test]
    fn equation_sides() {
        let expr = derivative(&parse("y = x^2 + 1").unwrap(), "x").unwrap();
        assert_eq!(expr.to_string(), "0=2*x");
    }

    #[test]
    fn quotient_rule() {
        let expr = derivative(&parse("1/x").unwrap(), "x").unwrap();
        for x in [0.5, 1.0, 3.0] {
            let ctxt = [("x", x)].into_iter().collect::<Ctxt>();
            let value = expr.eval(&ctxt).unwrap().unwrap();
            assert!(value.approx_eq(&(-1.0 / (x * x)).into()), "{value} at {x}");
        }
    }

    #[test]
    fn no_rule() {
        for source in ["x % 2", "f(x)", "!x", "x < 2", "x & y"] {
            let err = differentiate(&parse(source).unwrap(), "x").unwrap_err();
            assert!(err.is::<NoDerivativeRule>(), "{source}");
            assert!(matches!(err, Error::Differentiation(_)));
        }
    }
}
