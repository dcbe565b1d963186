//! Canonicalization of expression trees.
//!
//! The canonical form of an expression is a sum of products. Products are distributed over sums,
//! numeric factors are folded into a single coefficient per term, factors with the same base are
//! combined by adding their powers, and terms with the same factors are combined by adding their
//! coefficients. Factors and terms are then sorted by their rendered text, so that expressions
//! that differ only in the order of their terms and factors share the same canonical form.
//!
//! Canonicalizing an expression that is already in canonical form leaves it unchanged.

mod term;

use axioms_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::consts::DEFAULT_MAX_TERMS;
use crate::error::Error;
use crate::numerical::value::Value;
use log::warn;
use super::simplify::simplify;
use term::{combine, Factor, Term};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options that control the canonicalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalOptions {
    /// The maximum number of terms that distributing a single product may produce. Products that
    /// would exceed it are kept undistributed.
    pub max_terms: usize,
}

impl Default for CanonicalOptions {
    fn default() -> Self {
        Self { max_terms: DEFAULT_MAX_TERMS }
    }
}

/// A product of factors, before numeric factors are folded and like bases are combined.
type Product = Vec<Factor>;

/// Returns the sum of the given nodes, nested to the right.
fn sum_of(nodes: Vec<Node>) -> Node {
    nodes.into_iter()
        .rev()
        .reduce(|rest, node| Node::add(node, rest))
        .unwrap_or_else(|| Node::int(0))
}

/// Multiplies two sums of products together, distributing every product of one over every product
/// of the other.
fn distribute(lhs: Vec<Product>, rhs: Vec<Product>, options: &CanonicalOptions) -> Result<Vec<Product>, Error> {
    if lhs.len().saturating_mul(rhs.len()) > options.max_terms {
        warn!(
            "distributing a product of {} and {} terms exceeds the limit of {} terms, leaving it undistributed",
            lhs.len(),
            rhs.len(),
            options.max_terms,
        );
        let lhs = collect(lhs, options)?;
        let rhs = collect(rhs, options)?;
        return Ok(vec![vec![Factor::bare(lhs), Factor::bare(rhs)]]);
    }

    Ok(lhs.iter()
        .flat_map(|l| rhs.iter().map(move |r| l.iter().chain(r).cloned().collect::<Product>()))
        .collect())
}

/// Expands the expression into a sum of products.
fn expand(expr: &Node, options: &CanonicalOptions) -> Result<Vec<Product>, Error> {
    use BinOpKind::*;

    Ok(match expr {
        Node::Binary(Add, lhs, rhs) => {
            let mut products = expand(lhs, options)?;
            products.extend(expand(rhs, options)?);
            products
        },

        // a-b = a+(-1*b)
        Node::Binary(Sub, lhs, rhs) => {
            let mut products = expand(lhs, options)?;
            products.extend(expand(rhs, options)?.into_iter().map(|mut product| {
                product.push(Factor::bare(Node::int(-1)));
                product
            }));
            products
        },

        Node::Binary(Mul, lhs, rhs) => distribute(expand(lhs, options)?, expand(rhs, options)?, options)?,

        // a/b = a*b^-1
        Node::Binary(Div, lhs, rhs) => {
            let reciprocal = Factor::new(canonical(rhs, options)?, Node::int(-1));
            distribute(expand(lhs, options)?, vec![vec![reciprocal]], options)?
        },

        Node::Binary(Exp, base, power) => {
            vec![vec![Factor::new(canonical(base, options)?, canonical(power, options)?)]]
        },

        // every other operator is opaque, only its operands are canonicalized
        Node::Binary(op, lhs, rhs) => {
            let node = Node::binary(*op, canonical(lhs, options)?, canonical(rhs, options)?);
            vec![vec![Factor::bare(node)]]
        },
        Node::Unary(op, operand) => {
            vec![vec![Factor::bare(Node::unary(*op, canonical(operand, options)?))]]
        },
        leaf => vec![vec![Factor::bare(leaf.clone())]],
    })
}

/// Folds the numeric factors of the product into a coefficient, and combines factors with the
/// same base by adding their powers.
fn normalize(product: Product, options: &CanonicalOptions) -> Result<Term, Error> {
    // a fold that overflows has no literal to write it as, so the factor is kept as `base^power`
    let fold = |coefficient: Value, factor: &Factor| {
        factor.numeric_value()
            .and_then(|value| combine(BinOpKind::Mul, coefficient, value))
            .filter(Value::is_finite)
    };

    let mut coefficient = Value::Integer(1);
    let mut groups: Vec<(Node, Vec<Node>)> = Vec::new();
    for factor in product {
        if let Some(folded) = fold(coefficient, &factor) {
            coefficient = folded;
            continue;
        }

        match groups.iter_mut().find(|(base, _)| *base == factor.base) {
            Some((_, powers)) => powers.push(factor.power),
            None => groups.push((factor.base, vec![factor.power])),
        }
    }

    let mut factors = Vec::new();
    for (base, mut powers) in groups {
        let power = if powers.len() == 1 {
            powers.swap_remove(0)
        } else {
            canonical(&sum_of(powers), options)?
        };
        if power.is_zero() {
            continue;
        }

        // combining powers can turn a factor numeric, such as `2^x * 2^(1-x)`
        let factor = Factor::new(base, power);
        match fold(coefficient, &factor) {
            Some(folded) => coefficient = folded,
            None => factors.push(factor),
        }
    }

    factors.sort_by_cached_key(|factor| factor.to_node().to_string());
    Ok(Term { coefficient, factors })
}

/// Builds the sum of the given terms, nested to the right. Terms must already be sorted, with the
/// constant term last. A negative constant is subtracted instead of added.
fn build_sum(mut terms: Vec<Term>) -> Node {
    let Some(last) = terms.pop() else {
        return Node::int(0);
    };

    let mut sum = match terms.pop() {
        Some(prev) => match last.negative_constant() {
            Some(magnitude) => Node::sub(prev.to_node(), magnitude),
            None => Node::add(prev.to_node(), last.to_node()),
        },
        None => last.to_node(),
    };
    while let Some(term) = terms.pop() {
        sum = Node::add(term.to_node(), sum);
    }
    sum
}

/// Normalizes each product and combines like terms, returning their sum.
fn collect(products: Vec<Product>, options: &CanonicalOptions) -> Result<Node, Error> {
    let mut terms: Vec<Term> = Vec::new();
    for product in products {
        let term = normalize(product, options)?;
        if term.coefficient.is_zero() {
            continue;
        }

        let merged = terms.iter_mut()
            .find(|existing| existing.factors == term.factors)
            .and_then(|existing| {
                existing.coefficient = combine(BinOpKind::Add, existing.coefficient, term.coefficient)
                    .filter(Value::is_finite)?;
                Some(())
            });
        if merged.is_none() {
            terms.push(term);
        }
    }

    terms.retain(|term| !term.coefficient.is_zero());
    terms.sort_by_cached_key(Term::sort_key);
    Ok(build_sum(terms))
}

/// Returns the canonical form of the given expression.
///
/// Each side of an equation is canonicalized separately. Returns an error if simplifying the
/// expression fails, such as when it contains `0^0`.
pub fn canonical(expr: &Node, options: &CanonicalOptions) -> Result<Node, Error> {
    if let Node::Binary(BinOpKind::Equation, lhs, rhs) = expr {
        return Ok(Node::equation(canonical(lhs, options)?, canonical(rhs, options)?));
    }

    let simplified = simplify(expr)?;
    let products = expand(&simplified, options)?;
    simplify(&collect(products, options)?)
}

#[cfg(test)]
mod tests {
    use axioms_parser::parser::parse;
    use crate::error::kind::ZeroToZero;
    use pretty_assertions::assert_eq;
    use super::*;

    fn canonicalized(source: &str) -> String {
        canonical(&parse(source).unwrap(), &CanonicalOptions::default()).unwrap().to_string()
    }

    #[test]
    fn distributes_products() {
        assert_eq!(canonicalized("(x+1)*(x-1)"), "x^2-1");
        assert_eq!(canonicalized("2*(a+b)"), "2*a+2*b");
    }

    #[test]
    fn combines_like_terms() {
        assert_eq!(canonicalized("2*x+3*x"), "5*x");
        assert_eq!(canonicalized("x*y-y*x"), "0");
        assert_eq!(canonicalized("1+x+2"), "x+3");
        assert_eq!(canonicalized("a-b"), "a-b");
    }

    #[test]
    fn combines_like_bases() {
        assert_eq!(canonicalized("x*x*x"), "x^3");
        assert_eq!(canonicalized("exp(x)*exp(x)"), "exp(x)^2");
        assert_eq!(canonicalized("x^2/x"), "x");
    }

    #[test]
    fn sorts_terms() {
        assert_eq!(canonicalized("y+x"), "x+y");
        assert_eq!(canonicalized("c*b*a"), "a*b*c");
    }

    #[test]
    fn numeric_coefficients() {
        assert_eq!(canonicalized("x/2"), "0.5*x");
        assert_eq!(canonicalized("sin(x+0)*2"), "2*sin(x)");
        assert_eq!(canonicalized("2^3"), "8");
    }

    #[test]
    fn complex_coefficients() {
        assert_eq!(canonicalized("3j"), "3.0j");
        assert_eq!(canonicalized("2j*x"), "2.0j*x");
        assert_eq!(canonicalized("(1+2j)*x"), "(1.0+2.0j)*x");
        assert_eq!(canonicalized("x+(1+2j)"), "x+1.0+2.0j");
        assert_eq!(canonicalized("1-2j"), "1.0-2.0j");
    }

    #[test]
    fn overflowing_constants() {
        assert_eq!(canonicalized("x*10^400"), "10^400*x");
        assert_eq!(canonicalized("2*10^400"), "2*10^400");
    }

    #[test]
    fn equation_sides() {
        assert_eq!(canonicalized("x = 2*x - x"), "x=x");
    }

    #[test]
    fn idempotent() {
        let sources = [
            "(x+1)*(x-1)",
            "(a+b)^2*c",
            "exp(x)*exp(x)",
            "x/(2*y)",
            "ln(x)/x",
            "3*x^2-4*x+7",
            "x/y",
            "sin(x)*cos(x)+1",
            "2^x*3",
            "a-b-c",
            "(1+2j)*x-3",
            "x*10^400",
        ];

        for source in sources {
            let once = canonical(&parse(source).unwrap(), &CanonicalOptions::default()).unwrap();
            let twice = canonical(&once, &CanonicalOptions::default()).unwrap();
            assert_eq!(twice, once, "{source}");
        }
    }

    #[test]
    fn term_limit() {
        let options = CanonicalOptions { max_terms: 2 };
        let expr = canonical(&parse("(a+b)*(c+d)").unwrap(), &options).unwrap();
        assert_eq!(expr.to_string(), "(a+b)*(c+d)");
    }

    #[test]
    fn zero_to_zero() {
        let err = canonical(&parse("x+0^0").unwrap(), &CanonicalOptions::default()).unwrap_err();
        assert!(err.is::<ZeroToZero>());
    }
}
