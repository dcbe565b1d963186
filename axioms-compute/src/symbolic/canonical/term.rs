use axioms_parser::parser::{ast::{Literal, Node}, token::op::BinOpKind};
use crate::numerical::{eval::binary::eval_operands, value::Value};
use num_complex::Complex64;

/// Applies a binary operator to two numeric values, returning [`None`] if the result cannot be
/// represented as a value.
pub(crate) fn combine(op: BinOpKind, left: Value, right: Value) -> Option<Value> {
    eval_operands(op, left, right).ok().flatten()
}

/// One factor of a term, `base^power`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Factor {
    pub base: Node,
    pub power: Node,
}

impl Factor {
    pub fn new(base: Node, power: Node) -> Self {
        Self { base, power }
    }

    /// Creates the factor `base^1`.
    pub fn bare(base: Node) -> Self {
        Self::new(base, Node::int(1))
    }

    /// If both the base and power are numeric literals, returns the value of the factor.
    pub fn numeric_value(&self) -> Option<Value> {
        match (&self.base, &self.power) {
            (Node::Literal(base), _) if base.is_numeric() && self.power.is_one() => Some((*base).into()),
            (Node::Literal(base), Node::Literal(power)) if base.is_numeric() && power.is_numeric() => {
                combine(BinOpKind::Exp, (*base).into(), (*power).into())
            },
            _ => None,
        }
    }

    /// Builds the tree of this factor. A power of one is left out.
    pub fn to_node(&self) -> Node {
        if self.power.is_one() {
            self.base.clone()
        } else {
            Node::pow(self.base.clone(), self.power.clone())
        }
    }
}

/// A numeric coefficient multiplied by factors with distinct bases. A term with no factors is a
/// constant.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Term {
    pub coefficient: Value,
    pub factors: Vec<Factor>,
}

impl Term {
    /// Returns true if the term has no factors.
    pub fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    /// The key terms are ordered by. Constants are placed after every other term.
    pub fn sort_key(&self) -> (bool, String) {
        let rendered = self.factors.iter()
            .map(|factor| factor.to_node().to_string())
            .collect::<Vec<_>>()
            .join("*");
        (self.is_constant(), rendered)
    }

    /// If this term is a negative real constant, returns its magnitude.
    pub fn negative_constant(&self) -> Option<Node> {
        if !self.is_constant() {
            return None;
        }

        match self.coefficient {
            Value::Integer(n) if n < 0 => n.checked_neg().map(Node::int),
            Value::Float(n) if n < 0.0 => Some(Node::float(-n)),
            _ => None,
        }
    }

    /// Builds the tree of the coefficient. A complex coefficient with a real part is written as
    /// the sum of its parts, since no single literal can spell it.
    fn coefficient_node(&self) -> Node {
        match self.coefficient {
            Value::Complex(c) if c.re != 0.0 => {
                let real = Node::float(c.re);
                if c.im < 0.0 {
                    Node::sub(real, Literal::Complex(Complex64::new(0.0, -c.im)).into())
                } else {
                    Node::add(real, Literal::Complex(Complex64::new(0.0, c.im)).into())
                }
            },
            coefficient => Node::Literal(coefficient.into()),
        }
    }

    /// Builds the tree of this term, a right-nested product with the coefficient leading. A
    /// coefficient of one is left out.
    pub fn to_node(&self) -> Node {
        let product = self.factors.iter()
            .rev()
            .map(Factor::to_node)
            .reduce(|rest, factor| Node::mul(factor, rest));

        let coefficient = self.coefficient_node();
        match product {
            None => coefficient,
            Some(product) if self.coefficient.is_one() => product,
            Some(product) => Node::mul(coefficient, product),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn factor_node() {
        assert_eq!(Factor::bare(Node::symbol("x")).to_node(), Node::symbol("x"));
        assert_eq!(
            Factor::new(Node::symbol("x"), Node::int(2)).to_node().to_string(),
            "x^2",
        );
    }

    #[test]
    fn numeric_factor() {
        let factor = Factor::new(Node::int(2), Node::int(-1));
        assert_eq!(factor.numeric_value(), Some(Value::Float(0.5)));
        assert_eq!(Factor::new(Node::symbol("x"), Node::int(2)).numeric_value(), None);
    }

    #[test]
    fn term_node() {
        let term = Term {
            coefficient: Value::Integer(-3),
            factors: vec![Factor::bare(Node::symbol("x")), Factor::new(Node::symbol("y"), Node::int(2))],
        };
        assert_eq!(term.to_node().to_string(), "-3*x*y^2");
        assert_eq!(term.sort_key(), (false, "x*y^2".to_string()));

        let constant = Term { coefficient: Value::Integer(-3), factors: Vec::new() };
        assert_eq!(constant.negative_constant(), Some(Node::int(3)));
    }

    #[test]
    fn complex_factor_is_exact() {
        let factor = Factor::bare(Node::Literal(Literal::Complex(Complex64::new(0.0, 3.0))));
        assert_eq!(factor.numeric_value(), Some(Value::Complex(Complex64::new(0.0, 3.0))));

        let squared = Factor::new(Node::Literal(Literal::Complex(Complex64::new(1.0, 2.0))), Node::int(2));
        assert_eq!(squared.numeric_value(), Some(Value::Complex(Complex64::new(-3.0, 4.0))));
    }

    #[test]
    fn complex_coefficient_node() {
        let term = Term {
            coefficient: Value::Complex(Complex64::new(1.0, 2.0)),
            factors: vec![Factor::bare(Node::symbol("x"))],
        };
        assert_eq!(term.to_node().to_string(), "(1.0+2.0j)*x");

        let constant = Term { coefficient: Value::Complex(Complex64::new(1.5, -2.0)), factors: Vec::new() };
        assert_eq!(constant.to_node().to_string(), "1.5-2.0j");

        let imaginary = Term { coefficient: Value::Complex(Complex64::new(0.0, 2.0)), factors: Vec::new() };
        assert_eq!(imaginary.to_node().to_string(), "2.0j");
    }
}
