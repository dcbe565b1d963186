use crate::parser::{ast::literal::Literal, token::op::{BinOpKind, UnaryOpKind}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which child of a node to descend into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Left,
    Right,
}

/// The sequence of directions leading from the root of a tree to one of its nodes.
pub type Path = Vec<Direction>;

/// A node in the expression tree.
///
/// Trees are built once and never mutated; every transformation produces a new tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A literal value.
    Literal(Literal),

    /// A variable name, such as `x` or `rate_1`.
    Symbol(String),

    /// A unary operator applied to its (right-hand) operand.
    Unary(UnaryOpKind, Box<Node>),

    /// A binary operator applied to its left and right operands.
    Binary(BinOpKind, Box<Node>, Box<Node>),

    /// A call to an arbitrary named function, such as `f(x,2)`. The arguments are kept as
    /// whitespace-free source text and are never parsed.
    Call(String, Vec<String>),
}

impl Node {
    /// Creates an integer literal node.
    pub fn int(n: i64) -> Self {
        Self::Literal(Literal::Integer(n))
    }

    /// Creates a float literal node.
    pub fn float(n: f64) -> Self {
        Self::Literal(Literal::Float(n))
    }

    /// Creates a symbol node.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a unary operator node.
    pub fn unary(op: UnaryOpKind, operand: Node) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    /// Creates a binary operator node.
    pub fn binary(op: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn add(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    pub fn sub(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    pub fn mul(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    pub fn div(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    pub fn pow(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Exp, lhs, rhs)
    }

    pub fn equation(lhs: Node, rhs: Node) -> Self {
        Self::binary(BinOpKind::Equation, lhs, rhs)
    }

    /// Returns the literal stored in this node, if it is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns the name stored in this node, if it is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this node is a numeric literal equal to zero.
    pub fn is_zero(&self) -> bool {
        self.as_literal().is_some_and(Literal::is_zero)
    }

    /// Returns true if this node is a numeric literal equal to one.
    pub fn is_one(&self) -> bool {
        self.as_literal().is_some_and(Literal::is_one)
    }

    /// Returns true if this node is a numeric literal equal to negative one.
    pub fn is_neg_one(&self) -> bool {
        self.as_literal().is_some_and(Literal::is_neg_one)
    }

    /// Returns true if this node is the given symbol.
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }

    /// Returns true if the given symbol appears anywhere in this tree. Arguments of function
    /// calls are opaque text and are not searched.
    pub fn contains_symbol(&self, name: &str) -> bool {
        match self {
            Self::Symbol(s) => s == name,
            Self::Literal(_) | Self::Call(..) => false,
            Self::Unary(_, operand) => operand.contains_symbol(name),
            Self::Binary(_, lhs, rhs) => lhs.contains_symbol(name) || rhs.contains_symbol(name),
        }
    }

    /// Returns the child of this node in the given direction. Unary nodes only have a right
    /// child, and leaves have no children.
    pub fn child(&self, dir: Direction) -> Option<&Node> {
        match (self, dir) {
            (Self::Unary(_, operand), Direction::Right) => Some(operand),
            (Self::Binary(_, lhs, _), Direction::Left) => Some(lhs),
            (Self::Binary(_, _, rhs), Direction::Right) => Some(rhs),
            _ => None,
        }
    }

    /// Follows the given path from this node, returning the node it leads to.
    pub fn at_path(&self, path: &[Direction]) -> Option<&Node> {
        path.iter().try_fold(self, |node, &dir| node.child(dir))
    }

    /// Returns a copy of this tree with the node at the given path replaced. Returns [`None`]
    /// if the path does not lead to a node.
    pub fn replace_at(&self, path: &[Direction], replacement: Node) -> Option<Node> {
        let Some((&dir, rest)) = path.split_first() else {
            return Some(replacement);
        };

        match (self, dir) {
            (Self::Unary(op, operand), Direction::Right) => {
                Some(Self::unary(*op, operand.replace_at(rest, replacement)?))
            },
            (Self::Binary(op, lhs, rhs), Direction::Left) => {
                Some(Self::binary(*op, lhs.replace_at(rest, replacement)?, (**rhs).clone()))
            },
            (Self::Binary(op, lhs, rhs), Direction::Right) => {
                Some(Self::binary(*op, (**lhs).clone(), rhs.replace_at(rest, replacement)?))
            },
            _ => None,
        }
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}
