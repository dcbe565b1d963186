//! Structs to help parse binary and unary operators.

use crate::tokenizer::TokenKind;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed. Unary operations only have a right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    Asin,
    Acos,
    Atan,
    Ln,
    Exp,
    Not,
}

impl UnaryOpKind {
    /// Returns the name of the function, as it is written in source code.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Csc => "csc",
            Self::Sec => "sec",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Not => "!",
        }
    }

    /// Returns the precedence of the unary operation.
    pub fn precedence(self) -> usize {
        OpKind::Unary(self).precedence()
    }

    /// Returns true if the unary operation is a trigonometric function (not an inverse one).
    pub fn is_trig(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan | Self::Csc | Self::Sec | Self::Cot)
    }

    /// Returns true if the unary operation is an inverse trigonometric function.
    pub fn is_inverse_trig(self) -> bool {
        matches!(self, Self::Asin | Self::Acos | Self::Atan)
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    /// `=`, stating that both sides are equal.
    Equation,
    Or,
    And,
    Add,
    Sub,
    Mod,
    Mul,
    Div,
    Exp,
    /// `==`, comparing both sides.
    Eq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl BinOpKind {
    /// Returns the symbol of the operator, as it is written in source code.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equation => "=",
            Self::Or => "|",
            Self::And => "&",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mod => "%",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
            Self::Eq => "==",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> usize {
        OpKind::Binary(self).precedence()
    }

    /// Returns true if the operation is one of the comparison operators.
    pub fn is_comparison(self) -> bool {
        matches!(self, Self::Eq | Self::Less | Self::LessEq | Self::Greater | Self::GreaterEq)
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Any operator that can appear in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Binary(BinOpKind),
    Unary(UnaryOpKind),
}

/// The order in which the parser looks for operators to split an expression at, from the
/// **weakest** binding operator to the strongest.
///
/// The parser splits a token list at the leftmost occurrence of the first operator in this table
/// that is present in the list. This ordering is the only precedence mechanism; the serializer
/// derives its parenthesization from the same table through [`OpKind::precedence`].
pub const PRIORITY: [OpKind; 26] = [
    OpKind::Binary(BinOpKind::Equation),
    OpKind::Binary(BinOpKind::Or),
    OpKind::Binary(BinOpKind::And),
    OpKind::Binary(BinOpKind::Add),
    OpKind::Binary(BinOpKind::Sub),
    OpKind::Binary(BinOpKind::Mod),
    OpKind::Binary(BinOpKind::Mul),
    OpKind::Binary(BinOpKind::Div),
    OpKind::Binary(BinOpKind::Exp),
    OpKind::Binary(BinOpKind::Eq),
    OpKind::Binary(BinOpKind::Less),
    OpKind::Binary(BinOpKind::LessEq),
    OpKind::Binary(BinOpKind::Greater),
    OpKind::Binary(BinOpKind::GreaterEq),
    OpKind::Unary(UnaryOpKind::Cos),
    OpKind::Unary(UnaryOpKind::Sin),
    OpKind::Unary(UnaryOpKind::Tan),
    OpKind::Unary(UnaryOpKind::Sec),
    OpKind::Unary(UnaryOpKind::Csc),
    OpKind::Unary(UnaryOpKind::Cot),
    OpKind::Unary(UnaryOpKind::Asin),
    OpKind::Unary(UnaryOpKind::Acos),
    OpKind::Unary(UnaryOpKind::Atan),
    OpKind::Unary(UnaryOpKind::Ln),
    OpKind::Unary(UnaryOpKind::Exp),
    OpKind::Unary(UnaryOpKind::Not),
];

impl OpKind {
    /// Returns the precedence of the operator: its index in [`PRIORITY`]. A lower value binds
    /// more weakly.
    pub fn precedence(self) -> usize {
        // every operator is in the table, checked by the `priority_table_is_complete` test
        PRIORITY.iter().position(|&op| op == self).unwrap_or(PRIORITY.len())
    }

    /// Returns the operator represented by the given token kind, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Equation => Self::Binary(BinOpKind::Equation),
            TokenKind::Or => Self::Binary(BinOpKind::Or),
            TokenKind::And => Self::Binary(BinOpKind::And),
            TokenKind::Add => Self::Binary(BinOpKind::Add),
            TokenKind::Sub => Self::Binary(BinOpKind::Sub),
            TokenKind::Mod => Self::Binary(BinOpKind::Mod),
            TokenKind::Mul => Self::Binary(BinOpKind::Mul),
            TokenKind::Div => Self::Binary(BinOpKind::Div),
            TokenKind::Exp => Self::Binary(BinOpKind::Exp),
            TokenKind::Eq => Self::Binary(BinOpKind::Eq),
            TokenKind::Less => Self::Binary(BinOpKind::Less),
            TokenKind::LessEq => Self::Binary(BinOpKind::LessEq),
            TokenKind::Greater => Self::Binary(BinOpKind::Greater),
            TokenKind::GreaterEq => Self::Binary(BinOpKind::GreaterEq),
            TokenKind::Sin => Self::Unary(UnaryOpKind::Sin),
            TokenKind::Cos => Self::Unary(UnaryOpKind::Cos),
            TokenKind::Tan => Self::Unary(UnaryOpKind::Tan),
            TokenKind::Csc => Self::Unary(UnaryOpKind::Csc),
            TokenKind::Sec => Self::Unary(UnaryOpKind::Sec),
            TokenKind::Cot => Self::Unary(UnaryOpKind::Cot),
            TokenKind::Asin => Self::Unary(UnaryOpKind::Asin),
            TokenKind::Acos => Self::Unary(UnaryOpKind::Acos),
            TokenKind::Atan => Self::Unary(UnaryOpKind::Atan),
            TokenKind::Ln => Self::Unary(UnaryOpKind::Ln),
            TokenKind::ExpFn => Self::Unary(UnaryOpKind::Exp),
            TokenKind::Not => Self::Unary(UnaryOpKind::Not),
            _ => return None,
        })
    }
}
