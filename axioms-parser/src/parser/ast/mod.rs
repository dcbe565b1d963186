//! The expression tree produced by the parser.
//!
//! Every parsed statement is a strictly binary tree of [`Node`]s: leaves are literals,
//! identifiers, or function calls; unary operators only have a right-hand operand; binary
//! operators always have both operands.

pub mod literal;
pub mod node;

pub use literal::Literal;
pub use node::{Direction, Node, Path};
