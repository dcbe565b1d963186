//! Tokenizer and parser for Axioms expressions.
//!
//! An expression is a single statement, such as `x^2 + 2*x = 0` or `sin(t)*exp(-1*t)`. Parsing
//! produces a [`Node`](parser::ast::Node) tree that the rest of the engine evaluates and
//! transforms:
//!
//! ```
//! use axioms_parser::parser::{ast::Node, parse};
//!
//! let tree = parse("2 * x + 1").unwrap();
//! assert_eq!(tree, Node::add(Node::mul(Node::int(2), Node::symbol("x")), Node::int(1)));
//! assert_eq!(tree.to_string(), "2*x+1");
//! ```
//!
//! Operators are tried from weakest to strongest in the order of
//! [`PRIORITY`](parser::token::PRIORITY); see [`Parser`](parser::Parser) for how the tree is
//! built.

pub mod parser;
pub mod tokenizer;
