//! Evaluation and symbolic manipulation of Axioms expressions.
//!
//! The entry point is [`parse`], which builds an [`Expression`] from source text. An expression
//! can then be evaluated numerically, differentiated, solved for one of its variables, or
//! rewritten into a canonical sum of products:
//!
//! ```
//! use axioms_compute::{parse, Ctxt, Value};
//!
//! let expr = parse("a*x + b = c").unwrap();
//! let solution = expr.solve_for("x").unwrap();
//! assert_eq!(solution.to_string(), "(c-b)/a");
//!
//! let ctxt = [("a", 2i64), ("b", 1), ("c", 7)].into_iter().collect::<Ctxt>();
//! assert_eq!(solution.evaluate(&ctxt).unwrap(), Some(Value::Float(3.0)));
//!
//! let derivative = parse("x^3 + x").unwrap().derivative("x").unwrap();
//! assert_eq!(derivative.to_string(), "3*x^2+1");
//! ```
//!
//! The lower-level building blocks are available in the [`numerical`] and [`symbolic`] modules,
//! and operate directly on the [`Node`] trees produced by [`axioms_parser`].

pub mod consts;
pub mod error;
pub mod expression;
pub mod numerical;
pub mod symbolic;

pub use axioms_parser::parser::{
    ast::{Direction, Literal, Node, Path},
    token::op::{BinOpKind, UnaryOpKind},
};
pub use error::Error;
pub use expression::Expression;
pub use numerical::{Ctxt, Eval, TrigMode, Value};
pub use symbolic::{CanonicalOptions, SolveOptions, Step, VariableIndex};

/// Parses an expression from source text.
pub fn parse(source: &str) -> Result<Expression, Error> {
    Expression::parse(source)
}
