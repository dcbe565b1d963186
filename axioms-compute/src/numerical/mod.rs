//! Numerical evaluation of expressions.
//!
//! An expression is evaluated against a [`Ctxt`] holding the values of its variables. Evaluation
//! is partial: a variable with no value makes the result indeterminate ([`None`]) rather than
//! failing, so that an equation such as `a = 5` can still be evaluated from its known side.

pub mod ctxt;
pub mod eval;
pub mod trig_mode;
pub mod value;

pub use ctxt::Ctxt;
pub use eval::Eval;
pub use trig_mode::TrigMode;
pub use value::Value;
