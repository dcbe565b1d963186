//! Operators recognized by the parser, and the priority table that decides how an expression is
//! split into a tree.

pub mod op;

pub use op::{BinOpKind, OpKind, UnaryOpKind, PRIORITY};
