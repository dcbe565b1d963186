use axioms_parser::parser::{ast::Node, parse as parse_tree};
use crate::error::Error;
use crate::numerical::{ctxt::Ctxt, eval::Eval, value::Value};
use crate::symbolic::{
    canonical::{canonical, CanonicalOptions},
    derivative::derivative,
    index::{index, VariableIndex},
    simplify::{simplify, simplify_with_steps, step::Step},
    solve::{solve, SolveOptions},
    substitute,
};
use log::debug;
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed mathematical expression, such as `x^2 + 1` or `a*x + b = c`.
///
/// An expression owns its tree. Every operation that transforms the expression returns a new
/// [`Expression`], leaving the original untouched, so expressions can be shared freely between
/// threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    root: Node,
}

impl Expression {
    /// Creates an expression from a tree.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Parses an expression from source text.
    pub fn parse(source: &str) -> Result<Self, Error> {
        parse_tree(source)
            .map(Self::new)
            .map_err(Error::Parse)
    }

    /// Returns the root of the expression tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consumes the expression, returning its tree.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Evaluates the expression using the variables in the given context.
    ///
    /// Returns `Ok(None)` if the value is indeterminate, such as when a variable has no value,
    /// or when dividing by zero.
    pub fn evaluate(&self, ctxt: &Ctxt) -> Result<Option<Value>, Error> {
        let value = self.root.eval(ctxt)?;
        debug!("evaluated `{}` to {:?}", self.root, value);
        Ok(value)
    }

    /// Returns the derivative of the expression with respect to `var`, simplified and in
    /// canonical form.
    pub fn derivative(&self, var: &str) -> Result<Self, Error> {
        debug!("differentiating `{}` with respect to {}", self.root, var);
        let result = derivative(&self.root, var)?;
        debug!("derivative: `{}`", result);
        Ok(Self::new(result))
    }

    /// Solves the expression for `var`, returning its value. If the expression is not an
    /// equation, it is treated as the equation `expr = 0`.
    pub fn solve_for(&self, var: &str) -> Result<Self, Error> {
        self.solve_for_with(var, SolveOptions::default())
    }

    /// Solves the expression for `var`, using the given options.
    pub fn solve_for_with(&self, var: &str, options: SolveOptions) -> Result<Self, Error> {
        debug!("solving `{}` for {}", self.root, var);
        let result = solve(&self.root, var, options)?;
        debug!("solution: `{}`", result);
        Ok(Self::new(result))
    }

    /// Returns the canonical form of the expression.
    pub fn canonical_form(&self) -> Result<Self, Error> {
        self.canonical_form_with(CanonicalOptions::default())
    }

    /// Returns the canonical form of the expression, using the given options.
    pub fn canonical_form_with(&self, options: CanonicalOptions) -> Result<Self, Error> {
        debug!("canonicalizing `{}`", self.root);
        let result = canonical(&self.root, &options)?;
        debug!("canonical form: `{}`", result);
        Ok(Self::new(result))
    }

    /// Applies one pass of the simplifier to the expression.
    pub fn simplify(&self) -> Result<Self, Error> {
        let result = simplify(&self.root)?;
        debug!("simplified `{}` to `{}`", self.root, result);
        Ok(Self::new(result))
    }

    /// Applies one pass of the simplifier to the expression, also returning the identities that
    /// were applied.
    pub fn simplify_with_steps(&self) -> Result<(Self, Vec<Step>), Error> {
        let (result, steps) = simplify_with_steps(&self.root)?;
        debug!("simplified `{}` to `{}` in {} steps", self.root, result, steps.len());
        Ok((Self::new(result), steps))
    }

    /// Replaces every occurrence of the variable `var` with the given expression.
    pub fn substitute(&self, var: &str, replacement: &Expression) -> Self {
        Self::new(substitute(&self.root, var, &replacement.root))
    }

    /// Returns the paths to every occurrence of each variable in the expression.
    pub fn variable_occurrences(&self) -> VariableIndex {
        index(&self.root)
    }
}

impl From<Node> for Expression {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
