//! Errors raised while transforming or evaluating an expression.
//!
//! Every failure falls into one of the categories of [`Error`]. Each category wraps an
//! [`axioms_error::Error`] whose kind (see [`kind`]) describes the specific problem and can be
//! rendered as a report with [`Error::report_to_stderr`].

pub mod kind;

use axioms_error::ErrorKind;
use std::{fmt, io};

/// An error raised by one of the operations on an [`Expression`](crate::Expression).
#[derive(Debug)]
pub enum Error {
    /// The input text could not be parsed.
    Parse(axioms_error::Error),

    /// The variable to solve for does not appear in the expression.
    Lookup(axioms_error::Error),

    /// An operator on the way to the variable has no inverse.
    Inversion(axioms_error::Error),

    /// An operator in the expression has no derivative rule.
    Differentiation(axioms_error::Error),

    /// The expression is invalid, such as an equation whose sides evaluate to different values,
    /// or `0^0`.
    InvalidExpression(axioms_error::Error),
}

impl Error {
    pub(crate) fn lookup(kind: impl ErrorKind + 'static) -> Self {
        Self::Lookup(axioms_error::Error::spanless(kind))
    }

    pub(crate) fn inversion(kind: impl ErrorKind + 'static) -> Self {
        Self::Inversion(axioms_error::Error::spanless(kind))
    }

    pub(crate) fn differentiation(kind: impl ErrorKind + 'static) -> Self {
        Self::Differentiation(axioms_error::Error::spanless(kind))
    }

    pub(crate) fn invalid_expression(kind: impl ErrorKind + 'static) -> Self {
        Self::InvalidExpression(axioms_error::Error::spanless(kind))
    }

    /// Returns the underlying error, regardless of category.
    pub fn inner(&self) -> &axioms_error::Error {
        match self {
            Self::Parse(err)
                | Self::Lookup(err)
                | Self::Inversion(err)
                | Self::Differentiation(err)
                | Self::InvalidExpression(err) => err,
        }
    }

    /// Consumes the error, returning the underlying error.
    pub fn into_inner(self) -> axioms_error::Error {
        match self {
            Self::Parse(err)
                | Self::Lookup(err)
                | Self::Inversion(err)
                | Self::Differentiation(err)
                | Self::InvalidExpression(err) => err,
        }
    }

    /// Returns true if the kind of the underlying error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.inner().is::<K>()
    }

    /// Returns a reference to the kind of the underlying error if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.inner().downcast_ref::<K>()
    }

    /// Returns the name of the category of this error.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse error",
            Self::Lookup(_) => "lookup error",
            Self::Inversion(_) => "inversion error",
            Self::Differentiation(_) => "differentiation error",
            Self::InvalidExpression(_) => "invalid expression",
        }
    }

    /// Prints the report of this error to stderr, highlighting the given input where the error
    /// has spans.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.inner().report_to_stderr(src_id, input)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.inner())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner())
    }
}
