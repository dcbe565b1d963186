use num_complex::Complex64;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A literal value written directly in source code, such as `2`, `0.5`, `3j`, or `True`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A boolean literal, `True` or `False`.
    Boolean(bool),

    /// An integer literal, such as `2` or `144`.
    Integer(i64),

    /// A floating-point literal, such as `3.14` or `0.5`.
    Float(f64),

    /// A complex literal. Source code can only spell imaginary literals such as `2j`. A complex
    /// literal with a real part displays as `(1.0+2.0j)`, which parses back as a sum, so trees
    /// meant to be reparsed write it as `1.0+2.0j` instead.
    Complex(Complex64),
}

impl Literal {
    /// Returns true if the literal is a number (not a boolean).
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Boolean(_))
    }

    /// Returns true if the literal is the number zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Boolean(_) => false,
            Self::Integer(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Complex(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    /// Returns true if the literal is the number one.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Boolean(_) => false,
            Self::Integer(n) => *n == 1,
            Self::Float(n) => *n == 1.0,
            Self::Complex(c) => c.re == 1.0 && c.im == 0.0,
        }
    }

    /// Returns true if the literal is the number negative one.
    pub fn is_neg_one(&self) -> bool {
        match self {
            Self::Boolean(_) => false,
            Self::Integer(n) => *n == -1,
            Self::Float(n) => *n == -1.0,
            Self::Complex(c) => c.re == -1.0 && c.im == 0.0,
        }
    }

    /// Returns the negation of a numeric literal, or [`None`] for booleans.
    pub fn negate(self) -> Option<Self> {
        match self {
            Self::Boolean(_) => None,
            Self::Integer(n) => Some(n.checked_neg().map_or(Self::Float(-(n as f64)), Self::Integer)),
            Self::Float(n) => Some(Self::Float(-n)),
            Self::Complex(c) => Some(Self::Complex(-c)),
        }
    }
}

/// Formats a float so that it is always read back as a float, e.g. `3.0` instead of `3`.
fn fmt_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 {
        write!(f, "{:.1}", n)
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(true) => write!(f, "True"),
            Self::Boolean(false) => write!(f, "False"),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => fmt_float(f, *n),
            Self::Complex(c) if c.re == 0.0 => {
                fmt_float(f, c.im)?;
                write!(f, "j")
            },
            Self::Complex(c) => {
                write!(f, "(")?;
                fmt_float(f, c.re)?;
                if c.im < 0.0 {
                    write!(f, "-")?;
                } else {
                    write!(f, "+")?;
                }
                fmt_float(f, c.im.abs())?;
                write!(f, "j)")
            },
        }
    }
}
