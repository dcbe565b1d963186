use axioms_parser::parser::ast::Literal;
use crate::consts::EQUATION_TOLERANCE;
use num_complex::Complex64;
use std::{f64::consts::PI, fmt::{Display, Formatter}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating an expression.
///
/// Values form a numeric tower, `Boolean < Integer < Float < Complex`: when a binary operator is
/// applied to values of different types, the lower value is promoted to the type of the higher
/// one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A boolean.
    Boolean(bool),

    /// An integer value.
    Integer(i64),

    /// A floating-point value.
    Float(f64),

    /// A complex number value.
    Complex(Complex64),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Complex(_) => "Complex",
        }
    }

    /// Returns true if this value is an integer, or a boolean that can be promoted to one.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Boolean(_) | Value::Integer(_))
    }

    /// Returns true if every part of this value is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Value::Boolean(_) | Value::Integer(_) => true,
            Value::Float(n) => n.is_finite(),
            Value::Complex(c) => c.is_finite(),
        }
    }

    /// Returns true if the value is zero (or `False`).
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Boolean(b) => !b,
            Value::Integer(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Complex(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    /// Returns true if the value is one (or `True`).
    pub fn is_one(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Integer(n) => *n == 1,
            Value::Float(n) => *n == 1.0,
            Value::Complex(c) => c.re == 1.0 && c.im == 0.0,
        }
    }

    /// Returns the truthiness of the value: every value other than zero is truthy.
    pub fn is_truthy(&self) -> bool {
        !self.is_zero()
    }

    /// Promotes the value to an integer, if it is a boolean or an integer.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Value::Boolean(b) => Some(i64::from(*b)),
            Value::Integer(n) => Some(*n),
            Value::Float(_) | Value::Complex(_) => None,
        }
    }

    /// Promotes the value to a real number, if it is not complex.
    pub fn to_real(&self) -> Option<f64> {
        match self {
            Value::Boolean(b) => Some(f64::from(u8::from(*b))),
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Complex(_) => None,
        }
    }

    /// Promotes the value to a complex number.
    pub fn to_complex(&self) -> Complex64 {
        match self {
            Value::Complex(c) => *c,
            _ => Complex64::new(self.to_real().unwrap_or_default(), 0.0),
        }
    }

    /// Converts this value from radians to degrees. If it is a complex number, the real and
    /// imaginary parts are converted separately.
    pub fn into_degrees(self) -> Self {
        let convert = |n: f64| n * 180.0 / PI;
        match self {
            Value::Complex(c) => Value::Complex(Complex64::new(convert(c.re), convert(c.im))),
            _ => Value::Float(convert(self.to_real().unwrap_or_default())),
        }
    }

    /// Converts this value from degrees to radians. If it is a complex number, the real and
    /// imaginary parts are converted separately.
    pub fn into_radians(self) -> Self {
        let convert = |n: f64| n * PI / 180.0;
        match self {
            Value::Complex(c) => Value::Complex(Complex64::new(convert(c.re), convert(c.im))),
            _ => Value::Float(convert(self.to_real().unwrap_or_default())),
        }
    }

    /// Returns true if the two values are equal, within a small relative tolerance for floating
    /// point and complex values.
    pub fn approx_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            _ => {
                let (a, b) = (self.to_complex(), other.to_complex());
                let diff = (a - b).norm();
                diff == 0.0 || diff <= EQUATION_TOLERANCE * a.norm().max(b.norm())
            },
        }
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        match lit {
            Literal::Boolean(b) => Value::Boolean(b),
            Literal::Integer(n) => Value::Integer(n),
            Literal::Float(n) => Value::Float(n),
            Literal::Complex(c) => Value::Complex(c),
        }
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        match value {
            Value::Boolean(b) => Literal::Boolean(b),
            Value::Integer(n) => Literal::Integer(n),
            Value::Float(n) => Literal::Float(n),
            Value::Complex(c) => Literal::Complex(c),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Complex64> for Value {
    fn from(c: Complex64) -> Self {
        Value::Complex(c)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Literal::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_tolerates_rounding() {
        assert!(Value::Float(0.1 + 0.2).approx_eq(&Value::Float(0.3)));
        assert!(Value::Integer(3).approx_eq(&Value::Float(3.0)));
        assert!(Value::Boolean(true).approx_eq(&Value::Integer(1)));
        assert!(!Value::Float(1.0).approx_eq(&Value::Float(1.001)));
        assert!(!Value::Float(f64::NAN).approx_eq(&Value::Float(f64::NAN)));
    }

    #[test]
    fn finiteness() {
        assert!(Value::Integer(i64::MAX).is_finite());
        assert!(!Value::Float(f64::INFINITY).is_finite());
        assert!(!Value::Complex(Complex64::new(1.0, f64::NAN)).is_finite());
        assert_eq!(Value::Complex(Complex64::new(0.0, 1.0)).typename(), "Complex");
    }

    #[test]
    fn degrees_and_radians() {
        let value = Value::Integer(180).into_radians();
        assert!(value.approx_eq(&Value::Float(PI)));
        assert!(value.into_degrees().approx_eq(&Value::Integer(180)));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Boolean(true).to_string(), "True");
    }
}
