use axioms_parser::parser::token::op::BinOpKind;
use crate::error::{kind::{InvalidOperands, UnequalSides, ZeroToZero}, Error};
use crate::numerical::value::Value;
use num_complex::Complex64;

/// Builds the error for an operator that does not apply to the given operand types.
fn invalid_operands(op: BinOpKind, left: Value, right: Value) -> Error {
    Error::invalid_expression(InvalidOperands {
        op: op.to_string(),
        operands: format!("`{}` and `{}`", left.typename(), right.typename()),
    })
}

/// Computes `left % right` with the sign of the divisor.
fn floor_mod_int(left: i64, right: i64) -> i64 {
    let rem = left.checked_rem(right).unwrap_or(0);
    if rem != 0 && (rem < 0) != (right < 0) {
        rem + right
    } else {
        rem
    }
}

/// Computes `left % right` with the sign of the divisor.
fn floor_mod_real(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}

/// Raises an integer to an integer power. Negative powers produce floats; powers too large for
/// an [`i64`] overflow into floats.
fn pow_integer(left: i64, right: i64) -> Result<Option<Value>, Error> {
    if left == 0 && right == 0 {
        return Err(Error::invalid_expression(ZeroToZero));
    }

    if right < 0 {
        if left == 0 {
            return Ok(None);
        }
        return Ok(Some(Value::Float((left as f64).powf(right as f64))));
    }

    Ok(Some(
        u32::try_from(right)
            .ok()
            .and_then(|right| left.checked_pow(right))
            .map_or_else(|| Value::Float((left as f64).powf(right as f64)), Value::Integer),
    ))
}

/// Raises a real number to a real power. A negative base with a fractional power produces a
/// complex number.
fn pow_real(left: f64, right: f64) -> Result<Option<Value>, Error> {
    if left == 0.0 && right == 0.0 {
        return Err(Error::invalid_expression(ZeroToZero));
    }

    if left == 0.0 && right < 0.0 {
        return Ok(None);
    }

    if left < 0.0 && right.fract() != 0.0 {
        return Ok(Some(Value::Complex(Complex64::new(left, 0.0).powf(right))));
    }

    Ok(Some(Value::Float(left.powf(right))))
}

/// Raises a complex number to a complex power.
fn pow_complex(left: Complex64, right: Complex64) -> Result<Option<Value>, Error> {
    let zero = Complex64::new(0.0, 0.0);
    if left == zero {
        if right == zero {
            return Err(Error::invalid_expression(ZeroToZero));
        }
        if right.re > 0.0 {
            return Ok(Some(Value::Complex(zero)));
        }
        return Ok(None);
    }

    // integer powers are computed by repeated multiplication to stay exact
    if right.im == 0.0 && right.re.fract() == 0.0 && right.re.abs() <= i32::MAX as f64 {
        return Ok(Some(Value::Complex(left.powi(right.re as i32))));
    }

    Ok(Some(Value::Complex(left.powc(right))))
}

/// Evaluates a binary expression with two integer operands. Arithmetic that overflows an [`i64`]
/// is carried out with floats instead.
fn eval_integer_operands(op: BinOpKind, left: i64, right: i64) -> Result<Option<Value>, Error> {
    let overflow = |checked: Option<i64>, fallback: f64| {
        checked.map_or(Value::Float(fallback), Value::Integer)
    };

    Ok(Some(match op {
        BinOpKind::Add => overflow(left.checked_add(right), left as f64 + right as f64),
        BinOpKind::Sub => overflow(left.checked_sub(right), left as f64 - right as f64),
        BinOpKind::Mul => overflow(left.checked_mul(right), left as f64 * right as f64),
        BinOpKind::Div => {
            if right == 0 {
                return Ok(None);
            }
            Value::Float(left as f64 / right as f64)
        },
        BinOpKind::Mod => {
            if right == 0 {
                return Ok(None);
            }
            Value::Integer(floor_mod_int(left, right))
        },
        BinOpKind::Exp => return pow_integer(left, right),
        BinOpKind::And => Value::Integer(left & right),
        BinOpKind::Or => Value::Integer(left | right),
        BinOpKind::Eq => Value::Boolean(left == right),
        BinOpKind::Less => Value::Boolean(left < right),
        BinOpKind::LessEq => Value::Boolean(left <= right),
        BinOpKind::Greater => Value::Boolean(left > right),
        BinOpKind::GreaterEq => Value::Boolean(left >= right),
        BinOpKind::Equation => return eval_equation(Some(Value::Integer(left)), Some(Value::Integer(right))),
    }))
}

/// Evaluates a binary expression with two real operands.
fn eval_real_operands(op: BinOpKind, left: f64, right: f64) -> Result<Option<Value>, Error> {
    Ok(Some(match op {
        BinOpKind::Add => Value::Float(left + right),
        BinOpKind::Sub => Value::Float(left - right),
        BinOpKind::Mul => Value::Float(left * right),
        BinOpKind::Div => {
            if right == 0.0 {
                return Ok(None);
            }
            Value::Float(left / right)
        },
        BinOpKind::Mod => {
            if right == 0.0 {
                return Ok(None);
            }
            Value::Float(floor_mod_real(left, right))
        },
        BinOpKind::Exp => return pow_real(left, right),
        BinOpKind::Eq => Value::Boolean(left == right),
        BinOpKind::Less => Value::Boolean(left < right),
        BinOpKind::LessEq => Value::Boolean(left <= right),
        BinOpKind::Greater => Value::Boolean(left > right),
        BinOpKind::GreaterEq => Value::Boolean(left >= right),
        BinOpKind::And | BinOpKind::Or => return Err(invalid_operands(op, Value::Float(left), Value::Float(right))),
        BinOpKind::Equation => return eval_equation(Some(Value::Float(left)), Some(Value::Float(right))),
    }))
}

/// Evaluates a binary expression with two complex operands.
fn eval_complex_operands(op: BinOpKind, left: Complex64, right: Complex64) -> Result<Option<Value>, Error> {
    Ok(Some(match op {
        BinOpKind::Add => Value::Complex(left + right),
        BinOpKind::Sub => Value::Complex(left - right),
        BinOpKind::Mul => Value::Complex(left * right),
        BinOpKind::Div => {
            if right.re == 0.0 && right.im == 0.0 {
                return Ok(None);
            }
            Value::Complex(left / right)
        },
        BinOpKind::Exp => return pow_complex(left, right),
        BinOpKind::Eq => Value::Boolean(left == right),
        BinOpKind::Mod | BinOpKind::And | BinOpKind::Or | BinOpKind::Less | BinOpKind::LessEq
            | BinOpKind::Greater | BinOpKind::GreaterEq => {
                return Err(invalid_operands(op, Value::Complex(left), Value::Complex(right)));
            },
        BinOpKind::Equation => return eval_equation(Some(Value::Complex(left)), Some(Value::Complex(right))),
    }))
}

/// Evaluates a binary expression with two boolean operands. Arithmetic and ordering treat the
/// booleans as the integers `0` and `1`.
fn eval_bool_operands(op: BinOpKind, left: bool, right: bool) -> Result<Option<Value>, Error> {
    Ok(Some(match op {
        BinOpKind::And => Value::Boolean(left && right),
        BinOpKind::Or => Value::Boolean(left || right),
        BinOpKind::Eq => Value::Boolean(left == right),
        _ => return eval_integer_operands(op, i64::from(left), i64::from(right)),
    }))
}

/// Evaluates both sides of an equation.
///
/// If only one side can be evaluated, its value is the value of the equation. If both can be
/// evaluated, they must be equal.
pub(crate) fn eval_equation(left: Option<Value>, right: Option<Value>) -> Result<Option<Value>, Error> {
    match (left, right) {
        (None, None) => Ok(None),
        (Some(value), None) | (None, Some(value)) => Ok(Some(value)),
        (Some(left), Some(right)) => {
            if left.approx_eq(&right) {
                Ok(Some(right))
            } else {
                Err(Error::invalid_expression(UnequalSides {
                    left: left.to_string(),
                    right: right.to_string(),
                }))
            }
        },
    }
}

/// Evaluates the binary expression given the operator, and the left and right operands.
///
/// Returns [`None`] if the result is indeterminate, such as when dividing by zero.
pub(crate) fn eval_operands(op: BinOpKind, left: Value, right: Value) -> Result<Option<Value>, Error> {
    if op == BinOpKind::Equation {
        return eval_equation(Some(left), Some(right));
    }

    if let (Value::Boolean(left), Value::Boolean(right)) = (left, right) {
        return eval_bool_operands(op, left, right);
    }

    if let (Some(left), Some(right)) = (left.to_integer(), right.to_integer()) {
        return eval_integer_operands(op, left, right);
    }

    if let (Some(left), Some(right)) = (left.to_real(), right.to_real()) {
        return eval_real_operands(op, left, right);
    }

    eval_complex_operands(op, left.to_complex(), right.to_complex())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(op: BinOpKind, left: impl Into<Value>, right: impl Into<Value>) -> Option<Value> {
        eval_operands(op, left.into(), right.into()).unwrap()
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(eval(BinOpKind::Add, 2i64, 3i64), Some(Value::Integer(5)));
        assert_eq!(eval(BinOpKind::Div, 7i64, 2i64), Some(Value::Float(3.5)));
        assert_eq!(eval(BinOpKind::Exp, 2i64, 10i64), Some(Value::Integer(1024)));
        assert_eq!(eval(BinOpKind::Exp, 2i64, -1i64), Some(Value::Float(0.5)));
        assert_eq!(eval(BinOpKind::Mul, i64::MAX, 2i64), Some(Value::Float(i64::MAX as f64 * 2.0)));
    }

    #[test]
    fn modulo_follows_divisor() {
        assert_eq!(eval(BinOpKind::Mod, -7i64, 3i64), Some(Value::Integer(2)));
        assert_eq!(eval(BinOpKind::Mod, 7i64, -3i64), Some(Value::Integer(-2)));
        assert_eq!(eval(BinOpKind::Mod, -7.5, 2.0), Some(Value::Float(0.5)));
    }

    #[test]
    fn indeterminate_results() {
        assert_eq!(eval(BinOpKind::Div, 1i64, 0i64), None);
        assert_eq!(eval(BinOpKind::Div, 1.5, 0.0), None);
        assert_eq!(eval(BinOpKind::Mod, 4i64, 0i64), None);
        assert_eq!(eval(BinOpKind::Exp, 0i64, -2i64), None);
    }

    #[test]
    fn zero_to_zero() {
        let err = eval_operands(BinOpKind::Exp, Value::Integer(0), Value::Float(0.0)).unwrap_err();
        assert!(err.is::<ZeroToZero>());
        assert!(matches!(err, Error::InvalidExpression(_)));
    }

    #[test]
    fn promotion() {
        assert_eq!(eval(BinOpKind::Add, true, true), Some(Value::Integer(2)));
        assert_eq!(eval(BinOpKind::Add, 1i64, 0.5), Some(Value::Float(1.5)));
        assert_eq!(
            eval(BinOpKind::Mul, 2i64, Complex64::new(0.0, 1.0)),
            Some(Value::Complex(Complex64::new(0.0, 2.0))),
        );
        assert!(matches!(eval(BinOpKind::Exp, -8.0, 0.5), Some(Value::Complex(_))));
    }

    #[test]
    fn logic_and_comparison() {
        assert_eq!(eval(BinOpKind::And, true, false), Some(Value::Boolean(false)));
        assert_eq!(eval(BinOpKind::Or, 6i64, 3i64), Some(Value::Integer(7)));
        assert_eq!(eval(BinOpKind::LessEq, 2i64, 2.5), Some(Value::Boolean(true)));

        let err = eval_operands(BinOpKind::And, Value::Float(1.5), Value::Integer(2)).unwrap_err();
        assert!(err.is::<InvalidOperands>());

        let err = eval_operands(
            BinOpKind::Less,
            Value::Complex(Complex64::new(0.0, 1.0)),
            Value::Integer(2),
        ).unwrap_err();
        assert_eq!(
            err.downcast_ref(),
            Some(&InvalidOperands { op: "<".into(), operands: "`Complex` and `Complex`".into() }),
        );
    }

    #[test]
    fn complex_integer_powers() {
        assert_eq!(
            eval(BinOpKind::Exp, Complex64::new(1.0, 2.0), 2i64),
            Some(Value::Complex(Complex64::new(-3.0, 4.0))),
        );
        assert_eq!(
            eval(BinOpKind::Exp, Complex64::new(0.0, 3.0), 1i64),
            Some(Value::Complex(Complex64::new(0.0, 3.0))),
        );
        assert_eq!(
            eval(BinOpKind::Exp, Complex64::new(0.0, 2.0), -1i64),
            Some(Value::Complex(Complex64::new(0.0, -0.5))),
        );
    }

    #[test]
    fn equation_sides() {
        assert_eq!(eval_equation(None, Some(Value::Integer(5))).unwrap(), Some(Value::Integer(5)));
        assert_eq!(eval_equation(None, None).unwrap(), None);
        assert_eq!(
            eval_equation(Some(Value::Float(0.1 + 0.2)), Some(Value::Float(0.3))).unwrap(),
            Some(Value::Float(0.3)),
        );

        let err = eval_equation(Some(Value::Integer(2)), Some(Value::Integer(3))).unwrap_err();
        assert_eq!(
            err.downcast_ref(),
            Some(&UnequalSides { left: "2".into(), right: "3".into() }),
        );
    }
}
