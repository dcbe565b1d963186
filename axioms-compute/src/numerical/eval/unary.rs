use axioms_parser::parser::token::op::UnaryOpKind;
use crate::numerical::{trig_mode::TrigMode, value::Value};
use num_complex::Complex64;

/// Evaluates a named function on a real argument.
fn eval_real(op: UnaryOpKind, x: f64) -> f64 {
    match op {
        UnaryOpKind::Sin => x.sin(),
        UnaryOpKind::Cos => x.cos(),
        UnaryOpKind::Tan => x.tan(),
        UnaryOpKind::Csc => x.sin().recip(),
        UnaryOpKind::Sec => x.cos().recip(),
        UnaryOpKind::Cot => x.tan().recip(),
        UnaryOpKind::Asin => x.asin(),
        UnaryOpKind::Acos => x.acos(),
        UnaryOpKind::Atan => x.atan(),
        UnaryOpKind::Ln => x.ln(),
        UnaryOpKind::Exp => x.exp(),
        UnaryOpKind::Not => f64::from(u8::from(x == 0.0)),
    }
}

/// Evaluates a named function on a complex argument.
fn eval_complex(op: UnaryOpKind, z: Complex64) -> Complex64 {
    match op {
        UnaryOpKind::Sin => z.sin(),
        UnaryOpKind::Cos => z.cos(),
        UnaryOpKind::Tan => z.tan(),
        UnaryOpKind::Csc => z.sin().inv(),
        UnaryOpKind::Sec => z.cos().inv(),
        UnaryOpKind::Cot => z.tan().inv(),
        UnaryOpKind::Asin => z.asin(),
        UnaryOpKind::Acos => z.acos(),
        UnaryOpKind::Atan => z.atan(),
        UnaryOpKind::Ln => z.ln(),
        UnaryOpKind::Exp => z.exp(),
        UnaryOpKind::Not => Complex64::new(f64::from(u8::from(z.re == 0.0 && z.im == 0.0)), 0.0),
    }
}

/// Evaluates a unary operator on its evaluated operand.
///
/// Real arguments produce real results, which are `NaN` outside of the function's real domain
/// (such as `ln(-1)`). In [`TrigMode::Degrees`], the arguments of trigonometric functions are
/// converted to radians, and the results of inverse trigonometric functions are converted to
/// degrees.
pub(crate) fn eval_operand(op: UnaryOpKind, operand: Value, trig_mode: TrigMode) -> Value {
    if op == UnaryOpKind::Not {
        return Value::Boolean(!operand.is_truthy());
    }

    let operand = if op.is_trig() && trig_mode == TrigMode::Degrees {
        operand.into_radians()
    } else {
        operand
    };

    let result = match operand {
        Value::Complex(z) => Value::Complex(eval_complex(op, z)),
        _ => Value::Float(eval_real(op, operand.to_real().unwrap_or_default())),
    };

    if op.is_inverse_trig() && trig_mode == TrigMode::Degrees {
        result.into_degrees()
    } else {
        result
    }
}
