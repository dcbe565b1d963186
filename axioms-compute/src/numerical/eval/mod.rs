pub(crate) mod binary;
mod unary;

use axioms_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::error::Error;
use super::{ctxt::Ctxt, value::Value};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context. Returns [`None`] if
    /// the value is indeterminate, such as when a variable has no value in the context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Option<Value>, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<Option<Value>, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Node {
    fn eval(&self, ctxt: &Ctxt) -> Result<Option<Value>, Error> {
        match self {
            Node::Literal(lit) => Ok(Some((*lit).into())),
            Node::Symbol(name) => Ok(ctxt.get_var(name)),
            // calls are opaque, they cannot be applied
            Node::Call(..) => Ok(None),
            Node::Unary(op, operand) => Ok(
                operand.eval(ctxt)?
                    .map(|value| unary::eval_operand(*op, value, ctxt.trig_mode))
            ),
            Node::Binary(BinOpKind::Equation, lhs, rhs) => {
                binary::eval_equation(lhs.eval(ctxt)?, rhs.eval(ctxt)?)
            },
            Node::Binary(op, lhs, rhs) => {
                let (Some(left), Some(right)) = (lhs.eval(ctxt)?, rhs.eval(ctxt)?) else {
                    return Ok(None);
                };
                binary::eval_operands(*op, left, right)
            },
        }
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use axioms_parser::parser::parse;
    use crate::error::kind::{UnequalSides, ZeroToZero};
    use crate::numerical::trig_mode::TrigMode;
    use super::*;

    fn eval_with(source: &str, ctxt: &Ctxt) -> Option<Value> {
        parse(source).unwrap().eval(ctxt).unwrap()
    }

    fn eval_default(source: &str) -> Option<Value> {
        parse(source).unwrap().eval_default().unwrap()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_default("2+3*4"), Some(Value::Integer(14)));
        assert_eq!(eval_default("(1 + 9) / 5 * 3"), Some(Value::Float(6.0)));
        assert_eq!(eval_default("2^10 - 24"), Some(Value::Integer(1000)));
    }

    #[test]
    fn leading_minus() {
        assert_eq!(eval_default("-2^2"), Some(Value::Integer(-4)));
        assert_eq!(eval_default("(-2)^2"), Some(Value::Integer(4)));
    }

    #[test]
    fn unbound_variables_are_indeterminate() {
        assert_eq!(eval_default("a+1"), None);

        let ctxt = [("a", 2i64)].into_iter().collect::<Ctxt>();
        assert_eq!(eval_with("a+1", &ctxt), Some(Value::Integer(3)));
    }

    #[test]
    fn builtin_constants() {
        let value = eval_default("cos(pi)").unwrap();
        assert_float_absolute_eq!(value.to_real().unwrap(), -1.0);

        let value = eval_default("ln(e^2)").unwrap();
        assert_float_absolute_eq!(value.to_real().unwrap(), 2.0);
    }

    #[test]
    fn trig_mode() {
        let ctxt = Ctxt::new().with_trig_mode(TrigMode::Degrees);
        let value = eval_with("sin(90) + asin(1)", &ctxt).unwrap();
        assert_float_absolute_eq!(value.to_real().unwrap(), 91.0);
    }

    #[test]
    fn equation() {
        assert_eq!(eval_default("a=5"), Some(Value::Integer(5)));
        assert_eq!(eval_default("5=a"), Some(Value::Integer(5)));
        assert_eq!(eval_default("a=b"), None);
        assert_eq!(eval_default("2*3=6"), Some(Value::Integer(6)));

        let err = parse("2=3").unwrap().eval_default().unwrap_err();
        assert!(err.is::<UnequalSides>());
        assert!(matches!(err, Error::InvalidExpression(_)));
    }

    #[test]
    fn division_by_zero_is_indeterminate() {
        assert_eq!(eval_default("1/0"), None);
        assert_eq!(eval_default("1/0 + 2"), None);
        assert_eq!(eval_default("x = 1/0"), None);
    }

    #[test]
    fn zero_to_zero_is_an_error() {
        let err = parse("0^0").unwrap().eval_default().unwrap_err();
        assert!(err.is::<ZeroToZero>());
    }

    #[test]
    fn calls_are_indeterminate() {
        assert_eq!(eval_default("f(2)"), None);
        assert_eq!(eval_default("f(2) = 3"), Some(Value::Integer(3)));
    }

    #[test]
    fn logic() {
        assert_eq!(eval_default("!(1 < 2) | 3 < 4"), Some(Value::Boolean(true)));
        assert_eq!(eval_default("True & False"), Some(Value::Boolean(false)));
        assert_eq!(eval_default("2 == 2.0"), Some(Value::Boolean(true)));
    }
}
