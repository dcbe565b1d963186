use axioms_compute::{
    error::kind::{NoDerivativeRule, NoInverse, UnknownVariable, UnequalSides, ZeroToZero},
    parse,
    CanonicalOptions,
    Ctxt,
    Direction,
    Error,
    Expression,
    SolveOptions,
    Value,
};
use axioms_parser::parser::error::UnclosedParenthesis;
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Evaluates the expression, panicking if it is indeterminate.
fn value_of(expr: &Expression, ctxt: &Ctxt) -> Value {
    expr.evaluate(ctxt)
        .unwrap()
        .unwrap_or_else(|| panic!("`{expr}` is indeterminate"))
}

fn ctxt_with_x(x: f64) -> Ctxt {
    [("x", x)].into_iter().collect()
}

#[test]
fn round_trip() {
    let sources = [
        "2+3*4",
        "a*x+b=c",
        "(x+1)*(x-1)",
        "x^2-2*x+1",
        "-2*x+3",
        "-x^2",
        "2^(-x)",
        "a-(b-c)",
        "(a-b)-c",
        "x/(y/z)",
        "(x/y)/z",
        "sin(x)^2+cos(x)^2",
        "exp(-1*t)*sin(2*pi*t)",
        "ln(abs)+asin(x)/acos(x)",
        "f(x,y)*g()",
        "a<=b|!(c==d)&e>f",
        "x%3=1",
        "2.5*x-0.125",
        "(-1.5)^2",
        "3j+1",
    ];

    for source in sources {
        let expr = parse(source).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        assert_eq!(reparsed, expr, "{source} -> {expr}");
    }
}

#[test]
fn evaluate() {
    let empty = Ctxt::new();
    assert_eq!(parse("2+3*4").unwrap().evaluate(&empty).unwrap(), Some(Value::Integer(14)));

    let expr = parse("a+1").unwrap();
    assert_eq!(expr.evaluate(&empty).unwrap(), None);

    let ctxt = [("a", 2i64)].into_iter().collect::<Ctxt>();
    assert_eq!(expr.evaluate(&ctxt).unwrap(), Some(Value::Integer(3)));

    assert_eq!(parse("a=5").unwrap().evaluate(&empty).unwrap(), Some(Value::Integer(5)));

    let err = parse("2=3").unwrap().evaluate(&empty).unwrap_err();
    assert!(matches!(err, Error::InvalidExpression(_)));
    assert!(err.is::<UnequalSides>());
}

#[test]
fn zero_to_zero() {
    let err = parse("0^0").unwrap().evaluate(&Ctxt::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidExpression(_)));
    assert!(err.is::<ZeroToZero>());
}

#[test]
fn parse_error() {
    let err = parse("(a+b").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(err.is::<UnclosedParenthesis>());

    let err = "a b".parse::<Expression>().unwrap_err();
    assert_eq!(err.category(), "parse error");
}

#[test]
fn derivative_of_polynomial() {
    let derivative = parse("x^2").unwrap().derivative("x").unwrap();
    let expected = parse("2*x").unwrap();

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..32 {
        let ctxt = ctxt_with_x(rng.gen_range(-10.0..10.0));
        let (actual, expected) = (value_of(&derivative, &ctxt), value_of(&expected, &ctxt));
        assert!(actual.approx_eq(&expected), "{actual} != {expected}");
    }
}

#[test]
fn derivative_of_sin() {
    let derivative = parse("sin(x)").unwrap().derivative("x").unwrap();
    let expected = parse("cos(x)").unwrap();

    let mut rng = StdRng::seed_from_u64(0xc05);
    for _ in 0..32 {
        let ctxt = ctxt_with_x(rng.gen_range(-10.0..10.0));
        let (actual, expected) = (value_of(&derivative, &ctxt), value_of(&expected, &ctxt));
        assert!(actual.approx_eq(&expected), "{actual} != {expected}");
    }
}

#[test]
fn derivative_matches_known_formulas() {
    let cases = [
        ("x*sin(x)", "sin(x)+x*cos(x)"),
        ("exp(2*x)", "2*exp(2*x)"),
        ("ln(x^2)", "2/x"),
        ("atan(x)", "1/(1+x^2)"),
        ("x^x", "x^x*(ln(x)+1)"),
        ("1/x", "-1/x^2"),
        ("tan(x)+sec(x)", "sec(x)^2+sec(x)*tan(x)"),
    ];

    let mut rng = StdRng::seed_from_u64(42);
    for (source, formula) in cases {
        let derivative = parse(source).unwrap().derivative("x").unwrap();
        let formula = parse(formula).unwrap();

        for _ in 0..16 {
            // positive, so that `ln(x)` and `x^x` are real
            let ctxt = ctxt_with_x(rng.gen_range(0.1..1.5));
            let (actual, expected) = (value_of(&derivative, &ctxt), value_of(&formula, &ctxt));
            assert!(actual.approx_eq(&expected), "d/dx {source}: {actual} != {expected}");
        }
    }
}

#[test]
fn derivative_errors() {
    let err = parse("f(x)+x").unwrap().derivative("x").unwrap_err();
    assert!(matches!(err, Error::Differentiation(_)));
    assert!(err.is::<NoDerivativeRule>());
}

#[test]
fn solution_satisfies_equation() {
    let equation = parse("a*x+b=c").unwrap();
    let solution = equation.solve_for("x").unwrap();
    let lhs = parse("a*x+b").unwrap().substitute("x", &solution);

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..64 {
        let a = loop {
            let a: f64 = rng.gen_range(-100.0..100.0);
            if a.abs() > 1e-3 {
                break a;
            }
        };
        let b: f64 = rng.gen_range(-100.0..100.0);
        let c: f64 = rng.gen_range(-100.0..100.0);
        let ctxt = [("a", a), ("b", b), ("c", c)].into_iter().collect::<Ctxt>();

        let left = value_of(&lhs, &ctxt);
        assert!(left.approx_eq(&Value::Float(c)), "a={a} b={b} c={c}: {left} != {c}");

        // the equation itself now evaluates without unequal sides
        let substituted = equation.substitute("x", &solution);
        assert!(substituted.evaluate(&ctxt).is_ok());
    }
}

#[test]
fn solve_with_options() {
    let expr = parse("y = 2*x").unwrap();
    let solution = expr.solve_for_with("x", SolveOptions { include_var: true }).unwrap();
    assert_eq!(solution.to_string(), "x=y/2");
}

#[test]
fn solve_errors() {
    let err = parse("y = 2*x").unwrap().solve_for("z").unwrap_err();
    assert!(matches!(err, Error::Lookup(_)));
    assert!(err.is::<UnknownVariable>());

    let err = parse("x % 2 = 1").unwrap().solve_for("x").unwrap_err();
    assert!(matches!(err, Error::Inversion(_)));
    assert!(err.is::<NoInverse>());
}

#[test]
fn canonical_form_is_idempotent() {
    let sources = [
        "(x+1)*(x-1)",
        "(x+y)^2",
        "(a+b)*(a-b)*c",
        "x*2*x/4",
        "3*x^2-4*x+7-x^2",
        "exp(x)*exp(-1*x)",
        "sin(x+x)*cos(2*x)",
        "a/b/c",
        "y = (x+1)^2 - 1",
        "2^x*2^y",
    ];

    for source in sources {
        let once = parse(source).unwrap().canonical_form().unwrap();
        let twice = once.canonical_form().unwrap();
        assert_eq!(twice, once, "{source}");
    }
}

#[test]
fn engine_output_reparses() {
    let canonical_sources = [
        "(x+1)*(x-1)",
        "(x+y)^2",
        "(a+b)*(a-b)*c",
        "x*2*x/4",
        "3*x^2-4*x+7-x^2",
        "exp(x)*exp(-1*x)",
        "sin(x+x)*cos(2*x)",
        "a/b/c",
        "y = (x+1)^2 - 1",
        "2^x*2^y",
        "3j*x",
        "(1+2j)*x",
        "x+(1+2j)",
        "2j*x-3",
        "x*10^400",
    ];
    for source in canonical_sources {
        let once = parse(source).unwrap().canonical_form().unwrap();
        assert_eq!(parse(&once.to_string()).unwrap(), once, "{source} -> {once}");
    }

    let derivative_sources = ["x^3+x", "sin(x)*x", "(1+2j)*x^2", "ln(x)*x", "exp(x)/x"];
    for source in derivative_sources {
        let derivative = parse(source).unwrap().derivative("x").unwrap();
        assert_eq!(parse(&derivative.to_string()).unwrap(), derivative, "{source} -> {derivative}");
    }

    let equations = ["a*x+b=c", "y = 2*x", "exp(x) = y", "(1+2j)*x = 3"];
    for source in equations {
        let solution = parse(source).unwrap().solve_for("x").unwrap();
        assert_eq!(parse(&solution.to_string()).unwrap(), solution, "{source} -> {solution}");
    }
}

#[test]
fn canonical_form_keeps_complex_constants() {
    assert_eq!(parse("3j").unwrap().canonical_form().unwrap().to_string(), "3.0j");
    assert_eq!(parse("2j*x-3").unwrap().canonical_form().unwrap().to_string(), "2.0j*x-3");
    assert_eq!(parse("(1+2j)*x").unwrap().canonical_form().unwrap().to_string(), "(1.0+2.0j)*x");

    let derivative = parse("(1+2j)*x^2").unwrap().derivative("x").unwrap();
    assert_eq!(derivative.to_string(), "(2.0+4.0j)*x");
}

#[test]
fn canonical_form_preserves_value() {
    let sources = ["(x+1)*(x-1)", "(x+2)^2*x", "x*2*x/4", "(1-x)*(x+3)-x"];

    let mut rng = StdRng::seed_from_u64(1234);
    for source in sources {
        let expr = parse(source).unwrap();
        let canonical = expr.canonical_form_with(CanonicalOptions::default()).unwrap();

        for _ in 0..16 {
            let ctxt = ctxt_with_x(rng.gen_range(-5.0..5.0));
            let (before, after) = (value_of(&expr, &ctxt), value_of(&canonical, &ctxt));
            assert!(before.approx_eq(&after), "{source} -> {canonical}: {before} != {after}");
        }
    }
}

#[test]
fn simplify_steps() {
    let (expr, steps) = parse("x*1+0").unwrap().simplify_with_steps().unwrap();
    assert_eq!(expr.to_string(), "x");
    assert_eq!(steps.len(), 2);
    assert_eq!(parse("exp(ln(y))").unwrap().simplify().unwrap().to_string(), "y");
}

#[test]
fn variable_occurrences() {
    let expr = parse("x + y*x").unwrap();
    let index = expr.variable_occurrences();

    assert_eq!(index.keys().map(String::as_str).collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(index["x"], vec![
        vec![Direction::Left],
        vec![Direction::Right, Direction::Right],
    ]);
    assert_eq!(index["y"], vec![vec![Direction::Right, Direction::Left]]);
}
