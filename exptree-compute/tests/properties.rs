use assert_float_eq::{
    afe_abs,
    afe_relative_error_msg,
    afe_is_relative_eq,
    assert_float_relative_eq,
};
use exptree_compute::{
    numerical::{eval, evaluate, Ctxt, EvalError, Evaluation},
    symbolic::{derivative, simplify, simplify_with_steps, DiffError, Step},
};
use exptree_parser::{
    parse,
    parser::{ast::{Expr, Number}, token::op::{BinOpKind, FuncKind}},
    ParseError,
};
use pretty_assertions::assert_eq;

fn x() -> Expr {
    Expr::var("x")
}

fn y() -> Expr {
    Expr::var("y")
}

/// Evaluates the expression with `x` bound to the given value.
fn eval_x(expr: &Expr, x: f64) -> f64 {
    let ctxt = [("x", x)].into_iter().collect::<Ctxt>();
    eval(expr, &ctxt).unwrap().to_f64()
}

#[test]
fn printed_trees_simplify_like_their_source() {
    let trees = [
        x() * Expr::int(0) + y(),
        (x() + Expr::int(0)) * (Expr::int(2) + Expr::int(3)),
        Expr::int(1).pow(x()) - -y(),
        Expr::call(FuncKind::Exp, Expr::int(0)) * Expr::call(FuncKind::Sin, x() / Expr::int(1)),
        (x() * x()).pow(Expr::int(1)) / (y() - Expr::int(0)),
        -(Expr::int(2) * (Expr::int(3) * x())),
    ];

    for tree in trees {
        let reparsed = parse(&tree.to_string()).unwrap();
        assert_eq!(simplify(&reparsed), simplify(&tree), "printed as `{}`", tree);
    }
}

#[test]
fn derivatives_of_leaves() {
    assert_eq!(derivative(&Expr::int(5), "x"), Ok(Expr::int(0)));
    assert_eq!(derivative(&x(), "x"), Ok(Expr::int(1)));
}

#[test]
fn derivative_of_square() {
    let derived = simplify(&derivative(&parse("x**2").unwrap(), "x").unwrap());
    assert_eq!(derived, Expr::int(2) * x());
    assert_eq!(derived, x() * Expr::int(2));
}

#[test]
fn simplify_is_idempotent() {
    let sources = [
        "2 + 3 * 4",
        "x * 0 + y * 1",
        "(1 + x) * (3 * x ** 2)",
        "-(-(x - 0)) / (1 ** y)",
        "x * x * 2 * x",
        "sin(x) * 0.5 * (4 * cos(x))",
        "log(x) ** 0 + exp(0) - 2",
        "2 ^ x + 7 % (y - y)",
    ];

    for source in sources {
        let once = simplify(&parse(source).unwrap());
        assert_eq!(simplify(&once), once, "{}", source);
    }
}

#[test]
fn constant_folding() {
    assert_eq!(simplify(&parse("2+3*4").unwrap()), Expr::Constant(Number::Integer(14)));
    assert_eq!(simplify(&parse("5 ^ 3").unwrap()), Expr::int(6));
    assert_eq!(simplify(&parse("7 % -2").unwrap()), -Expr::int(1));
}

#[test]
fn identity_laws() {
    assert_eq!(simplify(&parse("x*0").unwrap()), Expr::int(0));
    assert_eq!(simplify(&parse("x+0").unwrap()), x());
    assert_eq!(simplify(&parse("x**1").unwrap()), x());
}

#[test]
fn error_scenarios() {
    assert!(matches!(
        parse("(1+2"),
        Err(ParseError::MismatchedParenthesis { opening: true, .. }),
    ));
    assert_eq!(eval(&parse("1/0").unwrap(), &Ctxt::new()), Err(EvalError::DivisionByZero));
    assert_eq!(
        derivative(&parse("2^3").unwrap(), "x"),
        Err(DiffError::NotDifferentiable { op: BinOpKind::Xor }),
    );
}

#[test]
fn evaluation_errors_survive_simplification() {
    let simplified = simplify(&parse("x + 1 / (y - y)").unwrap());
    let ctxt = [("x", 1i64), ("y", 2i64)].into_iter().collect::<Ctxt>();
    assert_eq!(eval(&simplified, &ctxt), Err(EvalError::DivisionByZero));

    let simplified = simplify(&parse("log(3 - 3) * 2").unwrap());
    assert_eq!(eval(&simplified, &Ctxt::new()), Err(EvalError::LogOfNonPositive));
}

#[test]
fn differentiate_then_simplify() {
    let expr = parse("(1+x)*(3*x**2)").unwrap();
    let (derived, steps) = simplify_with_steps(&derivative(&expr, "x").unwrap());

    assert_eq!(derived, parse("3 * x ** 2 + 6 * x * (1 + x)").unwrap());
    assert!(steps.contains(&Step::MultiplyZero));
    assert!(steps.contains(&Step::GatherCoefficients));

    let expected = parse("6*x + 9*x**2").unwrap();
    for point in [-2.0, -0.5, 1.0, 3.0] {
        assert_float_relative_eq!(eval_x(&derived, point), eval_x(&expected, point));
    }
}

#[test]
fn partial_evaluation() {
    let expr = parse("a * x ** 2 + b * x + c").unwrap();
    let ctxt = [("a", 1i64), ("b", 0i64), ("c", -4i64)].into_iter().collect::<Ctxt>();

    let result = evaluate(&expr, &ctxt).unwrap();
    assert_eq!(result, Evaluation::Partial(parse("x ** 2 + -4").unwrap()));
    assert_eq!(result.to_string(), "x ** 2 + -4");

    let mut ctxt = ctxt;
    ctxt.add_var("x", 3i64);
    assert_eq!(evaluate(&expr, &ctxt), Ok(Evaluation::Number(Number::Integer(5))));
}

#[test]
fn partial_evaluation_reports_undefined_constants() {
    assert_eq!(evaluate(&parse("y + 1/0").unwrap(), &Ctxt::new()), Err(EvalError::DivisionByZero));
    assert_eq!(
        evaluate(&parse("y * log(0)").unwrap(), &Ctxt::new()),
        Err(EvalError::LogOfNonPositive),
    );
    assert_eq!(
        evaluate(&parse("y + log(0)").unwrap(), &Ctxt::new()),
        Err(EvalError::LogOfNonPositive),
    );

    // folding still works around unbound variables
    assert_eq!(
        evaluate(&parse("y + 1/2").unwrap(), &Ctxt::new()),
        Ok(Evaluation::Partial(y() + Expr::float(0.5))),
    );
}

#[test]
fn derivative_at_a_point() {
    let expr = parse("x ** 3 - 2 * x").unwrap();
    let derived = simplify(&derivative(&expr, "x").unwrap());

    let ctxt = [("x", 2i64)].into_iter().collect::<Ctxt>();
    assert_eq!(evaluate(&derived, &ctxt), Ok(Evaluation::Number(Number::Integer(10))));
}
