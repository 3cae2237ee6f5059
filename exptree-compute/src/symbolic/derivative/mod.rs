use ariadne::Fmt;
use exptree_attrs::ErrorKind;
use exptree_error::EXPR;
use exptree_parser::parser::{
    ast::{Binary, Expr, Unary},
    token::op::{BinOpKind, FuncKind, UnaryOpKind},
};

mod function;

/// An error that can occur while differentiating an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
pub enum DiffError {
    /// The expression uses an operator that has no derivative.
    #[error(
        message = format!("the `{}` operator cannot be differentiated", op),
        labels = ["this expression"],
        help = format!(
            "only {} and the built-in functions can be differentiated",
            "+ - * / **".fg(EXPR),
        ),
    )]
    NotDifferentiable {
        /// The operator.
        op: BinOpKind,
    },
}

/// `(f * g)' = f' * g + g' * f`
fn product_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, DiffError> {
    Ok(derivative(f, var)? * g.clone() + derivative(g, var)? * f.clone())
}

/// `(f / g)' = (f' * g - g' * f) / g ** 2`
fn quotient_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, DiffError> {
    let numerator = derivative(f, var)? * g.clone() - derivative(g, var)? * f.clone();
    Ok(numerator / g.clone().pow(Expr::int(2)))
}

/// `(f ** g)' = f ** (g - 1) * (g * f' + f * log(f) * g')`
///
/// When `g` does not contain `var`, the second addend is left out, leaving the elementary power
/// rule `f ** (g - 1) * (g * f')`, which also holds for negative `f`. When only `f` does not
/// contain `var`, the first addend is left out instead.
fn power_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, DiffError> {
    let f_varies = f.variables().contains(var);
    let g_varies = g.variables().contains(var);

    let log_term = || f.clone() * Expr::call(FuncKind::Log, f.clone());
    let inner = match (f_varies, g_varies) {
        (_, false) => g.clone() * derivative(f, var)?,
        (false, true) => log_term() * derivative(g, var)?,
        (true, true) => g.clone() * derivative(f, var)? + log_term() * derivative(g, var)?,
    };

    Ok(f.clone().pow(g.clone() - Expr::int(1)) * inner)
}

fn binary_derivative(binary: &Binary, var: &str) -> Result<Expr, DiffError> {
    let (f, g) = (&*binary.lhs, &*binary.rhs);
    match binary.op {
        BinOpKind::Add => Ok(derivative(f, var)? + derivative(g, var)?),
        BinOpKind::Sub => Ok(derivative(f, var)? - derivative(g, var)?),
        BinOpKind::Mul => product_rule(f, g, var),
        BinOpKind::Div => quotient_rule(f, g, var),
        BinOpKind::Pow => power_rule(f, g, var),
        op @ (BinOpKind::Mod | BinOpKind::Xor) => Err(DiffError::NotDifferentiable { op }),
    }
}

fn unary_derivative(unary: &Unary, var: &str) -> Result<Expr, DiffError> {
    match unary.op {
        UnaryOpKind::Neg => Ok(-derivative(&unary.operand, var)?),
    }
}

/// Computes the derivative of the given expression with respect to the variable `var`. Every
/// other variable is treated as a constant.
///
/// The result is built directly from the differentiation rules and is not simplified. Returns
/// [`DiffError::NotDifferentiable`] if the expression uses `%` or `^`.
pub fn derivative(expr: &Expr, var: &str) -> Result<Expr, DiffError> {
    match expr {
        Expr::Constant(_) => Ok(Expr::int(0)),
        Expr::Variable(name) => if name == var {
            Ok(Expr::int(1))
        } else {
            Ok(Expr::int(0))
        },
        Expr::Binary(binary) => binary_derivative(binary, var),
        Expr::Unary(unary) => unary_derivative(unary, var),
        Expr::Call(call) => function::function_derivative(call, var),
    }
}

#[cfg(test)]
mod tests {
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use exptree_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Evaluates the expression with `x` bound to the given value.
    fn eval_x(expr: &Expr, x: f64) -> f64 {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        expr.eval(&ctxt).unwrap().to_f64()
    }

    /// Approximates the derivative of the expression at `x` with a central difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(expr, x + DX) - eval_x(expr, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let expr = parse(function).unwrap();
        let symbolic = derivative(&expr, "x")
            .unwrap_or_else(|_| panic!("derivative of \"{function}\" should be computable"));

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "For \"{function}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
            );
        }
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative(&Expr::int(5), "x"), Ok(Expr::int(0)));
        assert_eq!(derivative(&Expr::float(2.5), "x"), Ok(Expr::int(0)));
        assert_eq!(derivative(&Expr::var("x"), "x"), Ok(Expr::int(1)));
        assert_eq!(derivative(&Expr::var("y"), "x"), Ok(Expr::int(0)));
    }

    #[test]
    fn rules_are_not_simplified() {
        assert_eq!(
            derivative(&parse("x ** 2").unwrap(), "x"),
            Ok(parse("x ** (2 - 1) * (2 * 1)").unwrap()),
        );
        assert_eq!(
            derivative(&parse("x * y").unwrap(), "x"),
            Ok(parse("1 * y + 0 * x").unwrap()),
        );
        assert_eq!(
            derivative(&parse("-sin(x)").unwrap(), "x"),
            Ok(parse("-(1 * cos(x))").unwrap()),
        );
    }

    #[test]
    fn exponential_power_rule() {
        assert_eq!(
            derivative(&parse("2 ** x").unwrap(), "x"),
            Ok(parse("2 ** (x - 1) * (2 * log(2) * 1)").unwrap()),
        );
    }

    #[test]
    fn constant_exponent_has_no_log() {
        let symbolic = derivative(&parse("x ** (3 - 1)").unwrap(), "x").unwrap();
        assert_eq!(symbolic, parse("x ** ((3 - 1) - 1) * ((3 - 1) * 1)").unwrap());
        assert_eq!(eval_x(&symbolic, -2.0), -4.0);

        let symbolic = derivative(&parse("(1 + 1) ** x").unwrap(), "x").unwrap();
        assert_eq!(symbolic, parse("(1 + 1) ** (x - 1) * ((1 + 1) * log(1 + 1) * 1)").unwrap());
    }

    #[test]
    fn not_differentiable() {
        assert_eq!(
            derivative(&parse("2 ^ 3").unwrap(), "x"),
            Err(DiffError::NotDifferentiable { op: BinOpKind::Xor }),
        );
        assert_eq!(
            derivative(&parse("sin(x % 3) + 1").unwrap(), "x"),
            Err(DiffError::NotDifferentiable { op: BinOpKind::Mod }),
        );
    }

    #[test]
    fn power_rule() {
        test_for_function("x ** 2 + x + 1", [0., 1., 2., 5., 8.]);
        test_for_function("-x ** 3", [-2., -0.5, 1.]);
        test_for_function("x ** 3 / (x + 2)", [-1., 0., 1.5]);
    }

    #[test]
    fn generalized_power_rule() {
        test_for_function("x ** x", [0.5, 1., 2.]);
        test_for_function("2 ** x", [-1., 0., 3.]);
        test_for_function("x ** (2 * x + 1)", [0.25, 1.]);
    }

    #[test]
    fn product_and_quotient_rules() {
        test_for_function("(1 + x) * (3 * x ** 2)", [-2., 0.5, 3.]);
        test_for_function("(x - 1) / (x ** 2 + 1)", [-3., 0., 2.]);
    }

    #[test]
    fn chain_rule() {
        test_for_function("sin(x) * cos(x)", [0., 1., 2.5]);
        test_for_function("tan(x)", [-1., 0., 0.5, 1.]);
        test_for_function("log(x) / x", [0.5, 1., 4.]);
        test_for_function("exp(2 * x) - x", [-1., 0., 1.]);
        test_for_function("sin(cos(x ** 2))", [-1., 0.3, 1.2]);
    }

    #[test]
    fn other_variables_are_constant() {
        let expr = parse("a * x ** 2 + b").unwrap();
        let symbolic = derivative(&expr, "x").unwrap();

        let ctxt = [("a", 3i64), ("b", 7i64), ("x", 2i64)].into_iter().collect::<Ctxt>();
        assert_eq!(symbolic.eval(&ctxt).unwrap().to_f64(), 12.0);
    }
}
