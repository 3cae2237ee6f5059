mod binary;
mod call;
mod expr;
mod unary;

use exptree_parser::parser::ast::{Binary, Call, Expr, Number, Unary};
use std::fmt;
use super::{ctxt::Ctxt, error::EvalError};
use crate::symbolic::simplify;

pub use binary::eval_binary_op;
pub use call::eval_func;
pub use unary::eval_unary_op;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Number, EvalError>;

    /// Evaluate the expression to produce a number, using the default context.
    fn eval_default(&self) -> Result<Number, EvalError> {
        self.eval(&Default::default())
    }
}

/// Rejects infinite and NaN results, and turns integral floats into integers.
pub(crate) fn finite(number: Number) -> Result<Number, EvalError> {
    match number {
        Number::Float(float) if !float.is_finite() => Err(EvalError::NonFinite),
        number => Ok(number.normalize()),
    }
}

/// Evaluates the expression to a number. Every variable in the expression must be bound in the
/// context.
pub fn eval(expr: &Expr, ctxt: &Ctxt) -> Result<Number, EvalError> {
    expr.eval(ctxt)
}

/// The result of [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Evaluation {
    /// Every variable was bound, and the expression evaluated to this number.
    Number(Number),

    /// Some variables were not bound. The bound ones were substituted and the result simplified.
    Partial(Expr),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Partial(expr) => write!(f, "{}", expr),
        }
    }
}

/// Evaluates every largest subtree that has no variables, and returns the first error.
fn check_constant_subtrees(expr: &Expr) -> Result<(), EvalError> {
    if !expr.has_variables() {
        return expr.eval(&Ctxt::new()).map(|_| ());
    }

    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Ok(()),
        Expr::Binary(binary) => {
            check_constant_subtrees(&binary.lhs)?;
            check_constant_subtrees(&binary.rhs)
        },
        Expr::Unary(unary) => check_constant_subtrees(&unary.operand),
        Expr::Call(call) => check_constant_subtrees(&call.arg),
    }
}

/// Evaluates the expression as far as the context allows.
///
/// If every variable is bound, the expression is evaluated to a number with [`eval`]. Otherwise,
/// the bound variables are replaced with their values and the resulting tree is simplified.
///
/// In both cases, a subtree without variables that cannot be evaluated (such as `1 / 0` or
/// `log(0)`) is an error. It is checked before simplifying, since a rule like `x * 0 = 0` may
/// discard it, and after, since a rule like `x - x = 0` may produce it.
pub fn evaluate(expr: &Expr, ctxt: &Ctxt) -> Result<Evaluation, EvalError> {
    let fully_bound = expr.variables()
        .into_iter()
        .all(|name| ctxt.get_var(name).is_some());

    if fully_bound {
        return eval(expr, ctxt).map(Evaluation::Number);
    }

    let substituted = substitute(expr, ctxt);
    check_constant_subtrees(&substituted)?;

    let simplified = simplify(&substituted);
    check_constant_subtrees(&simplified)?;
    Ok(Evaluation::Partial(simplified))
}

/// Replaces every variable bound in the context with its value. Negative values are inserted as
/// negations of their absolute value.
pub fn substitute(expr: &Expr, ctxt: &Ctxt) -> Expr {
    match expr {
        Expr::Constant(_) => expr.clone(),
        Expr::Variable(name) => ctxt.get_var(name)
            .map_or_else(|| expr.clone(), Expr::from_number),
        Expr::Binary(binary) => Expr::Binary(Binary::new(
            substitute(&binary.lhs, ctxt),
            binary.op,
            substitute(&binary.rhs, ctxt),
        )),
        Expr::Unary(unary) => Expr::Unary(Unary::new(unary.op, substitute(&unary.operand, ctxt))),
        Expr::Call(call) => Expr::Call(Call::new(call.func, substitute(&call.arg, ctxt))),
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use exptree_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval_str(source: &str) -> Result<Number, EvalError> {
        parse(source).unwrap().eval_default()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_str("1 + 2"), Ok(Number::Integer(3)));
        assert_eq!(eval_str("1 + 2 * 3"), Ok(Number::Integer(7)));
    }

    #[test]
    fn binary_and_unary() {
        assert_eq!(eval_str("3 * -5 / 8 + 6"), Ok(Number::Float(4.125)));
        assert_eq!(eval_str("-2 ** 2"), Ok(Number::Integer(4)));
        assert_eq!(eval_str("2 ** -2"), Ok(Number::Float(0.25)));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_str("((1 + 9) / 5) * 3"), Ok(Number::Integer(6)));
    }

    #[test]
    fn degree_to_radian() {
        let value = eval_str("90 * 2 * pi / 360").unwrap();
        assert_float_relative_eq!(value.to_f64(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn functions() {
        let value = eval_str("sin(pi / 2) + cos(0) * exp(1)").unwrap();
        assert_float_relative_eq!(value.to_f64(), 1.0 + std::f64::consts::E);
        let value = eval_str("log(exp(2))").unwrap();
        assert_float_relative_eq!(value.to_f64(), 2.0);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval(&parse("1/0").unwrap(), &Ctxt::new()), Err(EvalError::DivisionByZero));
        assert_eq!(eval_str("5 % (2 - 2)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unbound_variable() {
        let ctxt = [("x", 1i64)].into_iter().collect::<Ctxt>();
        assert_eq!(
            eval(&parse("x + y").unwrap(), &ctxt),
            Err(EvalError::UnboundVariable {
                name: "y".to_string(),
                suggestions: vec!["x".to_string()],
            }),
        );
    }

    #[test]
    fn log_of_negative() {
        assert_eq!(eval_str("log(1 - 3)"), Err(EvalError::LogOfNonPositive));
    }

    #[test]
    fn evaluate_fully_bound() {
        let ctxt = [("x", 3i64), ("y", 4i64)].into_iter().collect::<Ctxt>();
        let result = evaluate(&parse("x ** 2 + y ** 2").unwrap(), &ctxt).unwrap();
        assert_eq!(result, Evaluation::Number(Number::Integer(25)));
        assert_eq!(result.to_string(), "25");
    }

    #[test]
    fn evaluate_partially() {
        let ctxt = [("x", 2i64)].into_iter().collect::<Ctxt>();
        let result = evaluate(&parse("x * y + x ** 3").unwrap(), &ctxt).unwrap();
        assert_eq!(result, Evaluation::Partial(parse("2 * y + 8").unwrap()));

        let result = evaluate(&parse("y * x * 0").unwrap(), &ctxt).unwrap();
        assert_eq!(result, Evaluation::Partial(Expr::int(0)));
    }

    #[test]
    fn evaluate_partially_reports_constant_errors() {
        let ctxt = [("x", 0i64)].into_iter().collect::<Ctxt>();
        assert_eq!(
            evaluate(&parse("y + 1 / x").unwrap(), &ctxt),
            Err(EvalError::DivisionByZero),
        );
        assert_eq!(
            evaluate(&parse("y * 0 * log(x)").unwrap(), &ctxt),
            Err(EvalError::LogOfNonPositive),
        );
        assert_eq!(
            evaluate(&parse("z + 1 / (y - y)").unwrap(), &ctxt),
            Err(EvalError::DivisionByZero),
        );
    }

    #[test]
    fn substitute_negative_values() {
        let ctxt = [("x", -3i64)].into_iter().collect::<Ctxt>();
        let expr = substitute(&parse("x + y").unwrap(), &ctxt);
        assert_eq!(expr, -Expr::int(3) + Expr::var("y"));
        assert_eq!(expr.to_string(), "-3 + y");
    }
}
