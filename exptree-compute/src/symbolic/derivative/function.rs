//! Derivatives of the built-in functions, with the chain rule applied to their argument.

use exptree_parser::parser::{ast::{Call, Expr}, token::op::FuncKind};
use super::{derivative, DiffError};

/// Computes the derivative of a call to a built-in function.
pub(super) fn function_derivative(call: &Call, var: &str) -> Result<Expr, DiffError> {
    let f = &*call.arg;
    let df = derivative(f, var)?;

    Ok(match call.func {
        // sin(f)' = f' * cos(f)
        FuncKind::Sin => df * Expr::call(FuncKind::Cos, f.clone()),

        // cos(f)' = f' * -sin(f)
        FuncKind::Cos => df * -Expr::call(FuncKind::Sin, f.clone()),

        // tan(f)' = 2 * f' / (cos(2 * f) + 1)
        FuncKind::Tan => {
            let denominator = Expr::call(FuncKind::Cos, Expr::int(2) * f.clone()) + Expr::int(1);
            Expr::int(2) * df / denominator
        },

        // log(f)' = f' / f
        FuncKind::Log => df / f.clone(),

        // exp(f)' = f' * exp(f)
        FuncKind::Exp => df * Expr::call(FuncKind::Exp, f.clone()),
    })
}
