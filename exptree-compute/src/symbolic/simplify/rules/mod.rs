//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the simplifier takes care of
//! visiting every node.

pub mod add;
pub mod divide;
pub mod function;
pub mod multiply;
pub mod neg;
pub mod power;
pub mod sub;

use crate::numerical::eval::{eval_binary_op, eval_unary_op};
use crate::symbolic::step_collector::StepCollector;
use exptree_parser::parser::{
    ast::{Expr, Number},
    token::op::{BinOpKind, FuncKind, UnaryOpKind},
};
use super::step::Step;

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(binary) if binary.op == op => f(&binary.lhs, &binary.rhs),
        _ => None,
    }
}

/// If the expression is a call to the given function, calls the given transformation function
/// with the argument.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_call(
    expr: &Expr,
    func: FuncKind,
    f: impl Fn(&Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Call(call) if call.func == func => f(&call.arg),
        _ => None,
    }
}

/// If the expression is a negation, calls the given transformation function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_neg(expr: &Expr, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Unary(unary) if unary.op == UnaryOpKind::Neg => f(&unary.operand),
        _ => None,
    }
}

/// Returns the value of the expression if it is a constant, or the negation of a constant.
pub(crate) fn numeric_value(expr: &Expr) -> Option<Number> {
    match expr {
        Expr::Constant(number) => Some(*number),
        Expr::Unary(unary) if unary.op == UnaryOpKind::Neg => {
            let number = unary.operand.as_number()?;
            eval_unary_op(unary.op, number).ok()
        },
        _ => None,
    }
}

/// Splits a term into its numeric coefficient and the rest of the term.
///
/// - `3*a` -> `(3, a)`
/// - `a*3` -> `(3, a)`
/// - `-a` -> `(-1, a)`
/// - `a` -> `(1, a)`
pub(crate) fn split_coefficient(expr: &Expr) -> (Number, &Expr) {
    match expr {
        Expr::Binary(binary) if binary.op == BinOpKind::Mul => {
            if let Some(coeff) = numeric_value(&binary.lhs) {
                return (coeff, &binary.rhs);
            }
            if let Some(coeff) = numeric_value(&binary.rhs) {
                return (coeff, &binary.lhs);
            }
        },
        Expr::Unary(unary) if unary.op == UnaryOpKind::Neg && numeric_value(expr).is_none() => {
            return (Number::Integer(-1), &unary.operand);
        },
        _ => (),
    }

    (Number::Integer(1), expr)
}

/// Combines the coefficients of two like terms with the given operator (`+` or `-`), and builds
/// the resulting term `coeff * term`, written as simply as possible.
pub(crate) fn combine_terms(op: BinOpKind, lhs: Number, rhs: Number, term: &Expr) -> Option<Expr> {
    let coeff = eval_binary_op(op, lhs, rhs).ok()?;
    let term = if coeff.is_zero() {
        Expr::int(0)
    } else if coeff.is_one() {
        term.clone()
    } else if coeff == Number::Integer(-1) {
        -term.clone()
    } else {
        Expr::from_number(coeff) * term.clone()
    };
    Some(term)
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| sub::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| function::all(expr, step_collector))
        .or_else(|| neg::all(expr, step_collector))
}
