//! Simplification rules for expressions involving division.

use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use exptree_parser::parser::{ast::Expr, token::op::BinOpKind};

/// `a/1 = a`
pub fn divide_by_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_one().then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideByOne);
    Some(opt)
}

/// `0/a = 0`, unless `a` is also zero.
///
/// `a/0` is never rewritten, so that evaluating it still reports the division by zero.
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        (lhs.is_zero() && !rhs.is_zero()).then(|| Expr::int(0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// Applies all division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_by_one(expr, step_collector)
        .or_else(|| divide_zero(expr, step_collector))
}
