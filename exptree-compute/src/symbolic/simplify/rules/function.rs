//! Simplification rules for the built-in functions at special values.

use crate::symbolic::{
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};
use exptree_parser::parser::{ast::Expr, token::op::FuncKind};

/// `log(1) = 0`
///
/// `log(0)` is never rewritten, so that evaluating it still reports the error.
pub fn log_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, FuncKind::Log, |arg| arg.is_one().then(|| Expr::int(0)))?;
    step_collector.push(Step::LogOne);
    Some(opt)
}

/// `cos(0) = 1`
pub fn cos_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, FuncKind::Cos, |arg| arg.is_zero().then(|| Expr::int(1)))?;
    step_collector.push(Step::CosZero);
    Some(opt)
}

/// `exp(0) = 1`
pub fn exp_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, FuncKind::Exp, |arg| arg.is_zero().then(|| Expr::int(1)))?;
    step_collector.push(Step::ExpZero);
    Some(opt)
}

/// `sin(0) = 0`
pub fn sin_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, FuncKind::Sin, |arg| arg.is_zero().then(|| Expr::int(0)))?;
    step_collector.push(Step::SinZero);
    Some(opt)
}

/// Applies all function rules.
///
/// These only match constant arguments, so constant folding normally gets to them first.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    log_one(expr, step_collector)
        .or_else(|| cos_zero(expr, step_collector))
        .or_else(|| exp_zero(expr, step_collector))
        .or_else(|| sin_zero(expr, step_collector))
}
