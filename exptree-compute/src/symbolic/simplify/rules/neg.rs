//! Simplification rules for negation.

use crate::symbolic::{
    simplify::{rules::do_neg, step::Step},
    step_collector::StepCollector,
};
use exptree_parser::parser::ast::Expr;

/// `--a = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_neg(expr, |operand| do_neg(operand, |inner| Some(inner.clone())))?;
    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    double_negation(expr, step_collector)
}
