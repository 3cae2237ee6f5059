//! Simplification rules for expressions involving addition, including combining like terms.

use crate::symbolic::{
    simplify::{rules::{combine_terms, do_binary, split_coefficient}, step::Step},
    step_collector::StepCollector,
};
use exptree_parser::parser::{ast::Expr, token::op::BinOpKind};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_zero() {
            Some(rhs.clone())
        } else if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Combines like terms.
///
/// `a+a = 2*a`
/// `2*a+3*a = 5*a`
/// `a*2+a = 3*a`
/// `-a+a = 0`
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        let (lhs_coeff, lhs_term) = split_coefficient(lhs);
        let (rhs_coeff, rhs_term) = split_coefficient(rhs);

        // the terms must be strictly equal
        if lhs_term != rhs_term {
            return None;
        }

        combine_terms(BinOpKind::Add, lhs_coeff, rhs_coeff, lhs_term)
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| combine_like_terms(expr, step_collector))
}
