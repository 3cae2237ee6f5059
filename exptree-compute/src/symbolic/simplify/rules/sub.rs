//! Simplification rules for expressions involving subtraction.

use crate::symbolic::{
    simplify::{rules::{combine_terms, do_binary, split_coefficient}, step::Step},
    step_collector::StepCollector,
};
use exptree_parser::parser::{ast::Expr, token::op::BinOpKind};

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        rhs.is_zero().then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0-a = -a`
pub fn subtract_from_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        lhs.is_zero().then(|| -rhs.clone())
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// Subtracts like terms.
///
/// `a-a = 0`
/// `3*a-a = 2*a`
/// `a-3*a = -2*a`
pub fn subtract_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        let (lhs_coeff, lhs_term) = split_coefficient(lhs);
        let (rhs_coeff, rhs_term) = split_coefficient(rhs);

        if lhs_term != rhs_term {
            return None;
        }

        combine_terms(BinOpKind::Sub, lhs_coeff, rhs_coeff, lhs_term)
    })?;

    step_collector.push(Step::SubtractLikeTerms);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    subtract_zero(expr, step_collector)
        .or_else(|| subtract_from_zero(expr, step_collector))
        .or_else(|| subtract_like_terms(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use exptree_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(source: &str) -> Option<Expr> {
        all(&parse(source).unwrap(), &mut ())
    }

    #[test]
    fn zero() {
        assert_eq!(apply("x - 0"), Some(Expr::var("x")));
        assert_eq!(apply("0 - x"), Some(-Expr::var("x")));
        assert_eq!(apply("0 - (x + y)"), Some(parse("-(x + y)").unwrap()));
    }

    #[test]
    fn like_terms() {
        assert_eq!(apply("x - x"), Some(Expr::int(0)));
        assert_eq!(apply("3 * x - x"), Some(parse("2 * x").unwrap()));
        assert_eq!(apply("x - 3 * x"), Some(parse("-2 * x").unwrap()));
        assert_eq!(apply("x - 2 * x"), Some(-Expr::var("x")));
        assert_eq!(apply("x - y"), None);
    }
}
