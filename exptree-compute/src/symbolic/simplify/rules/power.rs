//! Simplification rules for powers.

use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use exptree_parser::parser::{ast::Expr, token::op::BinOpKind};

/// `a**0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Pow, |_, rhs| {
        rhs.is_zero().then(|| Expr::int(1))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a**1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Pow, |lhs, rhs| {
        rhs.is_one().then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `1**a = 1`
pub fn power_of_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Pow, |lhs, _| {
        lhs.is_one().then(|| Expr::int(1))
    })?;

    step_collector.push(Step::PowerOfOne);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_of_one(expr, step_collector))
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
    fn identities() {
        assert_eq!(apply("x ** 0"), Some(Expr::int(1)));
        assert_eq!(apply("(x + y) ** 1"), Some(parse("x + y").unwrap()));
        assert_eq!(apply("1 ** sin(x)"), Some(Expr::int(1)));
        assert_eq!(apply("x ** 2"), None);
    }

    #[test]
    fn exclusive_or_is_not_a_power() {
        assert_eq!(apply("x ^ 0"), None);
        assert_eq!(apply("x ^ 1"), None);
    }
}
