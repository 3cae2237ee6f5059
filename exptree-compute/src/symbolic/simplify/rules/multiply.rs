//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::numerical::eval::eval_binary_op;
use crate::symbolic::{
    simplify::{rules::{do_binary, numeric_value}, step::Step},
    step_collector::StepCollector,
};
use exptree_parser::parser::{ast::Expr, token::op::BinOpKind};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (lhs.is_zero() || rhs.is_zero()).then(|| Expr::int(0))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_one() {
            Some(rhs.clone())
        } else if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Multiplies numeric coefficients that are separated by one level of multiplication, moving the
/// product to the left.
///
/// `2*(3*a) = 6*a`
/// `2*(a*3) = 6*a`
/// `(3*a)*2 = 6*a`
/// `(a*3)*2 = 6*a`
pub fn gather_coefficients(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        // find the outer coefficient, and the product it multiplies
        let (outer, product) = match (numeric_value(lhs), numeric_value(rhs)) {
            (Some(coeff), None) => (coeff, rhs),
            (None, Some(coeff)) => (coeff, lhs),
            _ => return None,
        };

        // find the inner coefficient, and the factor left over
        let Expr::Binary(product) = product else {
            return None;
        };
        if product.op != BinOpKind::Mul {
            return None;
        }
        let (inner, factor) = match (numeric_value(&product.lhs), numeric_value(&product.rhs)) {
            (Some(coeff), None) => (coeff, &*product.rhs),
            (None, Some(coeff)) => (coeff, &*product.lhs),
            _ => return None,
        };

        let coeff = eval_binary_op(BinOpKind::Mul, outer, inner).ok()?;
        Some(Expr::from_number(coeff) * factor.clone())
    })?;

    step_collector.push(Step::GatherCoefficients);
    Some(opt)
}

/// Combines like factors.
///
/// `a*a = a**2`
/// `a**b*a = a**(b+1)`
/// `a**b*a**c = a**(b+c)`
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        /// Utility function to extract the base and exponent of an expression. If the expression
        /// is not a power, the exponent is `1`.
        ///
        /// - `a**b` -> `(a, b)`
        /// - `a` -> `(a, 1)`
        fn get_exp(expr: &Expr) -> (&Expr, Option<&Expr>) {
            match expr {
                Expr::Binary(binary) if binary.op == BinOpKind::Pow => (&*binary.lhs, Some(&*binary.rhs)),
                expr => (expr, None),
            }
        }

        let (lhs_base, lhs_exp) = get_exp(lhs);
        let (rhs_base, rhs_exp) = get_exp(rhs);

        // bases must be strictly equal
        if lhs_base != rhs_base {
            return None;
        }

        let exp = match (lhs_exp, rhs_exp) {
            (Some(a), Some(b)) => a.clone() + b.clone(),
            (Some(a), None) | (None, Some(a)) => a.clone() + Expr::int(1),
            (None, None) => Expr::int(2),
        };
        Some(lhs_base.clone().pow(exp))
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| gather_coefficients(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}
