//! Simplification of expressions to a fixed point.
//!
//! Simplification runs in passes. A single pass walks the tree from the leaves up; at every node,
//! the children are simplified first, and then the node itself is rewritten:
//!
//! - If the node contains no variables, it is evaluated with the same numeric rules as
//!   [`eval`](crate::numerical::eval::eval), and replaced by the resulting constant. Negative
//!   results become the negation of a constant, which is how the parser reads them.
//! - Otherwise, or if the evaluation fails (for example, `1 / 0`), the first matching rule from
//!   [`rules`] is applied. No rule rewrites a division by zero or `log(0)`, so evaluating the
//!   simplified tree reports the same error.
//!
//! Passes are repeated until a pass produces a tree that is structurally equal to its input, or
//! until the number of passes exceeds the number of nodes in the input (plus two). Every rule
//! either shrinks the tree or only rearranges numeric factors, so the limit is not reached in
//! practice; if it is, the tree from the last pass is returned as is.

pub mod rules;
pub mod step;

use crate::numerical::{ctxt::Ctxt, eval::Eval};
use exptree_parser::parser::ast::{Binary, Call, Expr, Unary};
use super::step_collector::StepCollector;
use step::Step;

/// Evaluates an expression with no variables, and returns the resulting constant if it differs
/// from the expression.
fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let folded = Expr::from_number(expr.eval(&Ctxt::new()).ok()?);
    if &folded == expr {
        return None;
    }

    step_collector.push(Step::FoldConstants);
    Some(folded)
}

/// Runs a single simplification pass over the expression.
fn simplify_pass(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let expr = match expr {
        Expr::Constant(_) | Expr::Variable(_) => return expr.clone(),
        Expr::Binary(binary) => Expr::Binary(Binary::new(
            simplify_pass(&binary.lhs, step_collector),
            binary.op,
            simplify_pass(&binary.rhs, step_collector),
        )),
        Expr::Unary(unary) => Expr::Unary(Unary::new(
            unary.op,
            simplify_pass(&unary.operand, step_collector),
        )),
        Expr::Call(call) => Expr::Call(Call::new(
            call.func,
            simplify_pass(&call.arg, step_collector),
        )),
    };

    if !expr.has_variables() {
        if let Some(folded) = fold_constants(&expr, step_collector) {
            return folded;
        }
    }

    rules::all(&expr, step_collector).unwrap_or(expr)
}

/// Runs passes until a fixed point is reached, or until `max_passes` passes have run. In the
/// latter case, the result of the last pass is returned, which may not be a fixed point.
fn simplify_bounded(
    expr: &Expr,
    max_passes: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let mut current = expr.clone();

    for _ in 0..max_passes {
        let next = simplify_pass(&current, step_collector);
        if next == current {
            return next;
        }
        current = next;
    }

    current
}

/// Simplifies the given expression, reporting each rule that was applied to the given
/// [`StepCollector`].
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    simplify_bounded(expr, expr.node_count() + 2, step_collector)
}

/// Simplifies the given expression.
///
/// The result is a fixed point: simplifying it again returns an equal expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, returning the steps taken, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, &mut steps);
    (expr, steps)
}
