//! Symbolic manipulation of expression trees.
//!
//! # Differentiation
//!
//! [`derivative()`] builds the derivative of an expression with respect to a variable, one rule
//! per node kind, applying the chain rule through every nested expression. The result is not
//! simplified; it contains the derivative rules exactly as written, so it usually contains
//! plenty of `0 * x` and `1 * x` terms. Pass it through [`simplify()`] to clean it up.
//!
//! # Simplification
//!
//! [`simplify()`] rewrites an expression into a smaller, equivalent expression. Each pass over
//! the tree simplifies the children of a node first, and then:
//!
//! 1. folds the node into a single constant if it contains no variables, or
//! 2. applies the first matching rule from [`simplify::rules`] (identities like `x + 0 = x`,
//!    combining like terms, etc.).
//!
//! Passes are repeated until the tree stops changing. The set of rules is small on purpose: it
//! never factors, distributes or applies trigonometric identities.
//!
//! ```
//! use exptree_compute::symbolic::{simplify, simplify_with_steps, Step};
//! use exptree_parser::{parse, Expr};
//!
//! let expr = parse("(x + 0) * 1 + 2 * 3").unwrap();
//! assert_eq!(simplify(&expr), Expr::var("x") + Expr::int(6));
//!
//! let (_, steps) = simplify_with_steps(&expr);
//! assert!(steps.contains(&Step::AddZero));
//! assert!(steps.contains(&Step::FoldConstants));
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, DiffError};
pub use simplify::{simplify, simplify_with, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
