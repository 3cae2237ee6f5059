//! Numerical evaluation of expressions.
//!
//! Integers use checked `i64` arithmetic and fall back to `f64` when an operation overflows or
//! leaves the integers (like `1 / 2`). Float results that happen to be integral are turned back
//! into integers. The same rules are used by the simplifier to fold constant subexpressions.

pub mod ctxt;
pub mod error;
pub mod eval;

pub use ctxt::Ctxt;
pub use error::EvalError;
pub use eval::{eval, evaluate, substitute, Eval, Evaluation};
