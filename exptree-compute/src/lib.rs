//! Numerical evaluation, symbolic differentiation and simplification of the expression trees
//! produced by [`exptree_parser`].
//!
//! - [`numerical`] reduces trees to numbers, or substitutes the variables it knows about and
//!   simplifies the rest.
//! - [`symbolic`] differentiates trees and simplifies them to a fixed point.
//!
//! ```
//! use exptree_compute::symbolic::{derivative, simplify};
//! use exptree_parser::{parse, Expr};
//!
//! let expr = parse("x ** 2").unwrap();
//! let derived = simplify(&derivative(&expr, "x").unwrap());
//! assert_eq!(derived, Expr::int(2) * Expr::var("x"));
//! ```

pub mod numerical;
pub mod symbolic;
