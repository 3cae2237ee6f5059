//! Types that make up the expression tree produced by the parser.
//!
//! The tree is a closed set of node types: [`Expr::Constant`], [`Expr::Variable`],
//! [`Expr::Binary`], [`Expr::Unary`] and [`Expr::Call`]. Each node exclusively owns its children.

pub mod binary;
pub mod call;
pub mod expr;
mod iter;
pub mod number;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::{equals, Expr};
pub use iter::ExprIter;
pub use number::Number;
pub use unary::Unary;
