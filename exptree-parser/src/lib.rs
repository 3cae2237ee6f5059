//! Tokenizer, shunting-yard parser and expression tree for infix mathematical expressions.
//!
//! The entry point is [`parse`], which turns a string like `"sin(x) * 2 ** -3"` into an
//! [`Expr`]. Trees print back in infix notation through [`Display`](std::fmt::Display), and
//! compare structurally through [`PartialEq`], treating `+` and `*` as commutative one level
//! deep.
//!
//! ```
//! use exptree_parser::{parse, parser::ast::Expr};
//!
//! let expr = parse("x + 2 * y").unwrap();
//! assert_eq!(expr, Expr::var("x") + Expr::int(2) * Expr::var("y"));
//! assert_eq!(expr.to_string(), "x + 2 * y");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::Expr, error::ParseError, parse, Parser};
