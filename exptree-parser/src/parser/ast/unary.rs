use crate::parser::{ast::{binary::fmt_operand, expr::Expr}, token::op::UnaryOpKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary operation, such as `-x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operator of the unary expression.
    pub op: UnaryOpKind,

    /// The operand of the unary expression.
    pub operand: Box<Expr>,
}

impl Unary {
    /// Creates a new unary expression.
    pub fn new(op: UnaryOpKind, operand: Expr) -> Self {
        Self { op, operand: Box::new(operand) }
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)?;
        fmt_operand(f, &self.operand, self.op.precedence())
    }
}
