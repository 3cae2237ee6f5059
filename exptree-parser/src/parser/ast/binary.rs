use crate::parser::{ast::expr::Expr, token::op::{BinOpKind, Precedence}};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Creates a new binary expression.
    pub fn new(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self { lhs: Box::new(lhs), op, rhs: Box::new(rhs) }
    }
}

/// Two binary expressions are equal if they have the same operator and equal operands. If the
/// operator is commutative (`+` or `*`), the operands may also appear in swapped order. Only the
/// operands of this node are swapped; regrouping across nested nodes is not considered, so
/// `(a + b) + c` is not equal to `a + (b + c)`.
impl PartialEq for Binary {
    fn eq(&self, other: &Self) -> bool {
        if self.op != other.op {
            return false;
        }

        (self.lhs == other.lhs && self.rhs == other.rhs)
            || (self.op.is_commutative() && self.lhs == other.rhs && self.rhs == other.lhs)
    }
}

/// Writes an operand of an operator with the given precedence, adding parentheses if the operand
/// is a binary expression that binds no tighter than the operator.
pub(crate) fn fmt_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, parent: Precedence) -> fmt::Result {
    match operand {
        Expr::Binary(binary) if binary.op.precedence() <= parent => write!(f, "({})", binary),
        _ => write!(f, "{}", operand),
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precedence = self.op.precedence();
        fmt_operand(f, &self.lhs, precedence)?;
        write!(f, " {} ", self.op)?;
        fmt_operand(f, &self.rhs, precedence)
    }
}
