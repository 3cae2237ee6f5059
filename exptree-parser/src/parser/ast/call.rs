use crate::parser::{ast::expr::Expr, token::op::FuncKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sin(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being called.
    pub func: FuncKind,

    /// The argument passed to the function.
    pub arg: Box<Expr>,
}

impl Call {
    /// Creates a new function call.
    pub fn new(func: FuncKind, arg: Expr) -> Self {
        Self { func, arg: Box::new(arg) }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.func, self.arg)
    }
}
