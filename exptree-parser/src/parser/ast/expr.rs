use crate::parser::{
    ast::{binary::Binary, call::Call, iter::ExprIter, number::Number, unary::Unary},
    token::op::{BinOpKind, FuncKind, UnaryOpKind},
};
use std::{collections::BTreeSet, fmt, ops};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
///
/// The tree owns all of its nodes; reusing a subtree in two places requires cloning it.
/// Transformations never modify a tree in place, they build and return a new one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant, such as `2` or `3.14`.
    Constant(Number),

    /// A variable, such as `x`.
    Variable(String),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A call to one of the built-in functions, such as `sin(x)`.
    Call(Call),
}

impl Expr {
    /// Creates an integer constant.
    pub fn int(value: i64) -> Self {
        Self::Constant(Number::Integer(value))
    }

    /// Creates a floating-point constant.
    pub fn float(value: f64) -> Self {
        Self::Constant(Number::Float(value))
    }

    /// Creates a variable with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary operation.
    pub fn binary(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self::Binary(Binary::new(lhs, op, rhs))
    }

    /// Creates a negation of the given expression.
    pub fn neg(operand: Expr) -> Self {
        Self::Unary(Unary::new(UnaryOpKind::Neg, operand))
    }

    /// Creates a call to the given function.
    pub fn call(func: FuncKind, arg: Expr) -> Self {
        Self::Call(Call::new(func, arg))
    }

    /// Raises this expression to the given power, creating `self ** exponent`.
    pub fn pow(self, exponent: Expr) -> Self {
        Self::binary(self, BinOpKind::Pow, exponent)
    }

    /// Creates a constant holding the given number. Negative numbers are stored as the negation of
    /// their absolute value, matching how they are parsed.
    pub fn from_number(number: Number) -> Self {
        if number.is_negative() {
            Self::neg(Self::Constant(number.abs()))
        } else {
            Self::Constant(number)
        }
    }

    /// Returns the number this expression holds, if it is a constant.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Constant(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns true if the expression is a constant equal to zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(number) if number.is_zero())
    }

    /// Returns true if the expression is a constant equal to one.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Constant(number) if number.is_one())
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names of the variables used in the expression, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(|expr| match expr {
                Self::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns true if the expression contains any variable.
    pub fn has_variables(&self) -> bool {
        self.post_order_iter().any(|expr| matches!(expr, Self::Variable(_)))
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

/// Structural equality: constants compare by value, variables by name, and other nodes by
/// operator and operands (see [`Binary`] for the commutative case).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(a), Self::Constant(b)) => a == b,
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            (Self::Unary(a), Self::Unary(b)) => a == b,
            (Self::Call(a), Self::Call(b)) => a == b,
            _ => false,
        }
    }
}

/// Returns true if the two expressions are structurally equal. This is the same as `a == b`.
pub fn equals(a: &Expr, b: &Expr) -> bool {
    a == b
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(number) => write!(f, "{}", number),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Binary(binary) => write!(f, "{}", binary),
            Self::Unary(unary) => write!(f, "{}", unary),
            Self::Call(call) => write!(f, "{}", call),
        }
    }
}

impl From<Number> for Expr {
    fn from(number: Number) -> Self {
        Self::Constant(number)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

/// Implements a `std::ops` trait for [`Expr`] that builds a binary expression node.
macro_rules! impl_bin_op {
    ($($trait:ident $method:ident => $kind:ident),* $(,)?) => {
        $(
            impl ops::$trait for Expr {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Self::Output {
                    Expr::binary(self, BinOpKind::$kind, rhs)
                }
            }
        )*
    };
}

impl_bin_op! {
    Add add => Add,
    Sub sub => Sub,
    Mul mul => Mul,
    Div div => Div,
    Rem rem => Mod,
    BitXor bitxor => Xor,
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn commutative_equality() {
        assert_eq!(x() + Expr::int(1), Expr::int(1) + x());
        assert_eq!(x() * Expr::var("y"), Expr::var("y") * x());
        assert_ne!(x() - Expr::int(1), Expr::int(1) - x());
        assert_ne!(x().pow(Expr::int(2)), Expr::int(2).pow(x()));
    }

    #[test]
    fn commutativity_is_shallow() {
        let a = (Expr::var("a") + Expr::var("b")) + Expr::var("c");
        let b = Expr::var("a") + (Expr::var("b") + Expr::var("c"));
        assert_ne!(a, b);
        assert!(!equals(&a, &b));

        // swapping at every level is fine
        let c = Expr::var("c") + (Expr::var("b") + Expr::var("a"));
        assert_eq!(a, c);
    }

    #[test]
    fn mixed_constant_equality() {
        assert_eq!(Expr::int(2), Expr::float(2.0));
        assert_ne!(Expr::int(2), Expr::var("2"));
    }

    #[test]
    fn display_parenthesizes_lower_precedence() {
        let expr = (x() + Expr::int(1)) * Expr::int(3);
        assert_eq!(expr.to_string(), "(x + 1) * 3");

        let expr = x() + Expr::int(1) * Expr::int(3);
        assert_eq!(expr.to_string(), "x + 1 * 3");
    }

    #[test]
    fn display_parenthesizes_equal_precedence() {
        let expr = x() - (Expr::var("y") - Expr::var("z"));
        assert_eq!(expr.to_string(), "x - (y - z)");

        let expr = (x() - Expr::var("y")) - Expr::var("z");
        assert_eq!(expr.to_string(), "(x - y) - z");

        let expr = x().pow(Expr::var("y").pow(Expr::var("z")));
        assert_eq!(expr.to_string(), "x ** (y ** z)");
    }

    #[test]
    fn display_unary_and_calls() {
        assert_eq!((-x()).to_string(), "-x");
        assert_eq!((-(x() + Expr::int(1))).to_string(), "-(x + 1)");
        assert_eq!(Expr::call(FuncKind::Sin, x() * Expr::int(2)).to_string(), "sin(x * 2)");
        assert_eq!((Expr::int(5) ^ Expr::int(3)).to_string(), "5 ^ 3");
        assert_eq!((x() % Expr::int(2)).to_string(), "x % 2");
        assert_eq!(Expr::float(2.0).to_string(), "2.0");
    }

    #[test]
    fn post_order() {
        let expr = Expr::call(FuncKind::Exp, x()) + -Expr::int(3);
        let visited = expr.post_order_iter().map(|e| e.to_string()).collect::<Vec<_>>();
        assert_eq!(visited, vec!["x", "exp(x)", "3", "-3", "exp(x) + -3"]);
        assert_eq!(expr.node_count(), 5);
    }

    #[test]
    fn collect_variables() {
        let expr = Expr::var("y") * x() + Expr::call(FuncKind::Log, x());
        assert_eq!(expr.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(expr.has_variables());
        assert!(!(Expr::int(1) + Expr::int(2)).has_variables());
    }

    #[test]
    fn negative_numbers_become_negations() {
        assert_eq!(Expr::from_number(Number::Integer(-4)), -Expr::int(4));
        assert_eq!(Expr::from_number(Number::Float(0.5)), Expr::float(0.5));
    }
}
