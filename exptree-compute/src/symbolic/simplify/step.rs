use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A step taken while simplifying an expression. Each variant names the rule that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// An expression with no variables was evaluated to a single constant.
    FoldConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a+a = 2*a`, `2*a+3*a = 5*a`, etc.
    CombineLikeTerms,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a-a = 0`, `3*a-a = 2*a`, etc.
    SubtractLikeTerms,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*(3*a) = 6*a`
    GatherCoefficients,

    /// `a*a = a**2`, `a**b*a**c = a**(b+c)`, etc.
    CombineLikeFactors,

    /// `a/1 = a`
    DivideByOne,

    /// `0/a = 0`
    DivideZero,

    /// `a**0 = 1`
    PowerZero,

    /// `a**1 = a`
    PowerOne,

    /// `1**a = 1`
    PowerOfOne,

    /// `log(1) = 0`
    LogOne,

    /// `cos(0) = 1`
    CosZero,

    /// `exp(0) = 1`
    ExpZero,

    /// `sin(0) = 0`
    SinZero,

    /// `--a = a`
    DoubleNegation,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::FoldConstants => "evaluate constant subexpression",
            Self::AddZero => "x + 0 = x",
            Self::CombineLikeTerms => "combine like terms",
            Self::SubtractZero => "x - 0 = x",
            Self::SubtractFromZero => "0 - x = -x",
            Self::SubtractLikeTerms => "subtract like terms",
            Self::MultiplyZero => "x * 0 = 0",
            Self::MultiplyOne => "x * 1 = x",
            Self::GatherCoefficients => "gather numeric coefficients",
            Self::CombineLikeFactors => "combine like factors",
            Self::DivideByOne => "x / 1 = x",
            Self::DivideZero => "0 / x = 0",
            Self::PowerZero => "x ** 0 = 1",
            Self::PowerOne => "x ** 1 = x",
            Self::PowerOfOne => "1 ** x = 1",
            Self::LogOne => "log(1) = 0",
            Self::CosZero => "cos(0) = 1",
            Self::ExpZero => "exp(0) = 1",
            Self::SinZero => "sin(0) = 0",
            Self::DoubleNegation => "--x = x",
        };
        write!(f, "{}", description)
    }
}
