use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric value stored in a [`Expr::Constant`](super::Expr::Constant).
///
/// Integers and floats compare equal when they hold the same value, so `Integer(2)` and
/// `Float(2.0)` are the same number.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An integer, such as `2` or `144`.
    Integer(i64),

    /// A floating-point number, such as `3.14`, `.5` or `1e-3`.
    Float(f64),
}

impl Number {
    /// Parses a numeric literal produced by the tokenizer.
    ///
    /// A literal without a decimal point or exponent is an [`Number::Integer`], unless it does not
    /// fit in an `i64`, in which case it becomes a [`Number::Float`]. Any other literal is a
    /// [`Number::Float`]. Returns [`None`] if the literal is not a number at all.
    pub fn from_literal(lexeme: &str) -> Option<Self> {
        let is_float = lexeme.contains(|c: char| matches!(c, '.' | 'e' | 'E'));
        if !is_float {
            if let Ok(int) = lexeme.parse::<i64>() {
                return Some(Self::Integer(int));
            }
        }

        lexeme.parse::<f64>().ok().map(Self::Float)
    }

    /// Returns the value as an `f64`.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Integer(int) => int as f64,
            Self::Float(float) => float,
        }
    }

    /// Returns the value as an `i64`, if it is integral and in range.
    pub fn to_i64(self) -> Option<i64> {
        match self.normalize() {
            Self::Integer(int) => Some(int),
            Self::Float(_) => None,
        }
    }

    /// Converts a float with no fractional part into an integer, if it fits in an `i64`.
    /// Integers and other floats are returned unchanged.
    pub fn normalize(self) -> Self {
        match self {
            Self::Float(float)
                if float.is_finite()
                    && float.fract() == 0.0
                    && float >= i64::MIN as f64
                    && float < i64::MAX as f64 => Self::Integer(float as i64),
            other => other,
        }
    }

    /// Returns the absolute value of the number.
    pub fn abs(self) -> Self {
        match self {
            Self::Integer(int) => int.checked_abs()
                .map_or(Self::Float((int as f64).abs()), Self::Integer),
            Self::Float(float) => Self::Float(float.abs()),
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(self) -> bool {
        self.to_f64() == 0.0
    }

    /// Returns true if the number is one.
    pub fn is_one(self) -> bool {
        self.to_f64() == 1.0
    }

    /// Returns true if the number is strictly less than zero.
    pub fn is_negative(self) -> bool {
        self.to_f64() < 0.0
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(int: i64) -> Self {
        Self::Integer(int)
    }
}

impl From<f64> for Number {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}

/// Floats always print with a decimal point or an exponent, so that they parse back into floats.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(int) => write!(f, "{}", int),
            Self::Float(float) => write!(f, "{:?}", float),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn literal_kinds() {
        assert!(matches!(Number::from_literal("16"), Some(Number::Integer(16))));
        assert!(matches!(Number::from_literal("1.5"), Some(Number::Float(f)) if f == 1.5));
        assert!(matches!(Number::from_literal(".5"), Some(Number::Float(f)) if f == 0.5));
        assert!(matches!(Number::from_literal("2."), Some(Number::Float(f)) if f == 2.0));
        assert!(matches!(Number::from_literal("1e-3"), Some(Number::Float(f)) if f == 1e-3));
        assert!(matches!(Number::from_literal("99999999999999999999"), Some(Number::Float(_))));
        assert!(Number::from_literal("x").is_none());
    }

    #[test]
    fn mixed_equality() {
        assert_eq!(Number::Integer(2), Number::Float(2.0));
        assert_ne!(Number::Integer(2), Number::Float(2.5));
    }

    #[test]
    fn float_display_keeps_kind() {
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(1e-7).to_string(), "1e-7");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
        assert_eq!(Number::Integer(-3).to_string(), "-3");
    }

    #[test]
    fn normalize_integral_floats() {
        assert!(matches!(Number::Float(4.0).normalize(), Number::Integer(4)));
        assert!(matches!(Number::Float(4.5).normalize(), Number::Float(_)));
        assert!(matches!(Number::Float(1e300).normalize(), Number::Float(_)));
        assert_eq!(Number::Float(-6.0).to_i64(), Some(-6));
        assert_eq!(Number::Integer(i64::MIN).abs(), Number::Float(9.223372036854775808e18));
    }
}
