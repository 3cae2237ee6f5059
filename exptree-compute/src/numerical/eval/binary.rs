use exptree_parser::parser::{ast::{Binary, Number}, token::op::BinOpKind};
use super::{finite, Eval};
use crate::numerical::{ctxt::Ctxt, error::EvalError};

/// Applies an operation that has a checked integer form, falling back to floats if either operand
/// is a float or the integer operation overflows.
fn int_or_float(
    lhs: Number,
    rhs: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    match (lhs, rhs) {
        (Number::Integer(a), Number::Integer(b)) => int_op(a, b)
            .map_or_else(|| Number::Float(float_op(a as f64, b as f64)), Number::Integer),
        _ => Number::Float(float_op(lhs.to_f64(), rhs.to_f64())),
    }
}

/// `a / b`, staying an integer if the division is exact.
fn div(lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    if rhs.is_zero() {
        return Err(EvalError::DivisionByZero);
    }

    match (lhs, rhs) {
        (Number::Integer(a), Number::Integer(b)) if a.checked_rem(b) == Some(0) => {
            Ok(a.checked_div(b).map_or(Number::Float(a as f64 / b as f64), Number::Integer))
        },
        _ => Ok(Number::Float(lhs.to_f64() / rhs.to_f64())),
    }
}

/// `a % b`, using floored division: the result has the sign of the divisor.
fn modulo(lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    if rhs.is_zero() {
        return Err(EvalError::DivisionByZero);
    }

    match (lhs, rhs) {
        (Number::Integer(a), Number::Integer(b)) => {
            // only `i64::MIN % -1` overflows, and its remainder is zero
            let r = a.checked_rem(b).unwrap_or(0);
            if r != 0 && (r < 0) != (b < 0) {
                Ok(Number::Integer(r + b))
            } else {
                Ok(Number::Integer(r))
            }
        },
        _ => {
            let (a, b) = (lhs.to_f64(), rhs.to_f64());
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) {
                Ok(Number::Float(r + b))
            } else {
                Ok(Number::Float(r))
            }
        },
    }
}

/// `a ** b`.
fn pow(lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    if lhs.is_zero() && rhs.is_negative() {
        return Err(EvalError::DivisionByZero);
    }

    match (lhs, rhs) {
        (Number::Integer(base), Number::Integer(exp)) if exp >= 0 => {
            let checked = u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp));
            Ok(checked.map_or_else(|| Number::Float((base as f64).powf(exp as f64)), Number::Integer))
        },
        _ => Ok(Number::Float(lhs.to_f64().powf(rhs.to_f64()))),
    }
}

/// `a ^ b`, bitwise exclusive-or of two integral numbers.
fn xor(lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    match (lhs.to_i64(), rhs.to_i64()) {
        (Some(a), Some(b)) => Ok(Number::Integer(a ^ b)),
        _ => Err(EvalError::NonIntegerOperand { op: BinOpKind::Xor }),
    }
}

/// Applies the binary operator to the two numbers.
pub fn eval_binary_op(op: BinOpKind, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    let result = match op {
        BinOpKind::Add => int_or_float(lhs, rhs, i64::checked_add, |a, b| a + b),
        BinOpKind::Sub => int_or_float(lhs, rhs, i64::checked_sub, |a, b| a - b),
        BinOpKind::Mul => int_or_float(lhs, rhs, i64::checked_mul, |a, b| a * b),
        BinOpKind::Div => div(lhs, rhs)?,
        BinOpKind::Mod => modulo(lhs, rhs)?,
        BinOpKind::Pow => pow(lhs, rhs)?,
        BinOpKind::Xor => xor(lhs, rhs)?,
    };
    finite(result)
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<Number, EvalError> {
        let lhs = self.lhs.eval(ctxt)?;
        let rhs = self.rhs.eval(ctxt)?;
        eval_binary_op(self.op, lhs, rhs)
    }
}
