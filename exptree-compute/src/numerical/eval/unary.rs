use exptree_parser::parser::{ast::{Number, Unary}, token::op::UnaryOpKind};
use super::{finite, Eval};
use crate::numerical::{ctxt::Ctxt, error::EvalError};

/// Applies the unary operator to the number.
pub fn eval_unary_op(op: UnaryOpKind, operand: Number) -> Result<Number, EvalError> {
    let result = match op {
        UnaryOpKind::Neg => match operand {
            Number::Integer(int) => int.checked_neg()
                .map_or(Number::Float(-(int as f64)), Number::Integer),
            Number::Float(float) => Number::Float(-float),
        },
    };
    finite(result)
}

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<Number, EvalError> {
        let operand = self.operand.eval(ctxt)?;
        eval_unary_op(self.op, operand)
    }
}
