use exptree_parser::parser::{ast::{Call, Number}, token::op::FuncKind};
use super::{finite, Eval};
use crate::numerical::{ctxt::Ctxt, error::EvalError};

/// Calls the function with the given argument. Angles are in radians.
pub fn eval_func(func: FuncKind, arg: Number) -> Result<Number, EvalError> {
    let x = arg.to_f64();
    let result = match func {
        FuncKind::Sin => x.sin(),
        FuncKind::Cos => x.cos(),
        FuncKind::Tan => x.tan(),
        FuncKind::Log => {
            if x <= 0.0 {
                return Err(EvalError::LogOfNonPositive);
            }
            x.ln()
        },
        FuncKind::Exp => x.exp(),
    };
    finite(Number::Float(result))
}

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<Number, EvalError> {
        let arg = self.arg.eval(ctxt)?;
        eval_func(self.func, arg)
    }
}
