use exptree_parser::parser::ast::{Expr, Number};
use super::Eval;
use crate::numerical::{ctxt::Ctxt, error::EvalError};

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<Number, EvalError> {
        match self {
            Self::Constant(number) => Ok(*number),
            Self::Variable(name) => ctxt.get_var(name)
                .ok_or_else(|| EvalError::UnboundVariable {
                    name: name.clone(),
                    suggestions: ctxt.get_similar_vars(name)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                }),
            Self::Binary(binary) => binary.eval(ctxt),
            Self::Unary(unary) => unary.eval(ctxt),
            Self::Call(call) => call.eval(ctxt),
        }
    }
}
