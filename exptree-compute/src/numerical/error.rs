use ariadne::Fmt;
use exptree_attrs::ErrorKind;
use exptree_error::EXPR;
use exptree_parser::parser::token::op::BinOpKind;

/// An error that can occur while evaluating an expression.
///
/// Expression trees do not remember where they came from in the source, so the spans attached to
/// these errors by the caller usually cover the whole expression.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
pub enum EvalError {
    /// Division or modulo by zero, or zero raised to a negative power.
    #[error(
        message = "division by zero",
        labels = ["this expression divides by zero"],
        help = "the divisor of `/` and `%`, and the base of `**` with a negative exponent, must be nonzero",
    )]
    DivisionByZero,

    /// The argument of `log` is zero or negative.
    #[error(
        message = "logarithm of a non-positive number",
        labels = ["this expression takes the logarithm of a number that is zero or negative"],
        help = format!("the argument of {} must be greater than zero", "log".fg(EXPR)),
    )]
    LogOfNonPositive,

    /// A variable has no value.
    #[error(
        message = format!("`{}` is not bound to a value", name),
        labels = ["this expression"],
        help = if suggestions.is_empty() {
            format!("to bind it, add {} to the command", format!("{}=<number>", name).fg(EXPR))
        } else {
            format!(
                "did you mean {}?",
                suggestions
                    .iter()
                    .map(|s| format!("`{}`", s.fg(EXPR)))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        },
    )]
    UnboundVariable {
        /// The name of the variable.
        name: String,

        /// Bound variables with a similar name, if any.
        suggestions: Vec<String>,
    },

    /// An operator that only works on integers was given a non-integer.
    #[error(
        message = format!("the `{}` operator requires integer operands", op),
        labels = ["this expression"],
        help = format!("`{}` is only defined for whole numbers", op.symbol().fg(EXPR)),
    )]
    NonIntegerOperand {
        /// The operator.
        op: BinOpKind,
    },

    /// The result is infinite or not a number.
    #[error(
        message = "the result is not a finite number",
        labels = ["this expression evaluates to infinity or an undefined value"],
    )]
    NonFinite,
}
