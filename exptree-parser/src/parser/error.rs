use ariadne::Fmt;
use exptree_attrs::ErrorKind;
use exptree_error::EXPR;
use std::ops::Range;

/// An error that can occur while tokenizing or parsing an expression.
///
/// Every variant carries the region of the source that caused it.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
pub enum ParseError {
    /// A character that is not part of any token.
    #[error(
        message = format!("unknown token `{}`", lexeme),
        labels = ["I don't know what this is"],
        help = format!(
            "expressions are made of numbers, variables, the operators {}, the functions {}, and parentheses",
            "+ - * / % ** ^".fg(EXPR),
            "sin cos tan log exp".fg(EXPR),
        ),
    )]
    UnknownToken {
        /// The unrecognized text.
        lexeme: String,

        /// Where the text is in the source.
        span: Range<usize>,
    },

    /// A parenthesis without a partner.
    #[error(
        message = "mismatched parenthesis",
        labels = [if *opening {
            "this parenthesis is never closed"
        } else {
            "this parenthesis was never opened"
        }],
        help = if *opening {
            "add a closing parenthesis `)` somewhere after this"
        } else {
            "add an opening parenthesis `(` somewhere before this, or remove this one"
        },
    )]
    MismatchedParenthesis {
        /// True if the parenthesis is an unclosed `(`, false if it is an unopened `)`.
        opening: bool,

        /// Where the parenthesis is in the source.
        span: Range<usize>,
    },

    /// The input, or part of it, does not form an expression: it is empty, an operator is missing
    /// an operand, or two operands have no operator between them.
    #[error(
        message = "incomplete expression",
        labels = [format!("expected an operator or an {} here", "expression".fg(EXPR))],
    )]
    EmptyExpression {
        /// Where the missing piece should be.
        span: Range<usize>,
    },
}

impl ParseError {
    /// Returns the region of the source that caused the error.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::UnknownToken { span, .. }
                | Self::MismatchedParenthesis { span, .. }
                | Self::EmptyExpression { span } => span.clone(),
        }
    }
}

impl From<ParseError> for exptree_error::Error {
    fn from(err: ParseError) -> Self {
        exptree_error::Error::new(vec![err.span()], err)
    }
}
