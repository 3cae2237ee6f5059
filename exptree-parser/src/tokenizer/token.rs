use crate::parser::token::op::{BinOpKind, FuncKind};
use logos::Logos;
use std::ops::Range;

/// The raw lexemes recognized by the lexer, before they are classified into [`TokenKind`]s.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[token("^")]
    Caret,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl RawToken {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, RawToken::Whitespace)
    }
}

/// The kind of a classified token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal.
    Num,

    /// A variable name.
    Var,

    /// A binary operator.
    Oper(BinOpKind),

    /// A unary minus, told apart from subtraction by the token before it.
    Neg,

    OpenParen,
    CloseParen,

    /// The name of a function, immediately followed by an opening parenthesis.
    Func(FuncKind),
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
