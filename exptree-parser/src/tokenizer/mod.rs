pub mod token;

use crate::parser::{error::ParseError, token::op::{BinOpKind, FuncKind}};
use logos::{Lexer, Logos};
use std::ops::Range;
pub use token::{RawToken, Token, TokenKind};

/// Returns an iterator over the raw token kinds produced by the lexer.
pub fn tokenize_raw(input: &str) -> Lexer<RawToken> {
    RawToken::lexer(input)
}

/// Returns all the raw tokens produced by the lexer, including whitespace. Input the lexer cannot
/// match is reported as [`RawToken::Symbol`].
fn lex(input: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = tokenize_raw(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(RawToken::Symbol), lexer.span()));
    }

    tokens
}

/// Returns the index of the first non-whitespace token after index `i`.
fn next_significant(raw: &[(RawToken, Range<usize>)], i: usize) -> Option<usize> {
    (i + 1..raw.len()).find(|&j| !raw[j].0.is_whitespace())
}

/// Returns true if a `-` following the given token is a unary minus rather than a subtraction.
///
/// This is the case at the start of the input, or after anything that cannot end an operand.
fn starts_operand(prev: Option<&Token>) -> bool {
    match prev {
        None => true,
        Some(token) => matches!(
            token.kind,
            TokenKind::Oper(_) | TokenKind::Neg | TokenKind::OpenParen | TokenKind::Func(_)
        ),
    }
}

/// Converts the input into a sequence of classified tokens.
///
/// - Two `*` in a row (whitespace between them is ignored) form a single `**`.
/// - A name is a [`TokenKind::Func`] if it names a function and is followed by `(`.
/// - A `-` is a [`TokenKind::Neg`] if it begins an operand (see [`starts_operand`]).
///
/// Fails with [`ParseError::UnknownToken`] on the first character that starts no token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let raw = lex(input);
    let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let (raw_kind, span) = (raw[i].0, raw[i].1.clone());
        let next = next_significant(&raw, i);
        let next_kind = next.map(|j| raw[j].0);

        let (kind, span) = match raw_kind {
            RawToken::Whitespace => {
                i += 1;
                continue;
            },
            RawToken::Symbol => {
                return Err(ParseError::UnknownToken {
                    lexeme: input[span.clone()].to_string(),
                    span,
                });
            },
            RawToken::Add => (TokenKind::Oper(BinOpKind::Add), span),
            RawToken::Sub => {
                if starts_operand(tokens.last()) {
                    (TokenKind::Neg, span)
                } else {
                    (TokenKind::Oper(BinOpKind::Sub), span)
                }
            },
            RawToken::Mul => match next {
                Some(j) if next_kind == Some(RawToken::Mul) => {
                    let merged = span.start..raw[j].1.end;
                    i = j;
                    (TokenKind::Oper(BinOpKind::Pow), merged)
                },
                _ => (TokenKind::Oper(BinOpKind::Mul), span),
            },
            RawToken::Div => (TokenKind::Oper(BinOpKind::Div), span),
            RawToken::Mod => (TokenKind::Oper(BinOpKind::Mod), span),
            RawToken::Caret => (TokenKind::Oper(BinOpKind::Xor), span),
            RawToken::OpenParen => (TokenKind::OpenParen, span),
            RawToken::CloseParen => (TokenKind::CloseParen, span),
            RawToken::Int | RawToken::Float => (TokenKind::Num, span),
            RawToken::Name => match FuncKind::from_name(&input[span.clone()]) {
                Some(func) if next_kind == Some(RawToken::OpenParen) => (TokenKind::Func(func), span),
                _ => (TokenKind::Var, span),
            },
        };

        tokens.push(Token {
            lexeme: &input[span.clone()],
            span,
            kind,
        });
        i += 1;
    }

    Ok(tokens)
}
