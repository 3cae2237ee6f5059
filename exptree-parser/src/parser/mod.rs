pub mod ast;
pub mod error;
pub mod token;

use ast::{expr::Expr, number::Number};
use error::ParseError;
use super::tokenizer::{tokenize, Token, TokenKind};
use std::ops::Range;
use token::op::{Associativity, BinOpKind, FuncKind, UnaryOpKind};

pub use token::op::Precedence;

/// An entry on the operator stack of the shunting-yard algorithm.
#[derive(Debug, Clone, PartialEq)]
enum StackOp {
    Binary(BinOpKind, Range<usize>),
    Neg(Range<usize>),
    Func(FuncKind, Range<usize>),
    OpenParen(Range<usize>),
}

/// An entry of the postfix (reverse Polish) output of the shunting-yard algorithm.
#[derive(Debug, Clone, PartialEq)]
enum Postfix {
    Operand(Expr, Range<usize>),
    Binary(BinOpKind, Range<usize>),
    Unary(UnaryOpKind, Range<usize>),
    Call(FuncKind, Range<usize>),
}

impl StackOp {
    /// Converts an operator popped off the stack into output. Parentheses produce no output.
    fn into_postfix(self) -> Option<Postfix> {
        match self {
            StackOp::Binary(op, span) => Some(Postfix::Binary(op, span)),
            StackOp::Neg(span) => Some(Postfix::Unary(UnaryOpKind::Neg, span)),
            StackOp::Func(func, span) => Some(Postfix::Call(func, span)),
            StackOp::OpenParen(_) => None,
        }
    }
}

/// A shunting-yard parser for infix expressions. This is the type to use to parse an arbitrary
/// expression into an expression tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source being parsed.
    source: &'source str,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source }
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    /// Parses the source into an expression tree.
    pub fn parse(&self) -> Result<Expr, ParseError> {
        let tokens = tokenize(self.source)?;
        let postfix = self.to_postfix(&tokens)?;
        self.reduce(postfix)
    }

    /// Rearranges the tokens into postfix order with the shunting-yard algorithm.
    ///
    /// Along the way, this checks that operands and operators alternate, so that inputs like
    /// `1 2 +` are rejected instead of being read as postfix.
    fn to_postfix(&self, tokens: &[Token]) -> Result<Vec<Postfix>, ParseError> {
        let mut output = Vec::new();
        let mut stack: Vec<StackOp> = Vec::new();

        // true when the next token must begin an operand
        let mut expect_operand = true;

        for token in tokens {
            let span = token.span.clone();
            let begins_operand = matches!(
                token.kind,
                TokenKind::Num | TokenKind::Var | TokenKind::Neg | TokenKind::OpenParen | TokenKind::Func(_)
            );
            if begins_operand != expect_operand {
                return Err(ParseError::EmptyExpression { span });
            }

            match token.kind {
                TokenKind::Num => {
                    let number = Number::from_literal(token.lexeme)
                        .ok_or_else(|| ParseError::UnknownToken {
                            lexeme: token.lexeme.to_string(),
                            span: span.clone(),
                        })?;
                    output.push(Postfix::Operand(Expr::Constant(number), span));
                    expect_operand = false;
                },
                TokenKind::Var => {
                    output.push(Postfix::Operand(Expr::var(token.lexeme), span));
                    expect_operand = false;
                },
                TokenKind::Func(func) => stack.push(StackOp::Func(func, span)),
                TokenKind::Neg => stack.push(StackOp::Neg(span)),
                TokenKind::OpenParen => stack.push(StackOp::OpenParen(span)),
                TokenKind::Oper(op) => {
                    let precedence = op.precedence();
                    while let Some(top) = stack.last() {
                        let top_precedence = match top {
                            StackOp::Binary(top, _) => top.precedence(),
                            StackOp::Neg(_) => UnaryOpKind::Neg.precedence(),
                            StackOp::Func(..) | StackOp::OpenParen(_) => break,
                        };

                        let pops = match op.associativity() {
                            Associativity::Left => precedence <= top_precedence,
                            Associativity::Right => precedence < top_precedence,
                        };
                        if !pops {
                            break;
                        }

                        output.extend(stack.pop().and_then(StackOp::into_postfix));
                    }

                    stack.push(StackOp::Binary(op, span));
                    expect_operand = true;
                },
                TokenKind::CloseParen => {
                    loop {
                        match stack.pop() {
                            Some(StackOp::OpenParen(_)) => break,
                            Some(op) => output.extend(op.into_postfix()),
                            None => {
                                return Err(ParseError::MismatchedParenthesis {
                                    opening: false,
                                    span,
                                });
                            },
                        }
                    }

                    if let Some(StackOp::Func(..)) = stack.last() {
                        output.extend(stack.pop().and_then(StackOp::into_postfix));
                    }
                },
            }
        }

        if expect_operand {
            let span = tokens.last()
                .map_or_else(|| self.eof_span(), |token| token.span.end..token.span.end);
            return Err(ParseError::EmptyExpression { span });
        }

        while let Some(op) = stack.pop() {
            match op {
                StackOp::OpenParen(span) => {
                    return Err(ParseError::MismatchedParenthesis { opening: true, span });
                },
                op => output.extend(op.into_postfix()),
            }
        }

        Ok(output)
    }

    /// Builds the expression tree from postfix output, using a stack of operands.
    fn reduce(&self, postfix: Vec<Postfix>) -> Result<Expr, ParseError> {
        let mut operands: Vec<(Expr, Range<usize>)> = Vec::new();

        for item in postfix {
            match item {
                Postfix::Operand(expr, span) => operands.push((expr, span)),
                Postfix::Binary(op, span) => {
                    let (rhs, rhs_span) = operands.pop()
                        .ok_or(ParseError::EmptyExpression { span: span.clone() })?;
                    let (lhs, lhs_span) = operands.pop()
                        .ok_or(ParseError::EmptyExpression { span })?;
                    operands.push((Expr::binary(lhs, op, rhs), lhs_span.start..rhs_span.end));
                },
                Postfix::Unary(op, span) => {
                    let (operand, operand_span) = operands.pop()
                        .ok_or(ParseError::EmptyExpression { span: span.clone() })?;
                    let expr = match op {
                        UnaryOpKind::Neg => Expr::neg(operand),
                    };
                    operands.push((expr, span.start..operand_span.end));
                },
                Postfix::Call(func, span) => {
                    let (arg, arg_span) = operands.pop()
                        .ok_or(ParseError::EmptyExpression { span: span.clone() })?;
                    operands.push((Expr::call(func, arg), span.start..arg_span.end));
                },
            }
        }

        let mut operands = operands.into_iter();
        match (operands.next(), operands.next()) {
            (Some((expr, _)), None) => Ok(expr),
            (Some(_), Some((_, span))) => Err(ParseError::EmptyExpression { span }),
            (None, _) => Err(ParseError::EmptyExpression { span: self.eof_span() }),
        }
    }
}

/// Parses the given source into an expression tree.
///
/// This is shorthand for `Parser::new(source).parse()`.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn int(n: i64) -> Expr {
        Expr::int(n)
    }

    #[test]
    fn literal_int() {
        let expr = parse("16").unwrap();
        assert!(matches!(expr, Expr::Constant(Number::Integer(16))));
    }

    #[test]
    fn literal_float() {
        let expr = parse("3.14").unwrap();
        assert!(matches!(expr, Expr::Constant(Number::Float(f)) if f == 3.14));
    }

    #[test]
    fn variable() {
        assert_eq!(parse("pi").unwrap(), Expr::var("pi"));
    }

    #[test]
    fn binary_left_associativity() {
        let expr = parse("3 * x * 5").unwrap();
        assert_eq!(expr, Expr::binary(
            Expr::binary(int(3), BinOpKind::Mul, x()),
            BinOpKind::Mul,
            int(5),
        ));
        assert_eq!(parse("8 - 4 - 2").unwrap(), (int(8) - int(4)) - int(2));
        assert_ne!(parse("8 - 4 - 2").unwrap(), int(8) - (int(4) - int(2)));
    }

    #[test]
    fn binary_left_associativity_mix_precedence() {
        let expr = parse("3 + 4 * a + b").unwrap();
        assert_eq!(expr, (int(3) + int(4) * Expr::var("a")) + Expr::var("b"));
    }

    #[test]
    fn binary_right_associativity() {
        let expr = parse("2 ** 3 ** 4").unwrap();
        assert_eq!(expr, int(2).pow(int(3).pow(int(4))));

        let expr = parse("2 ^ 3 ^ 4").unwrap();
        assert_eq!(expr, int(2) ^ (int(3) ^ int(4)));
    }

    #[test]
    fn modulo() {
        let expr = parse("x % 3 * 2").unwrap();
        assert_eq!(expr, (x() % int(3)) * int(2));
    }

    #[test]
    fn parenthesized() {
        let expr = parse("(1 + x) * (3 * x ** 2)").unwrap();
        assert_eq!(expr, (int(1) + x()) * (int(3) * x().pow(int(2))));
    }

    #[test]
    fn unary_negation() {
        assert_eq!(parse("-x").unwrap(), -x());
        assert_eq!(parse("--x").unwrap(), -(-x()));
        assert_eq!(parse("2 - -3").unwrap(), int(2) - -int(3));
        assert_eq!(parse("-x * 2").unwrap(), -x() * int(2));
    }

    #[test]
    fn negation_binds_tighter_than_power() {
        assert_eq!(parse("-x ** 2").unwrap(), (-x()).pow(int(2)));
        assert_eq!(parse("2 ** -3").unwrap(), int(2).pow(-int(3)));
        assert_eq!(parse("2 ** -x ** 2").unwrap(), int(2).pow((-x()).pow(int(2))));
    }

    #[test]
    fn function_calls() {
        let expr = parse("sin(x) * cos(2 * x)").unwrap();
        assert_eq!(expr, Expr::call(FuncKind::Sin, x()) * Expr::call(FuncKind::Cos, int(2) * x()));

        let expr = parse("exp(log(x)) ** 2").unwrap();
        assert_eq!(expr, Expr::call(FuncKind::Exp, Expr::call(FuncKind::Log, x())).pow(int(2)));

        let expr = parse("-tan(-x)").unwrap();
        assert_eq!(expr, -Expr::call(FuncKind::Tan, -x()));
    }

    #[test]
    fn unknown_name_before_paren_is_grouping() {
        // `f` is not a function, so `f(x)` is a variable next to a parenthesized expression
        assert_eq!(parse("f(x)").unwrap_err(), ParseError::EmptyExpression { span: 1..2 });
    }

    #[test]
    fn unclosed_paren() {
        assert_eq!(
            parse("(1+2").unwrap_err(),
            ParseError::MismatchedParenthesis { opening: true, span: 0..1 },
        );
    }

    #[test]
    fn unopened_paren() {
        assert_eq!(
            parse("1+2)").unwrap_err(),
            ParseError::MismatchedParenthesis { opening: false, span: 3..4 },
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse("").unwrap_err(), ParseError::EmptyExpression { span: 0..0 });
        assert_eq!(parse("   ").unwrap_err(), ParseError::EmptyExpression { span: 3..3 });
        assert_eq!(parse("()").unwrap_err(), ParseError::EmptyExpression { span: 1..2 });
    }

    #[test]
    fn missing_operand() {
        assert_eq!(parse("1 +").unwrap_err(), ParseError::EmptyExpression { span: 3..3 });
        assert_eq!(parse("* 2").unwrap_err(), ParseError::EmptyExpression { span: 0..1 });
        assert_eq!(parse("sin()").unwrap_err(), ParseError::EmptyExpression { span: 4..5 });
    }

    #[test]
    fn adjacent_operands() {
        assert_eq!(parse("2 3").unwrap_err(), ParseError::EmptyExpression { span: 2..3 });
        assert_eq!(parse("1 2 +").unwrap_err(), ParseError::EmptyExpression { span: 2..3 });
    }

    #[test]
    fn unknown_character() {
        assert_eq!(
            parse("1 + #").unwrap_err(),
            ParseError::UnknownToken { lexeme: "#".to_string(), span: 4..5 },
        );
    }

    #[test]
    fn display_round_trip() {
        for source in [
            "x + 2 * y",
            "(x + 1) * 3",
            "x ** (y ** z)",
            "-(x - 1) / sin(x)",
            "log(x) % 2.5",
            "x - -3",
        ] {
            let expr = parse(source).unwrap();
            assert_eq!(parse(&expr.to_string()).unwrap(), expr);
        }
    }
}
