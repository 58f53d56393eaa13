use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::Call,
            literal::{LitFloat, LitInt, LitSym, Literal},
            paren::Paren,
            unary::Unary,
        },
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
///
/// An expression is any valid piece of input that can be converted into a term and simplified,
/// such as `x^2 + 3x - 5` or `sin(x)/cos(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `ln(x)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            _ => self,
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression.
///
/// Primary expressions are the operands of unary and binary operators: literals, function calls
/// and parenthesized expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    Literal(Literal),
    Paren(Paren),
    Call(Call),
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some(token) = input.peek_token().cloned() else {
            return Err(Error::new(vec![input.eof_span()], kind::UnexpectedEof));
        };

        match token.kind {
            TokenKind::Int => input.try_parse::<LitInt>().map(|int| Primary::Literal(Literal::Integer(int))),
            TokenKind::Float => input.try_parse::<LitFloat>().map(|float| Primary::Literal(Literal::Float(float))),
            TokenKind::Name => {
                let name = input.try_parse::<LitSym>()?;

                // a call only if the parenthesis immediately follows the name: `f (x)` is `f * x`
                if input.current_token().map(|token| token.kind) == Some(TokenKind::OpenParen) {
                    Call::parse_args(input, name).map(Primary::Call)
                } else {
                    Ok(Primary::Literal(Literal::Symbol(name)))
                }
            },
            TokenKind::OpenParen => input.try_parse::<Paren>().map(Primary::Paren),
            TokenKind::Symbol => Err(Error::new(vec![token.span], kind::UnknownSymbol {
                symbol: token.lexeme.to_owned(),
            })),
            found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Name, TokenKind::OpenParen],
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Call(call) => Self::Call(call),
        }
    }
}
