//! Operators of the expression grammar.
//!
//! | Operators                | Precedence             | Associativity |
//! | ------------------------ | ---------------------- | ------------- |
//! | `a ^ b`                  | [`Precedence::Exp`]    | right         |
//! | `-a`                     | [`Precedence::Neg`]    | right         |
//! | `a * b`, `a / b`, `a b`  | [`Precedence::Factor`] | left          |
//! | `a + b`, `a - b`         | [`Precedence::Term`]   | left          |
//!
//! `a b` is implicit multiplication, inserted by the parser rather than read from a token.

use crate::{
    parser::{
        error::{Error, kind},
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a unary operator. Negation is the only one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
}

/// A prefix `-`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl UnaryOp {
    /// Negation binds looser than `^` and tighter than everything else.
    pub fn precedence(&self) -> Precedence {
        Precedence::Neg
    }
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Sub => Ok(Self { kind: UnaryOpKind::Neg, span: token.span }),
            found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Sub],
                found,
            })),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "-")
    }
}

/// The kind of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// The tokens that are read as binary operators.
    const TOKENS: &'static [TokenKind] = &[
        TokenKind::Exp,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Add,
        TokenKind::Sub,
    ];

    /// Returns the operator written with the given token, if any.
    fn from_token(token: TokenKind) -> Option<Self> {
        match token {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }

    /// The symbol the operator is written with.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Only `^` groups to the right: `2^3^2` is `2^(3^2)`.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

/// A binary operator, either read from a token or inserted for implicit multiplication.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    pub kind: BinOpKind,

    /// Whether the parser inserted this operator between two juxtaposed operands, as in `2x`.
    pub implicit: bool,

    /// The region of the source code that this operator was parsed from. For an implicit
    /// operator, this is the gap between its operands.
    pub span: Range<usize>,
}

impl BinOp {
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match BinOpKind::from_token(token.kind) {
            Some(kind) => Ok(Self { kind, implicit: false, span: token.span }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: BinOpKind::TOKENS,
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind.symbol())
    }
}
