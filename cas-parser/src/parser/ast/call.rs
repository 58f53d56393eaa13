use crate::{
    parser::{
        ast::{expr::Expr, literal::LitSym},
        error::{kind, Error},
        token::{CloseParen, Comma, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sin(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a set of two spans, where the first is the span of the function name (with the
    /// opening parenthesis) and the second is the span of the closing parenthesis.
    pub fn outer_span(&self) -> [Range<usize>; 2] {
        [
            self.name.span.start..self.paren_span.start + 1,
            self.paren_span.end - 1..self.paren_span.end,
        ]
    }

    /// Parses the parenthesized argument list of a call to the function with the given name.
    pub(crate) fn parse_args(input: &mut Parser, name: LitSym) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        let unclosed = || Error::new(vec![open_paren.span.clone()], kind::UnclosedParenthesis);

        let mut args = Vec::new();
        if input.peek_token().map(|token| token.kind) != Some(TokenKind::CloseParen) {
            loop {
                args.push(input.try_parse::<Expr>()?);
                if input.try_parse::<Comma>().is_err() {
                    break;
                }
            }
        }

        let close_paren = input.try_parse::<CloseParen>().map_err(|_| unclosed())?;
        let span = name.span.start..close_paren.span.end;
        Ok(Self {
            name,
            args,
            span,
            paren_span: open_paren.span.start..close_paren.span.end,
        })
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        Self::parse_args(input, name)
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if let Some((last, rest)) = self.args.split_last() {
            for arg in rest {
                write!(f, "{}, ", arg)?;
            }
            write!(f, "{}", last)?;
        }
        write!(f, ")")
    }
}
