use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression in parentheses, such as the `(x + 1)` in `3(x + 1)`.
///
/// Parentheses only group; `((x))` and `x` convert into the same term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    pub expr: Box<Expr>,

    /// The region of the source code from the opening to the closing parenthesis, inclusive.
    pub span: Range<usize>,
}

impl Paren {
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the expression inside all directly nested parentheses.
    pub fn innermost(&self) -> &Expr {
        match self.expr.as_ref() {
            Expr::Paren(paren) => paren.innermost(),
            expr => expr,
        }
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;

        // `()` is reported as a whole, instead of as a missing operand at `)`
        if let Some(close) = input.peek_token().filter(|token| token.kind == TokenKind::CloseParen) {
            return Err(Error::new(vec![open.span.start..close.span.end], kind::EmptyParenthesis));
        }

        let expr = input.try_parse::<Expr>()?;
        let close = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new(vec![open.span.clone()], kind::UnclosedParenthesis))?;

        Ok(Self {
            expr: Box::new(expr),
            span: open.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
