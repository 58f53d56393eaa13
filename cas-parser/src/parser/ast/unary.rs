use crate::parser::{
    ast::{binary::Binary, expr::{Expr, Primary}},
    error::Error,
    token::op::UnaryOp,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
///
/// The only unary operator is negation, which is right-associative and binds more loosely than
/// exponentiation, so `-x^2` is parsed as `-(x^2)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parse a unary expression with right-associativity.
    pub fn parse_right(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let op_precedence = op.precedence();
        let start_span = op.span.start;
        let operand = {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op_precedence)?
        };
        let end_span = operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }

    /// Parses a unary expression, or lower precedence expressions (a [`Primary`]) if there is no
    /// unary operator.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        if input.peek::<UnaryOp>().is_some() {
            Self::parse_right(input).map(Expr::Unary)
        } else {
            input.try_parse::<Primary>().map(Into::into)
        }
    }
}

impl std::fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}
