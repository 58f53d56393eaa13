use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    starts_implicit_operand,
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Creates a binary node from its parts, filling in the span of an implicit operator.
    fn new(lhs: Expr, mut op: BinOp, rhs: Expr) -> Self {
        let (start_span, end_span) = (lhs.span().start, rhs.span().end);
        if op.implicit {
            op.span = lhs.span().end..rhs.span().start;
        }
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span: start_span..end_span,
        }
    }

    /// Returns the implicit multiplication operator, if the next token begins an operand that
    /// should be multiplied with the preceding expression.
    fn implicit_multiplication(input: &Parser) -> Option<BinOp> {
        starts_implicit_operand(input.peek_token()).then(|| BinOp {
            kind: BinOpKind::Mul,
            implicit: true,
            span: 0..0,
        })
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, we should check the precedence of the
            // following operator, if any
            // this is because we can't parse an expression like `3 + 4 * 5`, as (3 + 4) * 5
            if let Some(next_op) = input.peek::<BinOp>() {
                if next_op.precedence() > precedence
                    || (next_op.precedence() == precedence && next_op.associativity() == Associativity::Right)
                {
                    // this operator has a higher precedence or it is right associative, so we
                    // should parse its expression starting with `rhs` first
                    rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                } else {
                    // this operator has lower precedence, or equal precedence and
                    // left-associativity; this is in scenarios like:
                    // `1 * 2 + 3` or `1 * 2 * 3`
                    //
                    // so just break out of the loop and let `lhs` become `1 * 2`
                    // we will parse this operator on the next iteration of the outside loop
                    break;
                }
            } else if precedence < Precedence::Factor && Self::implicit_multiplication(input).is_some() {
                // there is no operator, but an operand follows: implicit multiplication binds
                // tighter than the previous operator
                rhs = Self::parse_expr(input, rhs, Precedence::Factor)?;
            } else {
                break;
            }
        }

        Ok(Expr::Binary(Self::new(lhs, op, rhs)))
    }

    /// Parses a binary expression starting with the given left-hand-side, consuming only
    /// operators whose precedence is at least `precedence`.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let op = match input.peek::<BinOp>() {
                Some(op) if op.precedence() >= precedence => {
                    input.try_parse::<BinOp>()?;
                    op
                },
                Some(_) => break,
                None if Precedence::Factor >= precedence => {
                    // implicit multiplication test
                    match Self::implicit_multiplication(input) {
                        Some(op) => op,
                        None => break,
                    }
                },
                None => break,
            };

            let rhs = Unary::parse_or_lower(input)?;
            lhs = Self::complete_rhs(input, lhs, op, rhs)?;
        }

        Ok(lhs)
    }
}

impl std::fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.op.implicit {
            write!(f, "{}{}", self.lhs, self.rhs)
        } else if self.op.kind == BinOpKind::Exp {
            write!(f, "{}{}{}", self.lhs, self.op, self.rhs)
        } else {
            write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
        }
    }
}
