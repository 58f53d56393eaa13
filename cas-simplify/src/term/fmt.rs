//! Conversion of a [`Term`] back into human-readable notation.
//!
//! Parentheses are only inserted where operator precedence requires them, a sum whose right
//! operand has a negative coefficient is written as a subtraction, and `-1 * a` is written as
//! `-a`. Integral constants are written without a decimal point.

use std::fmt::{self, Display, Formatter};
use super::Term;

/// Returns the binding strength of the term when displayed. Higher values bind tighter.
fn precedence(term: &Term) -> u8 {
    match term {
        Term::Sum(..) | Term::Difference(..) => 1,
        Term::Product(lhs, _) if lhs.is_value(-1.0) => 3,
        Term::Product(..) | Term::Quotient(..) => 2,
        Term::Constant(value) if *value < 0.0 => 3,
        Term::Power(..) => 4,
        Term::Constant(_) | Term::Variable(_) | Term::Function(..) => 5,
    }
}

/// Returns true if the displayed term starts with a minus sign.
fn is_negative(term: &Term) -> bool {
    match term {
        Term::Constant(value) => *value < 0.0,
        Term::Product(lhs, _) => lhs.as_constant().map_or(false, |c| c < 0.0),
        _ => false,
    }
}

/// Writes the term, wrapped in parentheses if `parens` is true.
fn fmt_operand(f: &mut Formatter, term: &Term, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", term)
    } else {
        write!(f, "{}", term)
    }
}

/// Writes a constant. Negative zero is written as `0`.
fn fmt_constant(f: &mut Formatter, value: f64) -> fmt::Result {
    if value == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{}", value)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Term::Constant(value) => fmt_constant(f, *value),
            Term::Variable(name) => write!(f, "{}", name),
            Term::Function(func, argument) => write!(f, "{}({})", func.name(), argument),
            Term::Power(base, exponent) => {
                fmt_operand(f, base, precedence(base) <= 4)?;
                if *exponent < 0.0 {
                    write!(f, "^(")?;
                    fmt_constant(f, *exponent)?;
                    write!(f, ")")
                } else {
                    write!(f, "^")?;
                    fmt_constant(f, *exponent)
                }
            },
            Term::Sum(lhs, rhs) => {
                write!(f, "{}", lhs)?;
                if is_negative(rhs) {
                    let negated = -*rhs.clone();
                    write!(f, " - ")?;
                    fmt_operand(f, &negated, precedence(&negated) <= 1)
                } else {
                    write!(f, " + ")?;
                    fmt_operand(f, rhs, precedence(rhs) <= 1)
                }
            },
            Term::Difference(lhs, rhs) => {
                write!(f, "{} - ", lhs)?;
                fmt_operand(f, rhs, precedence(rhs) <= 1 || is_negative(rhs))
            },
            Term::Product(lhs, rhs) if lhs.is_value(-1.0) => {
                write!(f, "-")?;
                fmt_operand(f, rhs, precedence(rhs) <= 2 || is_negative(rhs))
            },
            Term::Product(lhs, rhs) => {
                fmt_operand(f, lhs, precedence(lhs) < 2)?;
                write!(f, " * ")?;
                fmt_operand(f, rhs, precedence(rhs) < 2 || is_negative(rhs))
            },
            Term::Quotient(lhs, rhs) => {
                fmt_operand(f, lhs, precedence(lhs) < 2)?;
                write!(f, " / ")?;
                fmt_operand(f, rhs, precedence(rhs) <= 2 || is_negative(rhs))
            },
        }
    }
}
