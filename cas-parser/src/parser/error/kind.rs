use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;
use crate::tokenizer::TokenKind;

/// Lists the descriptions of the given token kinds, without repeats.
fn describe_all(kinds: &[TokenKind]) -> String {
    let mut descriptions = Vec::<&str>::new();
    for kind in kinds {
        if !descriptions.contains(&kind.describe()) {
            descriptions.push(kind.describe());
        }
    }
    descriptions.join(", ")
}

/// The input ended in the middle of an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("expected an {} here", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// A complete expression was parsed, but input remains after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = ["this is not part of the expression"],
    help = format!("use {} to multiply and {} to raise to a power", "*".fg(EXPR), "^".fg(EXPR)),
)]
pub struct ExpectedEof;

/// A token appeared where a different one was required.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected {}", found.describe()),
    labels = [format!("expected {}", describe_all(expected))],
)]
pub struct UnexpectedToken {
    /// The token kinds that would have been accepted.
    pub expected: &'static [TokenKind],

    /// The token kind that was found.
    pub found: TokenKind,
}

/// A character that is not part of any operator, number, or name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized character `{}`", symbol),
    labels = ["this character"],
    help = "expressions are built from numbers, names, `+ - * / ^`, commas, and parentheses",
)]
pub struct UnknownSymbol {
    /// The character as it was written.
    pub symbol: String,
}

/// An opening parenthesis has no matching closing parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is never closed"],
    help = format!("add a closing parenthesis {} after the expression", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// A pair of parentheses contains nothing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parentheses",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn describe_without_repeats() {
        assert_eq!(
            describe_all(&[TokenKind::Int, TokenKind::Float, TokenKind::Name, TokenKind::OpenParen]),
            "a number, a name, `(`",
        );
    }
}
