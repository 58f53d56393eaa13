//! Errors produced when converting a parsed expression into a [`Term`](super::Term).

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;
use super::Func;

/// A function with an unknown name was called.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function"],
    help = match suggestion {
        Some(suggestion) => format!("did you mean `{}`?", suggestion.fg(EXPR)),
        None => format!(
            "the supported functions are: {}",
            Func::ALL.iter().map(|func| func.name()).collect::<Vec<_>>().join(", "),
        ),
    },
    note = format!("to multiply by `{}`, write `{} * (...)`", name, name),
)]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// The name of a supported function that is spelled similarly, if any.
    pub suggestion: Option<&'static str>,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments for `{}`", name),
    labels = ["this function call", ""],
    help = format!("`{}` takes exactly {} argument, but {} were given", name, "1".fg(EXPR), given),
)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: &'static str,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An exponent could not be evaluated to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is not a number",
    labels = ["this exponent"],
    help = format!("exponents must evaluate to a {}, such as `2` or `1/2`", "number".fg(EXPR)),
)]
pub struct NonNumericExponent;

/// A numeric literal could not be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", literal),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The literal as it was written.
    pub literal: String,
}
