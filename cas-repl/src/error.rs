//! Errors produced when reading a REPL command.

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;

/// The `diff` command was not given a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing variable to differentiate with respect to",
    labels = ["after this command"],
    help = format!("write the variable after `diff`, for example: {}", "diff x x^2".fg(EXPR)),
)]
pub struct MissingVariable;

/// The `diff` command was given an order that is not a positive integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid derivative order `{}`", order),
    labels = ["this order"],
    help = format!("the order must be a positive integer, for example: {}", "diff x^2 x^3".fg(EXPR)),
)]
pub struct InvalidOrder {
    /// The order as it was written.
    pub order: String,
}

/// The `diff` command was given something that is not a variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a variable name", name),
    labels = ["this name"],
    help = "variable names start with a letter or underscore, followed by letters, digits, or underscores",
)]
pub struct InvalidVariable {
    /// The name as it was written.
    pub name: String,
}

/// The `diff` command was not given an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression to differentiate",
    labels = ["after this variable"],
)]
pub struct MissingExpression;
