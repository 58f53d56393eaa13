//! Parsing of the commands accepted by the REPL.
//!
//! A line is either an expression to simplify, or a derivative command of the form
//! `diff <variable>[^<order>] <expression>`.

use cas_error::Error;
use cas_parser::tokenizer::{tokenize_complete, TokenKind};
use cas_simplify::Term;
use std::ops::Range;
use super::error::{InvalidOrder, InvalidVariable, MissingExpression, MissingVariable};

/// The keyword that starts a derivative command.
const DIFF: &str = "diff";

/// A command entered into the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Simplify the expression.
    Simplify(Term),

    /// Compute the first `order` derivatives of the expression with respect to `variable`.
    Derivative {
        variable: String,
        order: usize,
        term: Term,
    },
}

/// Returns the span of the next whitespace-separated word at or after `from`.
fn next_word(line: &str, from: usize) -> Option<Range<usize>> {
    let start = from + line[from..].find(|c: char| !c.is_whitespace())?;
    let end = line[start..]
        .find(char::is_whitespace)
        .map_or(line.len(), |len| start + len);
    Some(start..end)
}

/// Parses the expression starting at byte `offset` of the line. The spans of any error point into
/// the whole line.
fn parse_term(line: &str, offset: usize) -> Result<Term, Error> {
    line[offset..].parse::<Term>().map_err(|mut err| {
        for span in err.spans.iter_mut() {
            span.start += offset;
            span.end += offset;
        }
        err
    })
}

/// Returns true if the given string is exactly one name token.
fn is_variable_name(name: &str) -> bool {
    matches!(&*tokenize_complete(name), [token] if token.kind == TokenKind::Name)
}

/// Parses the rest of a derivative command, where `keyword` is the span of `diff`.
fn parse_derivative(line: &str, keyword: Range<usize>) -> Result<Command, Error> {
    let Some(word) = next_word(line, keyword.end) else {
        return Err(Error::new(vec![keyword], MissingVariable));
    };

    let (name, order) = match line[word.clone()].split_once('^') {
        Some((name, order)) => {
            let order_span = word.start + name.len() + 1..word.end;
            let order = order
                .parse::<usize>()
                .ok()
                .filter(|order| *order >= 1)
                .ok_or_else(|| Error::new(vec![order_span], InvalidOrder { order: order.to_owned() }))?;
            (name, order)
        },
        None => (&line[word.clone()], 1),
    };

    if !is_variable_name(name) {
        return Err(Error::new(vec![word], InvalidVariable { name: name.to_owned() }));
    }

    if line[word.end..].trim().is_empty() {
        return Err(Error::new(vec![word], MissingExpression));
    }

    Ok(Command::Derivative {
        variable: name.to_owned(),
        order,
        term: parse_term(line, word.end)?,
    })
}

/// Parses a line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, Error> {
    match next_word(line, 0) {
        Some(keyword) if &line[keyword.clone()] == DIFF => parse_derivative(line, keyword),
        _ => parse_term(line, 0).map(Command::Simplify),
    }
}
