//! Tokenizer and parser for the mathematical expressions accepted by the simplifier.
//!
//! The entry point is [`parser::Parser`], which turns a source string into an [`Expr`] abstract
//! syntax tree. Every node of the tree keeps the region of the source it was parsed from, so that
//! later stages can point at the offending part of the input when reporting errors.
//!
//! [`Expr`]: parser::ast::Expr

pub mod parser;
pub mod tokenizer;
