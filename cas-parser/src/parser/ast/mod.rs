//! The abstract syntax tree produced by the [`Parser`](crate::parser::Parser).

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::{Expr, Primary};
pub use literal::{LitFloat, LitInt, LitSym, Literal};
pub use paren::Paren;
pub use unary::Unary;
pub use crate::parser::token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
