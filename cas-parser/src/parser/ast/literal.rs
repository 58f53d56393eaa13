use crate::parser::{
    error::Error,
    token::{Float, Int, Name},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generates a literal type that keeps the lexeme of a single token, named `$field`, along with
/// its span. Literals are kept as written; converting a number into a value is left to the
/// consumer of the syntax tree.
macro_rules! lexeme_literal {
    ($(#[$doc:meta])* $name:ident($token:ident) { $field:ident }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name {
            pub $field: String,

            /// The region of the source code that this literal was parsed from.
            pub span: Range<usize>,
        }

        impl Parse for $name {
            fn parse(input: &mut Parser) -> Result<Self, Error> {
                let token = input.try_parse::<$token>()?;
                Ok(Self { $field: token.lexeme, span: token.span })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.$field)
            }
        }
    };
}

lexeme_literal! {
    /// A run of digits, such as `16`.
    LitInt(Int) { value }
}

lexeme_literal! {
    /// Digits with a decimal point, such as `3.5`, `3.` or `.5`.
    LitFloat(Float) { value }
}

lexeme_literal! {
    /// A name: a variable such as `x`, a named constant such as `pi`, or the name of a called
    /// function.
    LitSym(Name) { name }
}

/// A leaf of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    Integer(LitInt),
    Float(LitFloat),
    Symbol(LitSym),
}

impl Literal {
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(LitInt { span, .. })
                | Literal::Float(LitFloat { span, .. })
                | Literal::Symbol(LitSym { span, .. }) => span.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Integer(int) => int.fmt(f),
            Literal::Float(float) => float.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
