pub mod op;

use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a struct holding the lexeme and span of a single token of each listed kind, and a
/// [`Parse`] implementation that accepts only that kind. Parsing code can then request a token
/// by type, as in `input.try_parse::<OpenParen>()`.
macro_rules! token_kinds {
    ($($(#[$doc:meta])* $name:ident,)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name {
                pub(crate) lexeme: String,
                pub(crate) span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token()?;
                    match token.kind {
                        TokenKind::$name => Ok(Self {
                            lexeme: token.lexeme.to_owned(),
                            span: token.span,
                        }),
                        found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found,
                        })),
                    }
                }
            }
        )*
    };
}

token_kinds! {
    /// `,`, separating the arguments of a call.
    Comma,

    /// `(`
    OpenParen,

    /// `)`
    CloseParen,

    /// A variable, constant, or function name.
    Name,

    /// An integer literal.
    Int,

    /// A decimal literal.
    Float,
}
