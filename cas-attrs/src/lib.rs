mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct with named fields, or for unit structs.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use cas_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of file", labels = ["add something here"])]
/// pub struct Foo;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown function `{}`", name),
///     labels = ["this function"],
///     help = "check the spelling of the function name",
/// )]
/// pub struct Bar {
///     name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An iterable of label texts, one for each span the error is associated with.  |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `note`      | Optional note with additional context about the error.                       |
///
/// Each tag accepts an expression whose value implements [`ToString`]. For structs with named
/// fields, the expression is evaluated with the members of the struct in scope, so they can be
/// used in the expression (tuple structs are not supported). Labels are paired with spans in
/// order; an empty label highlights its span without any text, and spans beyond the last label
/// are highlighted the same way.
///
/// [`ErrorKind`]: https://docs.rs/cas-error/latest/cas_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl cas_error::ErrorKind for #name {
            #target
        }
    }.into()
}
