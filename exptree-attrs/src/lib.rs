mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct or enum, along with [`Display`] (the
/// error message) and [`std::error::Error`].
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it. On a struct, the attribute goes on the struct itself; on an enum,
/// each variant carries its own attribute:
/// ```
/// use exptree_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
///
/// #[derive(Debug, ErrorKind)]
/// pub enum Bar {
///     #[error(message = format!("`{}` is not bound", name), labels = ["this variable"])]
///     Unbound { name: String },
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of labels; the `i`th label points at the `i`th span of the error.   |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression implementing [`ToString`] (every element of `labels` must have
/// the same type). The expression is evaluated with the named fields of the struct or variant in
/// scope, so they can be used in the expression. Fields of tuple structs and variants are not
/// in scope.
///
/// [`ErrorKind`]: https://docs.rs/exptree-error
/// [`Display`]: std::fmt::Display
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    target.into_token_stream().into()
}
