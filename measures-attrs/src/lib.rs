mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any struct with named fields, or for unit structs.
///
/// The information of the error is customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use measures_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not a number", self.found),
///     labels = ["expected a value here"],
///     help = "conversions are written as `<value> <from> <to>`",
/// )]
/// pub struct ExpectedValue {
///     found: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, each pointing at the span with the same index.      |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `note`      | Optional note with additional context about the error.                       |
///
/// Each tag accepts an expression that should evaluate to something implementing
/// [`ToString`]. The expression is evaluated with the members of the struct in scope, so they can
/// be used in the expression (tuple structs are not supported). An empty label string attaches a
/// highlight to its span without a message.
///
/// The generated code refers to `measures_error`, which must be a dependency of the crate using
/// the derive.
///
/// [`ErrorKind`]: https://docs.rs/measures-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl measures_error::ErrorKind for #name {
            #target
        }
    }.into()
}
