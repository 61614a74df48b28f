//! Derive macro for `declarg`.
//! See the `declarg` crate root for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParsed;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `FromParsedArgs` for a struct with named fields.
///
/// Each field is read from the parsed arguments under its own name, converted via `FromValue`.
/// * `#[declarg(rename = "name")]` reads the field under a different name (ex: one containing a dash).
/// * `#[declarg(rest)]` reads the catch-all `_` (typically into a `Vec<String>`).
#[proc_macro_derive(FromParsedArgs, attributes(declarg))]
pub fn from_parsed_args(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveParsed::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
