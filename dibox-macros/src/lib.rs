use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use std::env::var_os;
use syn::parse::Parse;

mod injectable;

/// Implements `dibox::Injectable` for a struct with named fields.
///
/// Fields marked with `#[inject("service-name")]` are filled by `Container::inject`.
/// Only the first comma-separated segment of the tag is the service name, the rest is reserved.
/// Fields without the attribute are left untouched.
///
/// ```ignore
/// #[derive(Injectable, Default)]
/// struct Handler {
///     #[inject("database")]
///     db: Option<Arc<Database>>,
///     requests: u64,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(item: TokenStream) -> TokenStream {
    expand_with(item, injectable::expand)
}

fn expand_with<F, I, K>(input: TokenStream, f: F) -> TokenStream
where
    F: FnOnce(I) -> syn::Result<K>,
    I: Parse,
    K: ToTokens,
{
    expand(syn::parse(input).and_then(f))
}

fn expand<T>(result: syn::Result<T>) -> TokenStream
where
    T: ToTokens,
{
    match result {
        Ok(tokens) => {
            let tokens = (quote! { #tokens }).into();
            if var_os("MACROS_DEBUG").is_some() {
                eprintln!("{tokens}");
            }
            tokens
        }
        Err(err) => err.into_compile_error().into(),
    }
}
