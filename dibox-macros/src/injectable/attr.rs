use syn::{
    parse::{Parse, ParseStream},
    Attribute, Error, LitStr, Token,
};

/// `#[inject("service-name[,reserved...]")]`
pub(crate) struct InjectArgs {
    pub(super) tag: LitStr,
}

impl Parse for InjectArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a service name, e.g. `#[inject(\"database\")]`"));
        }

        let tag = input.parse::<LitStr>()?;
        let _ = input.parse::<Token![,]>();

        if !input.is_empty() {
            return Err(input.error("unexpected arguments after the service name"));
        }

        Ok(Self { tag })
    }
}

/// Returns `None` if the field has no `inject` attribute.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> Option<syn::Result<InjectArgs>> {
    let mut iter = attrs.iter().filter(|attr| attr.path().is_ident("inject"));
    let first = iter.next()?;

    if let Some(duplicate) = iter.next() {
        return Some(Err(Error::new_spanned(duplicate, "`inject` specified more than once")));
    }

    Some(first.parse_args::<InjectArgs>())
}
