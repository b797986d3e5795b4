mod attr;

use crate::injectable::attr::parse_field_attrs;

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{Data, DeriveInput, Error, Fields, LitStr};

struct InjectField {
    ident: syn::Ident,
    tag: LitStr,
}

pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => return Ok(expand_impl(&input, &[])),
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    &data.fields,
                    "`Injectable` can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.ident.span(),
                "`Injectable` can only be derived for structs",
            ))
        }
    };

    let mut inject_fields = Vec::new();
    for field in fields {
        let Some(args) = parse_field_attrs(&field.attrs).transpose()? else {
            continue;
        };
        check_tag(&args.tag)?;

        // Named fields always have an ident
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        inject_fields.push(InjectField { ident, tag: args.tag });
    }

    Ok(expand_impl(&input, &inject_fields))
}

/// Rejects tags whose service name can never be registered.
/// An empty service name is allowed and means the field isn't a dependency.
fn check_tag(tag: &LitStr) -> syn::Result<()> {
    let value = tag.value();
    let service = value.split(',').next().unwrap_or_default().trim();
    if service.is_empty() {
        return Ok(());
    }

    let mut chars = service.chars();
    let valid = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::new_spanned(
            tag,
            format!("invalid service name `{service}`, expected `[A-Za-z][\\w\\-.]*`"),
        ))
    }
}

fn expand_impl(input: &DeriveInput, fields: &[InjectField]) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let dependencies_quote = fields.iter().map(|InjectField { ident, tag }| {
        let field_name = ident.to_string();
        quote_spanned! { tag.span() =>
            ::dibox::Dependency::from_tag(#field_name, #tag)
        }
    });

    let assign_arms_quote = fields.iter().map(|InjectField { ident, .. }| {
        let field_name = ident.to_string();
        quote! {
            #field_name => ::dibox::macros_utils::assign(&mut self.#ident, dependency, service),
        }
    });

    let dependencies_body = if fields.is_empty() {
        quote! { ::dibox::macros_utils::aliases::Vec::new() }
    } else {
        quote! {
            [
                #( #dependencies_quote, )*
            ]
            .into_iter()
            .flatten()
            .collect()
        }
    };
    let service_binding = if fields.is_empty() {
        quote! { _service }
    } else {
        quote! { service }
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics ::dibox::Injectable for #ident #ty_generics #where_clause {
            fn dependencies() -> ::dibox::macros_utils::aliases::Vec<::dibox::Dependency> {
                #dependencies_body
            }

            fn assign(
                &mut self,
                dependency: &::dibox::Dependency,
                #service_binding: ::dibox::RcAny,
            ) -> ::core::result::Result<(), ::dibox::InjectErrorKind> {
                match dependency.field {
                    #( #assign_arms_quote )*
                    field => ::core::result::Result::Err(::dibox::InjectErrorKind::UnknownField { field }),
                }
            }
        }
    }
}
