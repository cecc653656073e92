//! Implementation of the `#[derive(KeyPaths)]` macro.
//!
//! This macro generates one associated function per named field returning a
//! `keypath::KeyPath<Self, FieldType>` that clones the field.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_key_attrs;

/// Main implementation of the KeyPaths derive macro.
pub fn keypaths_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "KeyPaths cannot be derived for generic structs",
        ));
    }

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "KeyPaths can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "KeyPaths can only be derived for structs",
            ))
        }
    };

    let mut constructors: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let key_attrs = parse_key_attrs(&field.attrs)?;
        if key_attrs.skip {
            continue;
        }

        let fn_name = key_attrs.rename.unwrap_or_else(|| field_name.clone());
        let field_ty = &field.ty;
        let vis = &field.vis;
        let doc = format!("Key path to the `{}` field.", field_name);

        constructors.push(quote! {
            #[doc = #doc]
            #vis fn #fn_name() -> ::keypath::KeyPath<Self, #field_ty> {
                ::keypath::KeyPath::new(|root: &Self| ::core::clone::Clone::clone(&root.#field_name))
            }
        });
    }

    let expanded = quote! {
        impl #struct_name {
            #(#constructors)*
        }
    };

    Ok(expanded)
}
