//! Attribute parsing for the KeyPaths derive macro.
//!
//! This module provides the parser for the `#[key(...)]` field attributes
//! used by the `KeyPaths` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[key(...)]`.
#[derive(Debug, Clone)]
pub struct KeyAttr {
    /// Do not generate a key path for this field.
    pub skip: bool,
    /// Custom name for the generated constructor (default: field name).
    pub rename: Option<Ident>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for KeyAttr {
    fn default() -> Self {
        KeyAttr {
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for KeyAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = KeyAttr {
            span: input.span(),
            ..KeyAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                }

                // rename = "custom_name"
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    };
                    let ident = s.parse::<Ident>().map_err(|_| {
                        Error::new(
                            s.span(),
                            format!("rename must be a valid identifier, got '{}'", s.value()),
                        )
                    })?;
                    attr.rename = Some(ident);
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown key attribute. Expected: skip or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.skip && attr.rename.is_some() {
            return Err(Error::new(attr.span, "a skipped field cannot be renamed"));
        }

        Ok(attr)
    }
}

/// Extract and merge every `#[key(...)]` attribute on a field.
pub fn parse_key_attrs(attrs: &[Attribute]) -> Result<KeyAttr> {
    let mut merged = KeyAttr::default();

    for attr in attrs {
        if !attr.path().is_ident("key") {
            continue;
        }
        let parsed = attr.parse_args::<KeyAttr>()?;

        if parsed.skip {
            merged.skip = true;
        }
        if let Some(rename) = parsed.rename {
            if merged.rename.is_some() {
                return Err(Error::new(attr.span(), "duplicate key rename"));
            }
            merged.rename = Some(rename);
        }
        if merged.skip && merged.rename.is_some() {
            return Err(Error::new(attr.span(), "a skipped field cannot be renamed"));
        }
        merged.span = attr.span();
    }

    Ok(merged)
}
