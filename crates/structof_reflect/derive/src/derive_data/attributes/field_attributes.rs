use proc_macro2::Span;
use syn::{Attribute, LitStr, spanned::Spanned};

use crate::{ANNOTATION_ATTRIBUTE_NAME, REFLECT_ATTRIBUTE_NAME};

/// Field-level attributes: `#[reflect(embed)]` and `#[structof("..")]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub embed: Option<Span>,
    pub annotation: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if attr.path().is_ident(ANNOTATION_ATTRIBUTE_NAME) {
                if res.annotation.is_some() {
                    return Err(syn::Error::new(attr.span(), "duplicate annotation"));
                }
                res.annotation = Some(attr.parse_args::<LitStr>()?);
            } else if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("embed") {
                        if res.embed.is_some() {
                            return Err(meta.error("duplicate `embed` flag"));
                        }
                        res.embed = Some(meta.path.span());
                        Ok(())
                    } else {
                        Err(meta.error("unsupported field attribute, expected `embed`"))
                    }
                })?;
            }
        }

        Ok(res)
    }
}
