use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type-level `#[reflect(..)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "a::b::Foo")]`
    pub custom_path: Option<Path>,
    /// `#[reflect(display)]`
    pub display: Option<Span>,
    /// `#[reflect(is_empty = path::to::func)]`
    pub is_empty: Option<Path>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if res.custom_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    let path: Path = lit.parse()?;
                    if path.leading_colon.is_some() {
                        return Err(syn::Error::new(
                            lit.span(),
                            "did not expect a leading double colon (`::`)",
                        ));
                    }
                    res.custom_path = Some(path);
                    Ok(())
                } else if meta.path.is_ident("display") {
                    if res.display.is_some() {
                        return Err(meta.error("duplicate `display` flag"));
                    }
                    res.display = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("is_empty") {
                    if res.is_empty.is_some() {
                        return Err(meta.error("duplicate `is_empty` attribute"));
                    }
                    res.is_empty = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("embed") {
                    Err(meta.error("`embed` can only be applied to fields"))
                } else {
                    Err(meta.error("unsupported reflect attribute"))
                }
            })?;
        }

        Ok(res)
    }
}
