use proc_macro2::Span;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, Path, TypeParam, spanned::Spanned};

use crate::utils::StrTokens;

/// A container used to parse type paths and generic parameters.
///
/// The derived type must be reachable with just its ident, so the module
/// path comes from [`module_path!()`](module_path) unless a custom path is
/// given through `#[reflect(type_path = "..")]`.
pub(crate) struct TypeParser<'a> {
    ident: &'a Ident,
    custom_path: Option<Path>,
    generics: &'a Generics,
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.real_ident(), f)
    }
}

impl<'a> TypeParser<'a> {
    pub(crate) fn new_local(
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> TypeParser<'a> {
        TypeParser {
            ident,
            custom_path,
            generics,
        }
    }

    #[inline]
    pub(super) fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// Whether an implementation of `Typed` or `TypePath` should be generic.
    pub(super) fn impl_with_generic(&self) -> bool {
        // exist non-lifetime generic parameters
        !self
            .generics
            .params
            .iter()
            .all(|param| matches!(param, GenericParam::Lifetime(_)))
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    pub(super) fn real_ident(&self) -> proc_macro2::TokenStream {
        self.ident.to_token_stream()
    }

    /// Get (custom) ident
    fn get_ident(&self) -> &Ident {
        self.custom_path
            .as_ref()
            .and_then(|path| path.segments.last())
            .map_or(self.ident, |segment| &segment.ident)
    }

    pub(super) fn module_path(&self) -> StrTokens {
        if let Some(path) = &self.custom_path
            && path.segments.len() > 1
        {
            let path_string = path
                .segments
                .iter()
                .take(path.segments.len() - 1)
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::");

            return StrTokens::lit(&path_string, path.span());
        }

        StrTokens::Const(quote! {
            ::core::module_path!()
        })
    }

    pub(super) fn type_ident(&self) -> StrTokens {
        let ident = self.get_ident();
        StrTokens::lit(&ident.to_string(), ident.span())
    }

    /// Joins type and const generics with `", "`, mapping type parameters
    /// through `ty_generic_fn`.
    fn reduce_generics(
        generics: &Generics,
        mut ty_generic_fn: impl FnMut(&TypeParam) -> StrTokens,
        reflect_path: &Path,
    ) -> StrTokens {
        let macro_utils_path = crate::path::macro_utils_(reflect_path);

        let mut params = generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_generic_fn(type_param)),
            GenericParam::Const(const_param) => {
                let ident = &const_param.ident;
                let ty = &const_param.ty;

                Some(StrTokens::Owned(quote! {
                    <#ty as #macro_utils_path::ToString>::to_string(&#ident)
                }))
            }
            GenericParam::Lifetime(_) => None,
        });

        let mut parts: Vec<StrTokens> = params.next().into_iter().collect();
        for param in params {
            parts.push(StrTokens::lit(", ", Span::call_site()));
            parts.push(param);
        }
        StrTokens::concat(parts, reflect_path)
    }

    /// Tokens for the "type name" of the type.
    ///
    /// For `Wrapper<u8>`, this is `"Wrapper<u8>"`.
    pub(super) fn type_name(&self, reflect_path: &Path) -> StrTokens {
        let type_ident = self.type_ident();

        if !self.impl_with_generic() {
            return type_ident;
        }

        let type_path_ = crate::path::type_path_(reflect_path);
        let generics = TypeParser::reduce_generics(
            self.generics,
            |TypeParam { ident, .. }| {
                StrTokens::Static(quote! {
                    <#ident as #type_path_>::type_name()
                })
            },
            reflect_path,
        );

        StrTokens::concat(
            vec![
                type_ident,
                StrTokens::lit("<", Span::call_site()),
                generics,
                StrTokens::lit(">", Span::call_site()),
            ],
            reflect_path,
        )
    }

    /// Tokens for the "type path" of the type.
    ///
    /// For `Wrapper<u8>` in `app::model`, this is `"app::model::Wrapper<u8>"`.
    pub(super) fn type_path(&self, reflect_path: &Path) -> StrTokens {
        let type_ident = self.type_ident();
        let module_path = self.module_path();

        if !self.impl_with_generic() {
            return StrTokens::concat(
                vec![module_path, StrTokens::lit("::", Span::call_site()), type_ident],
                reflect_path,
            );
        }

        let type_path_ = crate::path::type_path_(reflect_path);
        let generics = TypeParser::reduce_generics(
            self.generics,
            |TypeParam { ident, .. }| {
                StrTokens::Static(quote! {
                    <#ident as #type_path_>::type_path()
                })
            },
            reflect_path,
        );

        StrTokens::concat(
            vec![
                module_path,
                StrTokens::lit("::", Span::call_site()),
                type_ident,
                StrTokens::lit("<", Span::call_site()),
                generics,
                StrTokens::lit(">", Span::call_site()),
            ],
            reflect_path,
        )
    }
}
