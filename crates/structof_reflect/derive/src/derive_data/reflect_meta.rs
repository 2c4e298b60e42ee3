use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Token, Type, TypeGenerics, punctuated::Punctuated};

use super::{TypeAttributes, TypeParser};
use crate::utils::StrTokens;

/// Type-level data shared by every generated implementation.
pub(crate) struct ReflectMeta<'a> {
    reflect_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // Kept in declaration order so the generated `where` clause is stable.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("reflect_path", &self.reflect_path.to_token_stream())
            .field("type_parser", &self.type_parser)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            reflect_path: crate::path::structof_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Set the field types during initialization; duplicates are dropped.
    pub(super) fn set_active_types(&mut self, types: impl IntoIterator<Item = Type>) {
        for ty in types {
            if !self.active_types.contains(&ty) {
                self.active_types.push(ty);
            }
        }
    }

    #[inline]
    pub fn reflect_path(&self) -> &Path {
        &self.reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> StrTokens {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StrTokens {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StrTokens {
        self.type_parser.type_name(&self.reflect_path)
    }

    #[inline]
    pub fn type_path(&self) -> StrTokens {
        self.type_parser.type_path(&self.reflect_path)
    }

    #[inline]
    pub fn type_name_into_owned(&self) -> TokenStream {
        self.type_name().owned(&self.reflect_path)
    }

    #[inline]
    pub fn type_path_into_owned(&self) -> TokenStream {
        self.type_path().owned(&self.reflect_path)
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// ## Constraints
    ///
    /// - Type itself: `'static` if it has lifetimes, `Any + Send + Sync` if it
    ///   has type params.
    /// - Type params: `TypePath`, always.
    /// - Field types mentioning a type param: `Reflect + Typed`, for every
    ///   trait except `TypePath` (`add_reflect_typed`).
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.generics();

        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let mut predicates: Punctuated<TokenStream, Token![,]> = Punctuated::new();

        predicates.extend(self.type_path_predicates());

        if add_reflect_typed {
            predicates.extend(self.field_type_predicates());
        }

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn type_path_predicates(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let type_path_ = crate::path::type_path_(&self.reflect_path);
        self.generics().type_params().map(move |param| {
            let ident = &param.ident;
            quote!(#ident : #type_path_)
        })
    }

    fn field_type_predicates(&self) -> Vec<TokenStream> {
        let type_param_idents = self
            .generics()
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<syn::Ident>>();

        if type_param_idents.is_empty() {
            return Vec::new();
        }

        let reflect_ = crate::path::reflect_(&self.reflect_path);
        let typed_ = crate::path::typed_(&self.reflect_path);

        // Do any of the identifiers in `idents` appear in `token_stream`?
        fn is_any_ident_in_token_stream(idents: &[syn::Ident], token_stream: TokenStream) -> bool {
            for token_tree in token_stream {
                match token_tree {
                    proc_macro2::TokenTree::Ident(ident) => {
                        if idents.contains(&ident) {
                            return true;
                        }
                    }
                    proc_macro2::TokenTree::Group(group) => {
                        if is_any_ident_in_token_stream(idents, group.stream()) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
            false
        }

        self.active_types
            .iter()
            .filter(|ty| is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream()))
            .map(|ty| quote! { #ty: #reflect_ + #typed_ })
            .collect()
    }
}
