use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataStruct, DeriveInput, Fields, Visibility, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, TypeAttributes, TypeParser};

/// A declared field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub data: &'a syn::Field,
    pub attrs: FieldAttributes,
    pub index: usize,
    /// Declared `pub`. Restricted visibility (`pub(crate)`, ..) does not count.
    pub exported: bool,
}

/// Parsed input of `#[derive(Reflect)]`.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let type_attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let fields = match &ast.data {
            Data::Struct(DataStruct {
                fields: Fields::Named(named),
                ..
            }) => named.named.iter().collect::<Vec<_>>(),
            Data::Struct(DataStruct {
                fields: Fields::Unit,
                ..
            }) => Vec::new(),
            Data::Struct(DataStruct {
                fields: Fields::Unnamed(unnamed),
                ..
            }) => {
                return Err(syn::Error::new(
                    unnamed.span(),
                    "`Reflect` can only be derived for structs with named fields",
                ));
            }
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` can not be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` can not be derived for unions",
                ));
            }
        };

        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(index, data)| {
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                    index,
                    exported: matches!(data.vis, Visibility::Public(_)),
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let custom_path = type_attrs.custom_path.clone();
        let type_parser = TypeParser::new_local(&ast.ident, custom_path, &ast.generics);
        let mut meta = ReflectMeta::new(type_attrs, type_parser);
        meta.set_active_types(fields.iter().map(|field| field.data.ty.clone()));

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// The `TypeInfo` construction expression.
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(_path_::StructInfo::new::<Self>(&[
    ///     _path_::NamedField::new::<u64>("id")
    ///         .with_exported(true)
    ///         .with_embedded(false)
    ///         .with_annotation("id,string"),
    /// ]))
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let reflect_path = self.meta.reflect_path();
        let type_info_ = crate::path::type_info_(reflect_path);
        let struct_info_ = crate::path::struct_info_(reflect_path);
        let named_field_ = crate::path::named_field_(reflect_path);

        let fields = self.fields.iter().filter_map(|field| {
            let ident = field.data.ident.as_ref()?;
            let name = ident.unraw().to_string();
            let ty = &field.data.ty;
            let exported = field.exported;
            let embedded = field.attrs.embed.is_some();
            let with_annotation = field
                .attrs
                .annotation
                .as_ref()
                .map(|lit| quote! { .with_annotation(#lit) });

            Some(quote! {
                #named_field_::new::<#ty>(#name)
                    .with_exported(#exported)
                    .with_embedded(#embedded)
                    #with_annotation
            })
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[
                #(#fields),*
            ]))
        }
    }
}

/// Per-field access expressions, in declaration order.
pub(crate) struct FieldAccessors {
    /// `&self.#ident` as `&dyn Reflect`.
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.#ident` as `&mut dyn Reflect`.
    pub fields_mut: Vec<TokenStream>,
    /// Field names as string literals.
    pub field_names: Vec<String>,
    /// Declaration indices.
    pub field_indices: Vec<usize>,
    /// The number of fields.
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let reflect_ = crate::path::reflect_(info.meta().reflect_path());

        let mut res = Self {
            fields_ref: Vec::with_capacity(info.fields().len()),
            fields_mut: Vec::with_capacity(info.fields().len()),
            field_names: Vec::with_capacity(info.fields().len()),
            field_indices: Vec::with_capacity(info.fields().len()),
            field_count: info.fields().len(),
        };

        for field in info.fields() {
            let Some(ident) = field.data.ident.as_ref() else {
                continue;
            };
            res.fields_ref
                .push(quote! { #reflect_::as_reflect(&self.#ident) });
            res.fields_mut
                .push(quote! { #reflect_::as_reflect_mut(&mut self.#ident) });
            res.field_names.push(ident.unraw().to_string());
            res.field_indices.push(field.index);
        }

        res
    }
}
