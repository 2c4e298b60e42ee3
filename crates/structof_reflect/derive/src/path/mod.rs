//! This independent module is used to provide the required paths,
//! so that changes to the `structof_reflect` layout stay local.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) use structof_macro_utils::full_path as fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `structof_reflect` crate.
///
/// 1. For crates that depend on `structof_reflect`, `::structof_reflect` is returned.
/// 2. For crates that depend on `structof`, `::structof::reflect` is returned.
/// 3. For other situations, `::structof_reflect` is returned, but this may be incorrect.
///
/// Reading the manifest is not cheap, so the path is obtained once per
/// derive and passed around.
pub(crate) fn structof_reflect() -> syn::Path {
    structof_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("structof_reflect"))
}

macro_rules! define_path_fn {
    ($($name:ident => $($path:ident)::+;)*) => {$(
        #[inline(always)]
        pub(crate) fn $name(reflect_path: &syn::Path) -> TokenStream {
            quote! { #reflect_path::$($path)::+ }
        }
    )*};
}

define_path_fn! {
    macro_utils_ => __macro_exports::macro_utils;
    reflect_ => Reflect;
    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    named_field_ => info::NamedField;
    reflect_kind_ => info::ReflectKind;
    struct_ => ops::Struct;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    generic_type_path_cell_ => impls::GenericTypePathCell;
    struct_debug_ => impls::struct_debug;
}
