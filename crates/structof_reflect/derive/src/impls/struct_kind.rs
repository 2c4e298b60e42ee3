use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{FieldAccessors, ReflectStruct};
use crate::path::fp::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let struct_trait_tokens = impl_trait_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let reflect_path = meta.reflect_path();
    let struct_ = crate::path::struct_(reflect_path);
    let reflect_ = crate::path::reflect_(reflect_path);

    let FieldAccessors {
        fields_ref,
        fields_mut,
        field_names,
        field_indices,
        field_count,
    } = FieldAccessors::new(info);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    // Repetitions bind every interpolated ident, which would shadow the unit struct.
    let option_fp = OptionFP;

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_fp<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_fp::Some(#fields_ref),)*
                    _ => #option_fp::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_fp<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_fp::Some(#fields_mut),)*
                    _ => #option_fp::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_fp<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_fp::Some(#fields_ref),)*
                    _ => #option_fp::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_fp<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_fp::Some(#fields_mut),)*
                    _ => #option_fp::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_fp<&str> {
                match index {
                    #(#field_indices => #option_fp::Some(#field_names),)*
                    _ => #option_fp::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}
