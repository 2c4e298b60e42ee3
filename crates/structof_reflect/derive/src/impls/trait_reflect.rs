use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::{FieldAccessors, ReflectStruct};
use crate::path::fp::{OptionFP, ResultFP};

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let reflect_path = meta.reflect_path();

    let reflect_ = crate::path::reflect_(reflect_path);
    let macro_utils_ = crate::path::macro_utils_(reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(reflect_path);
    let struct_debug_ = crate::path::struct_debug_(reflect_path);

    let FieldAccessors { fields_mut, .. } = FieldAccessors::new(info);

    let is_empty_tokens = meta.attrs().is_empty.as_ref().map(|func| {
        quote! {
            #[inline]
            fn reflect_is_empty(&self) -> #OptionFP<bool> {
                #OptionFP::Some(#func(self))
            }
        }
    });

    let display_tokens = meta.attrs().display.map(|span| {
        quote_spanned! { span =>
            #[inline]
            fn reflect_display(&self) -> #OptionFP<#macro_utils_::String> {
                #OptionFP::Some(#macro_utils_::ToString::to_string(self))
            }
        }
    });

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            fn set_zero(&mut self) -> bool {
                // `&` rather than `&&`: every field is reset.
                true #(& #reflect_::set_zero(#fields_mut))*
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            #is_empty_tokens

            #display_tokens

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #struct_debug_(self, f)
            }
        }
    }
}
