//! Absolute paths of prelude items, for use inside generated code.
//!
//! Generated code must not depend on what the caller has in scope, so
//! `Option`, `Result`, `Some` and friends are always spelled out in full.
//!
//! ```
//! use quote::quote;
//! use structof_macro_utils::full_path::OptionFP;
//!
//! let tokens = quote! { #OptionFP::<u8>::None };
//! assert!(tokens.to_string().starts_with(":: core :: option :: Option"));
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => $path:path;)*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($path));
            }
        }
    )*};
}

define_full_path! {
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
    /// `::core::any::Any`
    AnyFP => ::core::any::Any;
    /// `::core::marker::Send`
    SendFP => ::core::marker::Send;
    /// `::core::marker::Sync`
    SyncFP => ::core::marker::Sync;
    /// `::core::default::Default`
    DefaultFP => ::core::default::Default;
    /// `::core::convert::Into`
    IntoFP => ::core::convert::Into;
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::{OptionFP, ResultFP, SendFP};

    #[test]
    fn paths_are_absolute() {
        assert_eq!(
            quote!(#OptionFP::Some(1)).to_string(),
            quote!(::core::option::Option::Some(1)).to_string(),
        );
        assert_eq!(
            quote!(#ResultFP<u8, ()>).to_string(),
            quote!(::core::result::Result<u8, ()>).to_string(),
        );
        assert_eq!(quote!(#SendFP).to_string(), quote!(::core::marker::Send).to_string());
    }
}
