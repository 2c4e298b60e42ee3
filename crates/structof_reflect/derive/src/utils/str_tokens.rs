use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::LitStr;

/// Tokens that evaluate to a string, tagged by how the string is held.
pub(crate) enum StrTokens {
    /// Accepted by `concat!`: a literal or `module_path!()`.
    Const(TokenStream),
    /// A `&'static str` expression.
    Static(TokenStream),
    /// A `String` expression.
    Owned(TokenStream),
}

impl StrTokens {
    pub fn lit(text: &str, span: Span) -> Self {
        Self::Const(LitStr::new(text, span).into_token_stream())
    }

    /// Tokens for a `&'static str`. Owned strings are borrowed, which only
    /// works where the temporary outlives its use.
    pub fn borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Static(tokens) => tokens,
            Self::Owned(tokens) => quote!(&#tokens as &str),
        }
    }

    /// Tokens for a `String`.
    pub fn owned(self, reflect_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Static(tokens) => {
                let macro_utils_ = crate::path::macro_utils_(reflect_path);
                quote!(#macro_utils_::ToOwned::to_owned(#tokens))
            }
            Self::Owned(tokens) => tokens,
        }
    }

    /// Joins `parts` in order, at compile time when every part is `Const`.
    pub fn concat(parts: Vec<StrTokens>, reflect_path: &syn::Path) -> Self {
        if parts.iter().all(|part| matches!(part, Self::Const(_))) {
            let parts = parts.into_iter().map(Self::borrowed);
            return Self::Const(quote!(::core::concat!(#(#parts),*)));
        }

        let macro_utils_ = crate::path::macro_utils_(reflect_path);
        let parts = parts.into_iter().map(Self::borrowed);
        Self::Owned(quote!(#macro_utils_::__concat(&[#(#parts),*])))
    }
}
