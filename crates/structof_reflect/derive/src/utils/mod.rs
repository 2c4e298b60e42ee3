//! Provide some tools for generating code.

mod str_tokens;

pub(crate) use str_tokens::StrTokens;

/// An empty token stream.
#[inline(always)]
pub(crate) fn empty() -> proc_macro2::TokenStream {
    proc_macro2::TokenStream::new()
}
