//! Derive macro for `structof_reflect`.
//!
//! See [`Reflect`](macro@Reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static ANNOTATION_ATTRIBUTE_NAME: &str = "structof";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed`, `Reflect` and
/// `Struct` for a struct with named fields (or a unit struct, which is
/// treated as a struct without fields). Enums, tuple structs and unions
/// are rejected.
///
/// Every field type must implement `Reflect` and `Typed`.
///
/// ## Field Attributes
///
/// ### Annotation
///
/// The conversion annotation of a field is written with the `structof`
/// attribute. The string is stored verbatim in the field's `NamedField`:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// pub struct User {
///     #[structof("user_id,omitempty")]
///     pub id: u64,
///     #[structof("-")]
///     pub password: String,
/// }
/// ```
///
/// ### Embedding
///
/// `#[reflect(embed)]` marks a field as embedded: its own fields are
/// promoted into the outer struct during conversion.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// pub struct Admin {
///     #[reflect(embed)]
///     pub user: User,
///     pub level: u8,
/// }
/// ```
///
/// ### Visibility
///
/// Only fields declared `pub` are visible to conversion. Other fields are
/// still described (and reachable through `Struct`), but marked as not
/// exported.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::model::User")]
/// pub struct User { /* ... */ }
/// ```
///
/// The path does not include generics; they are appended automatically.
///
/// ### Display
///
/// `#[reflect(display)]` forwards `Reflect::reflect_display` to the type's
/// `Display` implementation. A struct without visible fields is then
/// converted to its text instead of an empty map.
///
/// ### Custom Emptiness
///
/// `#[reflect(is_empty = path::to::func)]` uses `fn(&Self) -> bool` as the
/// emptiness test consulted by `omitempty`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(display, is_empty = Version::is_unset)]
/// pub struct Version { major: u16, minor: u16 }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect, structof))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_input(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
