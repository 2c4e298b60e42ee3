//! Resolve the visible fields of a record type.
//!
//! A record's output is decided once per type and cached:
//!
//! - [`type_fields`]: computes the [`StructFields`] of a record type.
//! - [`cached_type_fields`]: the same, through a process-wide cache.
//! - [`FieldDescriptor`]: one visible field with its output name, location
//!   and [`FieldOptions`].
//!
//! Embedded fields (`#[reflect(embed)]`) promote their own fields into the
//! enclosing record. When several fields claim the same name, the shallowest
//! wins, an annotated field wins a tie at equal depth, and a tie between
//! equally annotated fields drops the name entirely.
//!
//! ```
//! use structof_encode::fields::cached_type_fields;
//! use structof_reflect::{Reflect, info::Typed};
//!
//! #[derive(Reflect)]
//! pub struct A {
//!     pub x: u8,
//!     pub y: u8,
//! }
//!
//! #[derive(Reflect)]
//! pub struct B {
//!     pub x: u8,
//!     pub z: u8,
//! }
//!
//! #[derive(Reflect)]
//! pub struct C {
//!     #[reflect(embed)]
//!     pub a: A,
//!     #[reflect(embed)]
//!     pub b: B,
//! }
//!
//! // `x` is ambiguous at depth one and dropped.
//! let fields = cached_type_fields(C::type_info());
//! assert_eq!(fields.names().collect::<Vec<_>>(), ["y", "z"]);
//! assert_eq!(fields.get(0).unwrap().path(), &[0, 1]);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod descriptor;
mod path;
mod resolver;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use path::{deref_pointers, deref_pointers_mut, field_by_path};

// -----------------------------------------------------------------------------
// Exports

pub use cache::cached_type_fields;
pub use descriptor::{FieldDescriptor, FieldOptions, StructFields};
pub use resolver::type_fields;
