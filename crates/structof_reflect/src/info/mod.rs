//! Provide compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable type names. [`DynamicTypePath`] is its object-safe form.
//! - [`Type`]: a `TypeId` with its [`TypePathTable`].
//! - [`TypeInfo`]: one variant per [`ReflectKind`]:
//!     - [`StructInfo`]: declared fields as [`NamedField`]s.
//!     - [`ListInfo`], [`ArrayInfo`]: item type info.
//!     - [`MapInfo`]: key and value type info.
//!     - [`PointerInfo`]: pointee type info and nullability.
//!     - [`ScalarInfo`]: the [`ScalarKind`].
//!     - [`DynamicInfo`], [`OpaqueInfo`]: no further content.
//! - [`Typed`]: static access to `TypeInfo`. [`DynamicTyped`] is its object-safe form.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::{DynamicInfo, OpaqueInfo};
pub use pointer_info::PointerInfo;
pub use scalar_info::ScalarInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, ScalarKind, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
