//! Provide data access interfaces for reflected values.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], one per [`ReflectKind`]:
//!
//! - [`Struct`]: For records with named fields (e.g. `A { .. }`).
//! - [`List`]: For growable sequences (e.g. `Vec<i32>`).
//! - [`Array`]: For fixed-size sequences (e.g. `[i32; 5]`).
//! - [`Map`]: For maps (e.g. `HashMap<String, f32>`).
//! - [`Pointer`]: For indirections, nullable or not (e.g. `Option<T>`, `Box<T>`).
//! - [`Dynamic`]: For values whose concrete type is only known at runtime.
//! - [`Scalar`]: For leaves (e.g. `bool`, `u8`, `String`).
//!
//! [`ReflectRef`] and [`ReflectMut`] dispatch a `dyn Reflect` to one of them.
//!
//! [`Reflect`]: crate::Reflect
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod dynamic_ops;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use array_ops::{Array, ArrayItemIter};
pub use dynamic_ops::Dynamic;
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapEntryIter};
pub use pointer_ops::Pointer;
pub use scalar_ops::{Scalar, ScalarError, ScalarRef};
pub use struct_ops::{Struct, StructFieldIter};
