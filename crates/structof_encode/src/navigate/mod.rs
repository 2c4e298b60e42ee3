//! Handles for reading and writing the fields of a record.
//!
//! [`Struct`] binds one record instance. Its fields are reached either all at
//! once, as seen by the encoder ([`Struct::fields`]), or by a dot-separated
//! path of declared names ([`Struct::field`], [`Struct::field_mut`]).
//! Writes through a [`FieldMut`] go straight into the record.
//!
//! ```
//! use structof_encode::navigate::Struct;
//! use structof_reflect::Reflect;
//!
//! #[derive(Reflect)]
//! pub struct Inner {
//!     pub count: u32,
//! }
//!
//! #[derive(Reflect)]
//! pub struct Outer {
//!     pub inner: Option<Box<Inner>>,
//! }
//!
//! let mut outer = Outer { inner: Some(Box::new(Inner { count: 1 })) };
//! let mut record = Struct::new(&mut outer);
//!
//! // Scalars convert within their kind.
//! record.field_mut("inner.count").unwrap().set(Box::new(23_u8));
//! assert_eq!(record.field("inner.count").unwrap().value().downcast_ref::<u32>(), Some(&23));
//!
//! assert!(record.field("inner.missing").is_err());
//! assert!(record.field("inner.count.deeper").is_err());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod field;
mod lookup;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use field::{Field, FieldMut};
pub use record::Struct;
