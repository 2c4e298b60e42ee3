//! Conversion of reflected records into generic keyed containers.
//!
//! Any type deriving [`Reflect`](structof_reflect::Reflect) can be turned into
//! a [`Map`] (keyed mode) or a flat `Vec<Value>` of alternating keys and
//! values (pairs mode). What a record contributes is decided by its declared
//! shape and the `#[structof("...")]` annotation of each field:
//!
//! ```
//! use structof_encode::{Value, make_map, make_slice};
//! use structof_reflect::Reflect;
//!
//! #[derive(Reflect)]
//! pub struct Base {
//!     pub id: u32,
//! }
//!
//! #[derive(Reflect)]
//! pub struct User {
//!     #[reflect(embed)]
//!     pub base: Base,
//!     #[structof("name")]
//!     pub user_name: String,
//!     #[structof(",omitempty")]
//!     pub email: String,
//!     #[structof("-")]
//!     pub password: String,
//!     secret: u8,
//! }
//!
//! let user = User {
//!     base: Base { id: 7 },
//!     user_name: "ferris".into(),
//!     email: String::new(),
//!     password: "hunter2".into(),
//!     secret: 0,
//! };
//!
//! let map = make_map(&user).unwrap();
//! assert_eq!(map.len(), 2);
//! assert_eq!(map["id"], Value::Uint(7));
//! assert_eq!(map["name"], Value::from("ferris"));
//!
//! let pairs = make_slice(&user).unwrap();
//! assert_eq!(pairs, vec!["id".into(), 7_u32.into(), "name".into(), "ferris".into()]);
//! ```
//!
//! ## Menu
//!
//! - [`Annotation`]: the parsed form of one annotation string.
//! - [`fields`]: the resolved, visibility-checked field list of a record type.
//! - [`encoder`]: the per-type conversion functions and their cache.
//! - [`Value`], [`Map`]: the generic output.
//! - [`navigate`]: handles for reading and writing record fields by path.
//! - [`fill_map`], [`make_map`], [`make_slice`] and the small helpers
//!   [`is_struct`], [`is_zero`], [`type_name`], [`field_names`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod annotation;
mod api;
mod empty;
mod error;
mod state;
mod text;
mod value;

pub mod encoder;
pub mod fields;
pub mod navigate;

// -----------------------------------------------------------------------------
// Top-level exports

pub use annotation::{ANNOTATION_ATTRIBUTE, Annotation};
pub use api::{field_names, fill_map, is_struct, is_zero, make_map, make_slice, type_name};
pub use empty::{is_empty_value, is_zero_value};
pub use error::{EncodeError, LookupError, SetError};
pub use state::START_DETECTING_CYCLES_AFTER;
pub use value::{Map, Value};
