//! Runtime type descriptions for `structof`.
//!
//! Rust has no runtime reflection, so every type the conversion engine can
//! walk describes itself through two layers:
//!
//! - Static information, [`TypeInfo`](info::TypeInfo), obtained through
//!   [`Typed`](info::Typed). For records this includes every declared field,
//!   its visibility, whether it is embedded, and its annotation string.
//! - Dynamic access, the object-safe [`Reflect`] trait and the per-kind
//!   traits in [`ops`] ([`Struct`](ops::Struct), [`Map`](ops::Map), ...).
//!
//! `#[derive(Reflect)]` produces both for named-field structs:
//!
//! ```
//! use structof_reflect::{Reflect, info::Typed};
//!
//! #[derive(Reflect)]
//! pub struct Account {
//!     #[structof("id,string")]
//!     pub id: u64,
//!     pub owner: String,
//!     secret: String,
//! }
//!
//! let info = Account::type_info().as_struct().unwrap();
//! assert_eq!(info.field_len(), 3);
//! assert_eq!(info.field("id").unwrap().annotation(), Some("id,string"));
//! assert!(!info.field("secret").unwrap().is_exported());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Library code uses `crate`, doctests use `structof_reflect`; derive output
// always names the latter, so the crate must also answer to it.
extern crate self as structof_reflect;

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use reflection::Reflect;
pub use structof_reflect_derive as derive;
pub use structof_reflect_derive::Reflect;
