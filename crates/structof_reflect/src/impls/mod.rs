//! Provide reflection for standard types, and utilities for implementing
//! reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`list_debug`]).
//!
//! ## Implemented Menu
//!
//! - scalar:
//!     - `bool`, `char`
//!     - `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//!     - `String`, `&'static str`
//! - list and array:
//!     - `Vec<T>`, `VecDeque<T>`, `[T; N]`
//! - map:
//!     - `BTreeMap<K, V>`, `std::collections::HashMap<K, V>`
//! - pointer:
//!     - `Option<T>`, `Box<T>`, `Arc<T>`, `OnceLock<T>`
//! - dynamic:
//!     - `Box<dyn Reflect>`
//! - opaque:
//!     - `fn() -> R`, `fn(A) -> R`, `fn(A, B) -> R`
//!     - `mpsc::Sender<T>`, `mpsc::SyncSender<T>`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod alloc;
mod core;
mod native;
mod std;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::*;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use structof_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
