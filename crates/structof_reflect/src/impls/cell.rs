//! Containers for static storage of type information.
//!
//! ## NonGenericTypeCell
//!
//! For non generic types, [`NonGenericTypeInfoCell`] stores the [`TypeInfo`]
//! in a [`OnceLock`]. Type paths of non generic types are string literals
//! and need no cell.
//!
//! ## GenericTypeCell
//!
//! A `static` inside a generic function is shared by every instantiation,
//! so generic types store their data in a [`TypeIdMap`] behind a [`RwLock`]:
//!
//! - [`GenericTypeInfoCell`]: stores [`TypeInfo`].
//! - [`GenericTypePathCell`]: stores a [`String`].

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use structof_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Static storage for a non generic type's [`TypeInfo`].
///
/// # Examples
///
/// ```
/// use structof_reflect::impls::NonGenericTypeInfoCell;
/// use structof_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Handle;
///
/// impl TypePath for Handle {
///     fn type_path() -> &'static str { "demo::Handle" }
///     fn type_name() -> &'static str { "Handle" }
///     fn type_ident() -> &'static str { "Handle" }
/// }
///
/// impl Typed for Handle {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Handle::type_info().type_is::<Handle>());
/// ```
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// See [`NonGenericTypeCell`].
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first call.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// Static storage for data of generic types, keyed by [`TypeId`].
///
/// # Examples
///
/// ```
/// use structof_reflect::impls::{GenericTypePathCell, concat};
/// use structof_reflect::info::TypePath;
/// use core::marker::PhantomData;
///
/// struct Tagged<T>(PhantomData<T>);
///
/// impl<T: TypePath> TypePath for Tagged<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["demo::Tagged<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Tagged<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Tagged" }
/// }
///
/// assert_eq!(<Tagged<u8>>::type_path(), "demo::Tagged<u8>");
/// assert_eq!(<Tagged<String>>::type_name(), "Tagged<String>");
/// ```
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// See [`GenericTypeCell`].
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// See [`GenericTypeCell`].
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, initializing it with `f` on first call.
    ///
    /// `f` runs without holding the lock, so it may query other cells.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
