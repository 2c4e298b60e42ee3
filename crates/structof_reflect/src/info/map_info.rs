use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// A container for compile-time map-like info.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use structof_reflect::info::{ScalarKind, Typed};
///
/// let info = <HashMap<String, f64> as Typed>::type_info().as_map().unwrap();
///
/// assert_eq!(info.key_info().scalar_kind(), Some(ScalarKind::Str));
/// assert!(info.value_is::<f64>());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_id: TypeId,
    key_info: fn() -> &'static TypeInfo,
    value_id: TypeId,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap: Map + TypePath, TKey: Reflect + Typed, TValue: Reflect + Typed>()
    -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_id: TypeId::of::<TKey>(),
            key_info: TKey::type_info,
            value_id: TypeId::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`TypeId`] of keys.
    #[inline]
    pub const fn key_id(&self) -> TypeId {
        self.key_id
    }

    /// Returns `true` if the key type is `T`.
    #[inline]
    pub fn key_is<T: Any>(&self) -> bool {
        self.key_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeId`] of values.
    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    /// Returns `true` if the value type is `T`.
    #[inline]
    pub fn value_is<T: Any>(&self) -> bool {
        self.value_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
