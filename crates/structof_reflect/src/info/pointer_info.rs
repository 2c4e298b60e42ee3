use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Pointer;

/// A container for compile-time pointer-like info.
///
/// A pointer is transparent during conversion: it either points at a value
/// of the pointee type or, if [`nullable`](PointerInfo::is_nullable), at
/// nothing.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use structof_reflect::info::Typed;
///
/// let info = <Option<u8> as Typed>::type_info().as_pointer().unwrap();
/// assert!(info.is_nullable());
///
/// let info = <Arc<u8> as Typed>::type_info().as_pointer().unwrap();
/// assert!(!info.is_nullable());
/// assert!(info.pointee_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Creates a new [`PointerInfo`].
    #[inline]
    pub const fn new<TPtr: Pointer + TypePath, TPointee: Reflect + Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPtr>(),
            pointee_id: TypeId::of::<TPointee>(),
            pointee_info: TPointee::type_info,
            nullable,
        }
    }

    /// Returns `true` if the pointer can be null.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the [`TypeId`] of the pointee.
    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    /// Returns `true` if the pointee type is `T`.
    #[inline]
    pub fn pointee_is<T: Any>(&self) -> bool {
        self.pointee_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }
}
