use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// OpaqueInfo

/// A container for compile-time info of types that cannot be converted,
/// such as function pointers and channels.
///
/// ```rust
/// use structof_reflect::info::{ReflectKind, Typed};
///
/// let info = <fn(u8) -> u8 as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Opaque);
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

// -----------------------------------------------------------------------------
// DynamicInfo

/// A container for compile-time info of types whose content is only known
/// at runtime, such as `Box<dyn Reflect>`.
#[derive(Clone, Debug)]
pub struct DynamicInfo {
    ty: Type,
}

impl DynamicInfo {
    impl_type_fn!(ty);

    /// Creates a new [`DynamicInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
