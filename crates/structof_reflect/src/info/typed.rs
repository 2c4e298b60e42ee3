use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a type's [`TypeInfo`].
///
/// Implementations store the info in a `static` cell so the returned
/// reference is built once per type. Use
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell) for plain
/// types and [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell) for
/// generic ones.
///
/// # Examples
///
/// ```
/// use structof_reflect::info::{ReflectKind, Typed};
///
/// let info = <Option<Box<u32>>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Pointer);
///
/// let pointee = info.as_pointer().unwrap().pointee_info();
/// assert_eq!(pointee.kind(), ReflectKind::Pointer);
/// ```
pub trait Typed: TypePath {
    /// Returns the compile-time info for this type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object-safe counterpart of [`Typed`], implemented for every `Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
