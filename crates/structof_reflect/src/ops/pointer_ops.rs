use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer trait

/// Type-erased access to an indirection: `Option<T>`, `Box<T>`, `Arc<T>`
/// or `OnceLock<T>`.
///
/// A nullable pointer may have no pointee; see
/// [`PointerInfo::is_nullable`](crate::info::PointerInfo::is_nullable).
///
/// ```
/// use structof_reflect::ops::Pointer;
///
/// let some: Option<u8> = Some(3);
/// let none: Option<u8> = None;
///
/// assert_eq!(some.pointee().and_then(|v| v.downcast_ref::<u8>()), Some(&3));
/// assert!(none.is_null());
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, or `None` for a null pointer.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably.
    ///
    /// Returns `None` for a null pointer, and for shared pointers that are
    /// not uniquely owned.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the address of a heap-allocated pointee.
    ///
    /// Inline storage (`Option<T>`, `OnceLock<T>`) has no separate address
    /// and returns `None`.
    fn address(&self) -> Option<usize>;

    /// Returns `true` if there is no pointee.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
