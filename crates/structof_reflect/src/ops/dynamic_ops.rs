use crate::Reflect;

// -----------------------------------------------------------------------------
// Dynamic trait

/// Type-erased access to a value whose concrete type is only known at
/// runtime, e.g. `Box<dyn Reflect>`.
///
/// ```
/// use structof_reflect::{Reflect, ops::Dynamic};
///
/// let value: Box<dyn Reflect> = Box::new(7_i16);
/// let inner = Dynamic::inner(&value).unwrap();
///
/// assert_eq!(inner.downcast_ref::<i16>(), Some(&7));
/// ```
pub trait Dynamic: Reflect {
    /// Returns the held value, or `None` if nothing is held.
    fn inner(&self) -> Option<&dyn Reflect>;

    /// Returns the held value mutably, or `None` if nothing is held.
    fn inner_mut(&mut self) -> Option<&mut dyn Reflect>;
}
