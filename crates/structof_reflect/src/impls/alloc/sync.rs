use alloc::sync::Arc;

use crate::impls::{GenericTypeInfoCell, impl_generic_type_path};
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::Pointer;
use crate::Reflect;

impl_generic_type_path!("alloc::sync", Arc<T>);

impl<T: Reflect + Typed> Typed for Arc<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Arc<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    /// Only succeeds while this is the sole owner.
    #[inline]
    fn set_zero(&mut self) -> bool {
        Arc::get_mut(self).is_some_and(Reflect::set_zero)
    }
}

impl<T: Reflect + Typed> Pointer for Arc<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn address(&self) -> Option<usize> {
        Some(Arc::as_ptr(self) as usize)
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::ops::Pointer;

    #[test]
    fn shared_pointer_access() {
        let mut value = Arc::new(3_i32);
        assert!(value.pointee_mut().is_some());

        let other = Arc::clone(&value);
        assert_eq!(value.address(), other.address());
        assert!(value.pointee_mut().is_none());
        assert!(!value.set_zero());

        drop(other);
        assert!(value.set_zero());
        assert_eq!(*value, 0);
    }
}
