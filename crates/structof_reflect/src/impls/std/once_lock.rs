use std::sync::OnceLock;

use crate::impls::{GenericTypeInfoCell, impl_generic_type_path};
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::Pointer;
use crate::Reflect;

impl_generic_type_path!("std::sync", OnceLock<T>);

impl<T: Reflect + Typed> Typed for OnceLock<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(true)))
    }
}

impl<T: Reflect + Typed> Reflect for OnceLock<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn set_zero(&mut self) -> bool {
        self.take();
        true
    }
}

impl<T: Reflect + Typed> Pointer for OnceLock<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.get().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.get_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn address(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use crate::Reflect;
    use crate::ops::Pointer;

    #[test]
    fn unset_cell_is_null() {
        let mut cell = OnceLock::new();
        assert!(cell.is_null());

        let _ = cell.set(4_u8);
        assert_eq!(cell.pointee().and_then(|v| v.downcast_ref::<u8>()), Some(&4));

        assert!(cell.set_zero());
        assert!(cell.is_null());
    }
}
