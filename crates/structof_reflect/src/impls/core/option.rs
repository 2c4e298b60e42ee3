use crate::impls::{GenericTypeInfoCell, impl_generic_type_path};
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::Pointer;
use crate::Reflect;

impl_generic_type_path!("core::option", Option<T>);

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(true)))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn set_zero(&mut self) -> bool {
        *self = None;
        true
    }
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn address(&self) -> Option<usize> {
        None
    }
}
