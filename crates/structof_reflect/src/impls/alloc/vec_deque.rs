use alloc::collections::VecDeque;

use crate::impls::{GenericTypeInfoCell, impl_generic_type_path};
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::Reflect;

impl_generic_type_path!("alloc::collections::vec_deque", VecDeque<T>);

impl<T: Reflect + Typed> Typed for VecDeque<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for VecDeque<T> {
    crate::reflection::impl_reflect_cast_fn!(List);

    #[inline]
    fn set_zero(&mut self) -> bool {
        self.clear();
        true
    }
}

impl<T: Reflect + Typed> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        VecDeque::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    #[inline]
    fn data_address(&self) -> usize {
        self.as_slices().0.as_ptr() as usize
    }
}
