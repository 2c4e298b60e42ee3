use alloc::string::ToString;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ArrayInfo, TypeInfo, TypePath, Typed};
use crate::ops::Array;

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_path(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_name(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_ident() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_ident(), "; ", &N.to_string(), "]"])
        })
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(Array);

    fn set_zero(&mut self) -> bool {
        let mut zeroed = true;
        for item in self.iter_mut() {
            zeroed &= item.set_zero();
        }
        zeroed
    }
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::Array;

    #[test]
    fn array_access() {
        let mut value = [1_u8, 2, 3];
        assert_eq!(<[u8; 3]>::type_path(), "[u8; 3]");
        assert_eq!(Array::len(&value), 3);
        assert_eq!(Array::get(&value, 2).and_then(|v| v.downcast_ref::<u8>()), Some(&3));

        assert!(value.set_zero());
        assert_eq!(value, [0, 0, 0]);
    }
}
