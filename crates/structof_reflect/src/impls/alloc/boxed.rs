use alloc::boxed::Box;

use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
use crate::info::{DynamicInfo, PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Dynamic, Pointer};
use crate::Reflect;

// `?Sized` so that `Box<dyn Reflect>` shares the naming scheme.
impl<T: TypePath + ?Sized> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::generic_path("alloc::boxed::Box", &[T::type_path()])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::generic_path("Box", &[T::type_name()]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

// -----------------------------------------------------------------------------
// Box<T>

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn set_zero(&mut self) -> bool {
        (**self).set_zero()
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some((**self).as_reflect_mut())
    }

    #[inline]
    fn address(&self) -> Option<usize> {
        Some(&**self as *const T as usize)
    }
}

// -----------------------------------------------------------------------------
// Box<dyn Reflect>

impl Typed for Box<dyn Reflect> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

impl Reflect for Box<dyn Reflect> {
    /// Replaces the held value, whatever its type.
    #[inline]
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value;
        Ok(())
    }

    #[inline]
    fn set_zero(&mut self) -> bool {
        (**self).set_zero()
    }

    #[inline]
    fn reflect_kind(&self) -> crate::info::ReflectKind {
        crate::info::ReflectKind::Dynamic
    }

    #[inline]
    fn reflect_ref(&self) -> crate::ops::ReflectRef<'_> {
        crate::ops::ReflectRef::Dynamic(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> crate::ops::ReflectMut<'_> {
        crate::ops::ReflectMut::Dynamic(self)
    }
}

impl Dynamic for Box<dyn Reflect> {
    #[inline]
    fn inner(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn inner_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::{Dynamic, Pointer};

    #[test]
    fn boxed_value_is_pointer() {
        let value = Box::new(5_u8);
        assert_eq!(<Box<u8>>::type_info().kind(), ReflectKind::Pointer);
        assert_eq!(value.address(), Some(&*value as *const u8 as usize));
        assert_eq!(<Box<u8>>::type_path(), "alloc::boxed::Box<u8>");
    }

    #[test]
    fn boxed_trait_object_is_dynamic() {
        let mut value: Box<dyn Reflect> = Box::new(5_u8);
        assert_eq!(<Box<dyn Reflect>>::type_info().kind(), ReflectKind::Dynamic);
        assert_eq!(<Box<dyn Reflect>>::type_name(), "Box<dyn Reflect>");

        Reflect::set(&mut value, Box::new(1.5_f32)).unwrap();
        let inner = Dynamic::inner(&value).unwrap();
        assert_eq!(inner.downcast_ref::<f32>(), Some(&1.5));
    }
}
