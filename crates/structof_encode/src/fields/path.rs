use structof_reflect::Reflect;
use structof_reflect::info::ReflectKind;
use structof_reflect::ops::{ReflectMut, ReflectRef, Struct};

/// Follows pointers down to the first non-pointer value, `None` on a null
/// pointer.
pub(crate) fn deref_pointers(mut value: &dyn Reflect) -> Option<&dyn Reflect> {
    while let ReflectRef::Pointer(pointer) = value.reflect_ref() {
        value = pointer.pointee()?;
    }
    Some(value)
}

/// Mutable counterpart of [`deref_pointers`].
pub(crate) fn deref_pointers_mut(mut value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    while value.reflect_kind() == ReflectKind::Pointer {
        match value.reflect_mut() {
            ReflectMut::Pointer(pointer) => value = pointer.pointee_mut()?,
            _ => return None,
        }
    }
    Some(value)
}

/// Walks `path` from `record`, dereferencing embedded pointers.
///
/// Returns `None` if the walk crosses a null pointer.
pub(crate) fn field_by_path<'a>(record: &'a dyn Struct, path: &[usize]) -> Option<&'a dyn Reflect> {
    let (&last, parents) = path.split_last()?;
    let mut record = record;
    for &index in parents {
        let value = deref_pointers(record.field_at(index)?)?;
        match value.reflect_ref() {
            ReflectRef::Struct(inner) => record = inner,
            _ => return None,
        }
    }
    record.field_at(last)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use structof_reflect::Reflect;

    use super::{deref_pointers, deref_pointers_mut, field_by_path};

    #[derive(Reflect)]
    pub struct Inner {
        pub value: u8,
    }

    #[derive(Reflect)]
    pub struct Outer {
        pub inner: Option<Box<Inner>>,
    }

    #[test]
    fn walk_through_pointers() {
        let outer = Outer { inner: Some(Box::new(Inner { value: 9 })) };
        let field = field_by_path(&outer, &[0, 0]).unwrap();
        assert_eq!(field.downcast_ref::<u8>(), Some(&9));

        let empty = Outer { inner: None };
        assert!(field_by_path(&empty, &[0, 0]).is_none());
        assert!(field_by_path(&empty, &[0]).is_some());
    }

    #[test]
    fn deref_chain() {
        let mut value = Some(Box::new(Some(3_u8)));
        assert_eq!(deref_pointers(&value).and_then(|v| v.downcast_ref::<u8>()), Some(&3));

        *deref_pointers_mut(&mut value).unwrap().downcast_mut::<u8>().unwrap() = 4;
        assert_eq!(value, Some(Box::new(Some(4))));

        let none: Option<Box<u8>> = None;
        assert!(deref_pointers(&none).is_none());
    }
}
