use core::any::Any;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// Type-erased access to a record with named fields.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for structs
/// with named fields. Fields are addressed by name or by declaration index;
/// both include private fields, visibility is recorded in
/// [`NamedField`](crate::info::NamedField).
///
/// # Examples
///
/// ```
/// use structof_reflect::{Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 10, b: true };
/// let foo_ref: &dyn Struct = &foo;
///
/// assert_eq!(foo_ref.field_len(), 2);
/// assert_eq!(foo_ref.field_as::<i32>("a"), Some(&10));
/// assert_eq!(foo_ref.name_at(1), Some("b"));
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably, or `None` if there is no such field.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at declaration index `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at declaration index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of declared fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the field values in declaration order.
    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_>
    where
        Self: Sized,
    {
        StructFieldIter::new(self)
    }
}

impl dyn Struct {
    /// Returns the field named `name` downcast to `T`.
    #[inline]
    pub fn field_as<T: Any>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref::<T>()
    }

    /// Returns the field named `name` mutably, downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name)?.downcast_mut::<T>()
    }

    /// Returns an iterator over the field values in declaration order.
    #[inline]
    pub fn iter(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::Struct;

    #[derive(Reflect)]
    struct Pair {
        left: u8,
        right: String,
    }

    #[test]
    fn derived_accessors() {
        let mut pair = Pair { left: 1, right: String::from("r") };
        let record: &mut dyn Struct = &mut pair;

        assert_eq!(record.field_len(), 2);
        assert_eq!(record.name_at(0), Some("left"));
        assert_eq!(record.name_at(2), None);
        assert!(record.field("missing").is_none());
        assert!(record.field_at(2).is_none());
        assert_eq!(record.field_as::<String>("right").map(String::as_str), Some("r"));
        assert_eq!(record.field_at(0).and_then(|v| v.downcast_ref::<u8>()), Some(&1));

        *record.field_mut_as::<u8>("left").unwrap() = 7;
        if let Some(right) = record.field_at_mut(1).and_then(|v| v.downcast_mut::<String>()) {
            right.push('!');
        }
        assert_eq!(record.iter().count(), 2);
        assert_eq!((pair.left, pair.right.as_str()), (7, "r!"));
    }

    #[derive(Reflect)]
    struct Tagged<T> {
        value: T,
    }

    #[test]
    fn derived_type_paths() {
        assert_eq!(Pair::type_name(), "Pair");
        assert_eq!(Pair::type_path(), "structof_reflect::ops::struct_ops::tests::Pair");
        assert_eq!(<Tagged<u8>>::type_name(), "Tagged<u8>");
        assert_eq!(
            <Tagged<String>>::type_path(),
            "structof_reflect::ops::struct_ops::tests::Tagged<alloc::string::String>",
        );
        assert_eq!(Tagged { value: 3_u8 }.field_len(), 1);
    }
}
