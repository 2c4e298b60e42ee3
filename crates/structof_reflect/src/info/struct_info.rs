use alloc::boxed::Box;

use structof_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Fields keep declaration order; [`field_at`](StructInfo::field_at) indices
/// are the ones used by [`Struct::field_at`].
///
/// # Examples
///
/// ```
/// use structof_reflect::{Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: u8,
///     b: String,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// assert_eq!(info.field_names(), ["a", "b"]);
/// assert_eq!(info.index_of("b"), Some(1));
/// assert!(info.field("c").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`].
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_names,
            field_indices,
        }
    }

    /// Returns the field with the given declared name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the field at the given declaration index.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the declared field names in order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the declaration index of the named field.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the number of declared fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
