use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, Dynamic, List, Map, Pointer, Scalar, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable reference to a reflected value, split by [`ReflectKind`].
///
/// Obtained from [`Reflect::reflect_ref`].
///
/// ```
/// use structof_reflect::{Reflect, ops::ReflectRef};
///
/// let value: Vec<u8> = vec![1, 2];
/// match value.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 2),
///     _ => unreachable!(),
/// }
/// ```
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Dynamic(&'a dyn Dynamic),
    Scalar(&'a dyn Scalar),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable reference to a reflected value, split by [`ReflectKind`].
///
/// Obtained from [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Dynamic(&'a mut dyn Dynamic),
    Scalar(&'a mut dyn Scalar),
    Opaque(&'a mut dyn Reflect),
}

// -----------------------------------------------------------------------------
// Auxiliary

macro_rules! impl_kind_fn {
    ($name:ident) => {
        impl $name<'_> {
            /// Returns the [`ReflectKind`] of the referenced value.
            pub const fn kind(&self) -> ReflectKind {
                match self {
                    Self::Struct(_) => ReflectKind::Struct,
                    Self::List(_) => ReflectKind::List,
                    Self::Array(_) => ReflectKind::Array,
                    Self::Map(_) => ReflectKind::Map,
                    Self::Pointer(_) => ReflectKind::Pointer,
                    Self::Dynamic(_) => ReflectKind::Dynamic,
                    Self::Scalar(_) => ReflectKind::Scalar,
                    Self::Opaque(_) => ReflectKind::Opaque,
                }
            }
        }
    };
}

impl_kind_fn!(ReflectRef);
impl_kind_fn!(ReflectMut);
