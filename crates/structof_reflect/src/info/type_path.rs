use core::any::{Any, TypeId};

// -----------------------------------------------------------------------------
// TypePath

/// Stable, human readable names for a type.
///
/// Unlike [`core::any::type_name`], the strings returned here are fixed by
/// the implementation and can be used in error messages and logs.
///
/// - [`type_path`](TypePath::type_path): full path, e.g. `alloc::vec::Vec<u8>`.
/// - [`type_name`](TypePath::type_name): path without modules, e.g. `Vec<u8>`.
/// - [`type_ident`](TypePath::type_ident): bare ident, e.g. `Vec`.
/// - [`module_path`](TypePath::module_path): e.g. `Some("alloc::vec")`.
///
/// # Examples
///
/// ```
/// use structof_reflect::info::TypePath;
///
/// assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
/// assert_eq!(<Vec<u8>>::type_name(), "Vec<u8>");
/// assert_eq!(<Vec<u8>>::type_ident(), "Vec");
/// assert_eq!(<u8>::module_path(), None);
/// ```
pub trait TypePath: 'static {
    /// Returns the full path of the type.
    fn type_path() -> &'static str;

    /// Returns the type name without module path.
    fn type_name() -> &'static str;

    /// Returns the type name without generics and module path.
    fn type_ident() -> &'static str;

    /// Returns the module path, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe counterpart of [`TypePath`], implemented for every `TypePath`.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// The four [`TypePath`] functions of one type, stored as function pointers.
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    /// Creates the table for `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    /// See [`TypePath::type_path`].
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::type_ident`].
    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    /// See [`TypePath::module_path`].
    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl core::fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("type_ident", &self.ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the type's [`TypePathTable`].
///
/// Equality and hashing only consider the `TypeId`.
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    /// Creates the `Type` of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// Returns the [`TypePathTable`].
    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.type_path_table
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl core::fmt::Debug for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the [`Type`] accessors for an info struct holding a `ty` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the [`Type`](crate::info::Type) of the described type.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the [`TypeId`](::core::any::TypeId) of the described type.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().id() == ::core::any::TypeId::of::<T>()
        }

        /// See [`TypePath::type_path`](crate::info::TypePath::type_path).
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// See [`TypePath::type_name`](crate::info::TypePath::type_name).
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// See [`TypePath::type_ident`](crate::info::TypePath::type_ident).
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.ty().ident()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Type, TypePath};
    use alloc::string::String;

    #[test]
    fn type_equality_ignores_names() {
        assert_eq!(Type::of::<String>(), Type::of::<String>());
        assert_ne!(Type::of::<String>(), Type::of::<&'static str>());
        assert!(Type::of::<u16>().is::<u16>());
    }

    #[test]
    fn generic_names() {
        type M = alloc::collections::BTreeMap<String, Option<u8>>;
        assert_eq!(M::type_name(), "BTreeMap<String, Option<u8>>");
        assert_eq!(M::type_ident(), "BTreeMap");
        assert_eq!(M::module_path(), Some("alloc::collections::btree_map"));
    }
}
