use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map keyed by [`TypeId`].
///
/// Every process-wide cache in the workspace (type info cells, field lists,
/// encoders) is a `RwLock<TypeIdMap<_>>`. Entries are only ever added, so the
/// interface stays small.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use structof_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// assert!(map.try_insert(TypeId::of::<u8>(), || "u8"));
/// assert!(!map.try_insert(TypeId::of::<u8>(), || "again"));
///
/// assert_eq!(map.get_type::<u8>(), Some(&"u8"));
/// assert_eq!(map.len(), 1);
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`, usable in `static` items.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Inserts the value built by `f` if `type_id` is absent.
    ///
    /// Returns `false` and leaves the map untouched when the key exists;
    /// `f` is not called in that case.
    #[inline]
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the value for `type_id`, inserting the result of `f` first if
    /// the key is absent.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns a reference to the value stored for `type_id`.
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns a reference to the value stored for `T`.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Inserts a value, returning the previous one.
    pub fn insert(&mut self, type_id: TypeId, v: V) -> Option<V> {
        self.0.insert(type_id, v)
    }

    /// Returns `true` if the map contains a value for `type_id`.
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<T> Default for TypeIdMap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TypeIdMap<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn get_or_insert_keeps_first() {
        let mut map = TypeIdMap::new();
        *map.get_or_insert(TypeId::of::<i32>(), || 1) += 10;
        let v = *map.get_or_insert(TypeId::of::<i32>(), || 100);
        assert_eq!(v, 11);
        assert!(map.contains(&TypeId::of::<i32>()));
        assert!(!map.contains(&TypeId::of::<u32>()));
    }

    #[test]
    fn insert_replaces() {
        let mut map = TypeIdMap::default();
        assert_eq!(map.insert(TypeId::of::<str>(), 'a'), None);
        assert_eq!(map.insert(TypeId::of::<str>(), 'b'), Some('a'));
        assert_eq!(map.get_type::<str>(), Some(&'b'));
        assert!(!map.is_empty());
    }
}
