use alloc::boxed::Box;

use crate::Reflect;

/// An iterator over the entries of a [`Map`].
pub type MapEntryIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

// -----------------------------------------------------------------------------
// Map trait

/// Type-erased access to a map, e.g. `HashMap<K, V>`.
///
/// Entry order is whatever the underlying map yields.
///
/// ```
/// use std::collections::BTreeMap;
/// use structof_reflect::ops::Map;
///
/// let map = BTreeMap::from([(String::from("a"), 1_u8)]);
/// let (key, value) = Map::iter(&map).next().unwrap();
///
/// assert_eq!(key.downcast_ref::<String>().unwrap(), "a");
/// assert_eq!(value.downcast_ref::<u8>(), Some(&1));
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map holds no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over `(key, value)` pairs.
    fn iter(&self) -> MapEntryIter<'_>;

    /// Removes every entry.
    fn clear(&mut self);
}
