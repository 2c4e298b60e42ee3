use crate::Reflect;

// -----------------------------------------------------------------------------
// List trait

/// Type-erased access to a growable sequence, e.g. `Vec<T>`.
///
/// ```
/// use structof_reflect::ops::List;
///
/// let mut list: Vec<u8> = vec![1, 2, 3];
/// assert_eq!(List::len(&list), 3);
/// assert_eq!(List::get(&list, 1).and_then(|v| v.downcast_ref::<u8>()), Some(&2));
///
/// List::clear(&mut list);
/// assert!(list.is_empty());
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every item.
    fn clear(&mut self);

    /// Returns the address of the first item's storage.
    ///
    /// Together with [`len`](List::len) this identifies the backing buffer;
    /// two lists sharing both values view the same items.
    fn data_address(&self) -> usize;
}

impl dyn List {
    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
