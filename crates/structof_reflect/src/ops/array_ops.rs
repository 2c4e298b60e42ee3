use crate::Reflect;

// -----------------------------------------------------------------------------
// Array trait

/// Type-erased access to a fixed-size sequence, e.g. `[T; N]`.
pub trait Array: Reflect {
    /// Returns the item at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of items, fixed by the type.
    fn len(&self) -> usize;

    /// Returns `true` if the array type has zero length.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn Array {
    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ArrayItemIter

/// An iterator over the items of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl<'a> ArrayItemIter<'a> {
    /// Creates a new iterator for the given array.
    #[inline(always)]
    pub const fn new(array: &'a dyn Array) -> Self {
        ArrayItemIter { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.array.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
