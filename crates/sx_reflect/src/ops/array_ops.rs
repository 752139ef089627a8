#![allow(clippy::len_without_is_empty, reason = "`len` is fixed for array.")]

use crate::Reflect;

/// A fixed-length sequence, such as `[T; N]`.
///
/// # Examples
///
/// ```
/// use sx_reflect::ops::Array;
///
/// let mut array = [1_u8, 2, 3];
/// let erased: &mut dyn Array = &mut array;
///
/// *erased.get_mut(1).unwrap().downcast_mut::<u8>().unwrap() = 9;
/// assert_eq!(erased.len(), 3);
/// assert_eq!(array, [1, 9, 3]);
/// ```
pub trait Array: Reflect {
    /// Returns the number of items, fixed for the type.
    fn len(&self) -> usize;

    /// Returns the item at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns an iterator over the items.
    fn iter(&self) -> ArrayItemIter<'_>;
}

/// An iterator over the items of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl ArrayItemIter<'_> {
    /// Creates a new iterator for the given array.
    #[inline(always)]
    pub const fn new(array: &dyn Array) -> ArrayItemIter<'_> {
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
