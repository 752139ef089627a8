use crate::Reflect;

/// A growable sequence, such as `Vec<T>`.
///
/// Items are appended as zero values and then filled in place, so that a
/// decoder never needs to construct an item of an unknown type itself.
///
/// # Examples
///
/// ```
/// use sx_reflect::ops::List;
///
/// let mut vec = vec![1_i32];
/// let list: &mut dyn List = &mut vec;
///
/// *list.push_zero().downcast_mut::<i32>().unwrap() = 5;
/// assert_eq!(list.len(), 2);
///
/// list.clear();
/// assert!(vec.is_empty());
/// ```
pub trait List: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the item at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends a zero-valued item and returns it.
    fn push_zero(&mut self) -> &mut dyn Reflect;

    /// Removes all items.
    fn clear(&mut self);

    /// Returns an iterator over the items.
    fn iter(&self) -> ListItemIter<'_>;
}

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
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
