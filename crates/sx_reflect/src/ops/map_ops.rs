use alloc::boxed::Box;

use crate::Reflect;

/// An iterator over the entries of a [`Map`], in the map's own order.
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// An associative container with unique keys, such as `HashMap<K, V>`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use sx_reflect::{Reflect, ops::Map};
///
/// let mut tree = BTreeMap::<String, u8>::new();
/// let map: &mut dyn Map = &mut tree;
///
/// let (mut key, mut value) = (map.zero_key(), map.zero_value());
/// *key.downcast_mut::<String>().unwrap() = "k".into();
/// *value.downcast_mut::<u8>().unwrap() = 1;
/// map.insert_boxed(key, value).unwrap();
///
/// assert_eq!(tree["k"], 1);
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored for `key`.
    ///
    /// Returns `None` if absent, or if `key` is not of the key type.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns an iterator over the entries.
    fn iter(&self) -> MapIter<'_>;

    /// Creates a zero value of the key type.
    fn zero_key(&self) -> Box<dyn Reflect>;

    /// Creates a zero value of the value type.
    fn zero_value(&self) -> Box<dyn Reflect>;

    /// Inserts an entry, overwriting any previous value for the key.
    ///
    /// If `key` or `value` is not of the expected type, nothing is inserted
    /// and the offending box is returned.
    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>>;

    /// Removes all entries.
    fn clear(&mut self);
}
