use crate::Reflect;
use crate::info::{StructInfo, TypeInfo};

/// A struct with named fields in declaration order.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use sx_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut point = Point::default();
/// *point.field_mut("y").unwrap().downcast_mut::<i32>().unwrap() = 4;
///
/// assert_eq!(point.name_at(1), Some("y"));
/// assert_eq!(point.y, 4);
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`, using the canonical name.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably, using the canonical name.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the canonical name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over `(canonical name, value)` pairs.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Returns the [`StructInfo`] of this struct, if it describes one.
    #[inline]
    fn struct_info(&self) -> Option<&'static StructInfo> {
        match self.reflect_type_info() {
            TypeInfo::Struct(info) => Some(info),
            _ => None,
        }
    }
}

/// An iterator over the fields of a [`Struct`].
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    index: usize,
}

impl StructFieldIter<'_> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &dyn Struct) -> StructFieldIter<'_> {
        StructFieldIter { value, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.value.name_at(self.index)?;
        let field = self.value.field_at(self.index)?;
        self.index += 1;
        Some((name, field))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.value.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
