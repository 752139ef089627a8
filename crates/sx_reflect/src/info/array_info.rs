#![allow(clippy::len_without_is_empty, reason = "`len` is fixed for array.")]

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Array;

/// Descriptor of a fixed-length array `[T; N]`.
///
/// Decoding fills exactly [`len`](Self::len) items, positionally.
///
/// ```
/// use sx_reflect::info::Typed;
///
/// let info = <[i32; 5] as Typed>::type_info().as_array().unwrap();
/// assert_eq!(info.len(), 5);
/// assert!(info.item_info().type_is::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item: fn() -> &'static TypeInfo,
    len: usize,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<A: Array + TypePath, T: Reflect + Typed>(len: usize) -> Self {
        Self {
            ty: Type::of::<A>(),
            item: T::type_info,
            len,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item)()
    }
}
