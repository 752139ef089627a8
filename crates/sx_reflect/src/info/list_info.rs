use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::List;

/// Descriptor of a growable sequence such as `Vec<T>`.
///
/// ```
/// use sx_reflect::info::{ReflectKind, Typed};
///
/// let info = <Vec<Vec<u8>> as Typed>::type_info().as_list().unwrap();
/// assert_eq!(info.item_info().kind(), ReflectKind::List);
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item: fn() -> &'static TypeInfo,
}

impl ListInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<L: List + TypePath, T: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<L>(),
            item: T::type_info,
        }
    }

    /// The descriptor shared by all items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item)()
    }
}
