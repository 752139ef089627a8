use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// Descriptor of an associative container, keyed by `K` with values `V`.
///
/// ```
/// use std::collections::HashMap;
/// use sx_reflect::info::Typed;
///
/// let info = <HashMap<String, u8> as Typed>::type_info().as_map().unwrap();
/// assert!(info.key_info().type_is::<String>());
/// assert!(info.value_info().type_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key: fn() -> &'static TypeInfo,
    value: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<M, K, V>() -> Self
    where
        M: Map + TypePath,
        K: Reflect + Typed,
        V: Reflect + Typed,
    {
        Self {
            ty: Type::of::<M>(),
            key: K::type_info,
            value: V::type_info,
        }
    }

    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key)()
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value)()
    }
}
