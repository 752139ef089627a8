use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Optional;

/// Descriptor of `Option<T>`.
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    some: fn() -> &'static TypeInfo,
}

impl OptionInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<O: Optional + TypePath, T: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<O>(),
            some: T::type_info,
        }
    }

    /// The descriptor of the wrapped type.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some)()
    }
}
