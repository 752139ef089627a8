use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

/// Metadata for types whose internals are invisible to the reflection system.
///
/// Opaque values (function pointers, channel endpoints) have no textual
/// representation; encoding one fails.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
