use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime storage for a registered type: its [`TypeInfo`] and a constructor
/// of its zero value.
///
/// # Example
///
/// ```
/// # use sx_reflect::registry::TypeMeta;
/// let meta = TypeMeta::of::<String>();
/// let zero = meta.zero().take::<String>().unwrap();
///
/// assert_eq!(zero, "");
/// assert_eq!(meta.type_path(), "alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct TypeMeta {
    type_info: &'static TypeInfo,
    zero: fn() -> Box<dyn Reflect>,
}

impl TypeMeta {
    /// Create a [`TypeMeta`] from a type.
    #[inline]
    pub fn of<T: Reflect + Typed + Default>() -> Self {
        Self {
            type_info: T::type_info(),
            zero: zero_of::<T>,
        }
    }

    /// Returns the [`TypeInfo`] of the type.
    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the [`TypeId`] of the type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_info.ty().id()
    }

    /// Returns the type path of the type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_info.type_path()
    }

    /// Creates a zero (default) value of the type.
    #[inline]
    pub fn zero(&self) -> Box<dyn Reflect> {
        (self.zero)()
    }
}

fn zero_of<T: Reflect + Default>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .finish_non_exhaustive()
    }
}
