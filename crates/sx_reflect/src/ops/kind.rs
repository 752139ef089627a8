use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Array, List, Map, Optional, Polymorphic, Scalar, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of ["kinds"](ReflectKind) of a reflected value.
///
/// Obtained via [`Reflect::reflect_ref`].
///
/// # Examples
///
/// ```
/// # use sx_reflect::{Reflect, ops::ReflectRef};
/// let value = vec![1_u8, 2];
/// match value.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 2),
///     _ => unreachable!(),
/// }
/// ```
pub enum ReflectRef<'a> {
    Scalar(&'a dyn Scalar),
    Array(&'a dyn Array),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Struct(&'a dyn Struct),
    Option(&'a dyn Optional),
    Interface(&'a dyn Polymorphic),
    Opaque(&'a dyn Reflect),
}

/// A mutable enumeration of ["kinds"](ReflectKind) of a reflected value.
///
/// Obtained via [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Array(&'a mut dyn Array),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Struct(&'a mut dyn Struct),
    Option(&'a mut dyn Optional),
    Interface(&'a mut dyn Polymorphic),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_fn {
    () => {
        /// Returns the [`ReflectKind`] of this value.
        pub const fn kind(&self) -> ReflectKind {
            match self {
                Self::Scalar(_) => ReflectKind::Scalar,
                Self::Array(_) => ReflectKind::Array,
                Self::List(_) => ReflectKind::List,
                Self::Map(_) => ReflectKind::Map,
                Self::Struct(_) => ReflectKind::Struct,
                Self::Option(_) => ReflectKind::Option,
                Self::Interface(_) => ReflectKind::Interface,
                Self::Opaque(_) => ReflectKind::Opaque,
            }
        }
    };
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $($ref:tt)+) => {
        /// Casts to the specific kind, or reports the actual one.
        pub fn $name(self) -> Result<$($ref)+, ReflectKindError> {
            let received = self.kind();
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received,
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn!();

    impl_cast_method!(as_scalar: Scalar => &'a dyn Scalar);
    impl_cast_method!(as_array: Array => &'a dyn Array);
    impl_cast_method!(as_list: List => &'a dyn List);
    impl_cast_method!(as_map: Map => &'a dyn Map);
    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_option: Option => &'a dyn Optional);
    impl_cast_method!(as_interface: Interface => &'a dyn Polymorphic);
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn!();

    impl_cast_method!(as_scalar: Scalar => &'a mut dyn Scalar);
    impl_cast_method!(as_array: Array => &'a mut dyn Array);
    impl_cast_method!(as_list: List => &'a mut dyn List);
    impl_cast_method!(as_map: Map => &'a mut dyn Map);
    impl_cast_method!(as_struct: Struct => &'a mut dyn Struct);
    impl_cast_method!(as_option: Option => &'a mut dyn Optional);
    impl_cast_method!(as_interface: Interface => &'a mut dyn Polymorphic);
}
