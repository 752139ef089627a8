use core::{error, fmt};

use crate::info::{ArrayInfo, InterfaceInfo, ListInfo, MapInfo};
use crate::info::{OpaqueInfo, OptionInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the structural "kinds" of a reflected type.
///
/// Each kind corresponds to one access trait in [`ops`](crate::ops),
/// and to one way of writing a value as an S-expression.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// [`TypeInfo::kind`] or [`ReflectRef::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Scalar,
    Array,
    List,
    Map,
    Struct,
    Option,
    Interface,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Array => f.pad("Array"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Struct => f.pad("Struct"),
            Self::Option => f.pad("Option"),
            Self::Interface => f.pad("Interface"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information of a reflected type.
///
/// A `TypeInfo` is built once per type at first access and is immutable
/// thereafter. Nested element, key, value and field descriptors are reached
/// lazily through function pointers, so recursive types are fine.
///
/// It can be retrieved in one of three ways:
///
/// 1. [`Typed::type_info`], when the type is known statically.
/// 2. [`DynamicTyped::reflect_type_info`], from a `dyn Reflect`.
/// 3. [`TypeMeta::type_info`], from a registry entry.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [`TypeMeta::type_info`]: crate::registry::TypeMeta::type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Array(ArrayInfo),
    List(ListInfo),
    Map(MapInfo),
    Struct(StructInfo),
    Option(OptionInfo),
    Interface(InterfaceInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_option: Option => OptionInfo);
    impl_cast_method!(as_interface: Interface => InterfaceInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::Interface(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sx_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Scalar);
    /// assert_eq!(<[u8; 3]>::type_info().kind(), ReflectKind::Array);
    /// ```
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

    /// Returns the type path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the type ident.
    #[inline]
    pub fn type_ident(&self) -> &'static str {
        self.ty().ident()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::{ReflectKind, ReflectKindError};
    use crate::info::Typed;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[test]
    fn cast_reports_both_kinds() {
        let err = <Vec<u8>>::type_info().as_map().unwrap_err();
        assert_eq!(
            err,
            ReflectKindError {
                expected: ReflectKind::Map,
                received: ReflectKind::List,
            }
        );
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Map, received List"
        );
    }

    #[test]
    fn option_and_scalar_kinds() {
        assert_eq!(<Option<i8>>::type_info().kind(), ReflectKind::Option);
        assert_eq!(<String>::type_info().kind(), ReflectKind::Scalar);
        assert!(<String>::type_info().type_is::<String>());
    }
}
