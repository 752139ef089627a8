use core::fmt;

use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// The flavour of a scalar type.
///
/// A scalar is an atom on the wire: one token, never a parenthesized list
/// (except complex numbers, which have their own `#C(re im)` token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `()`, always written as `nil`.
    Unit,
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    UInt,
    Float,
    Complex,
    Text,
    Char,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.pad("unit"),
            Self::Bool => f.pad("boolean"),
            Self::Int => f.pad("integer"),
            Self::UInt => f.pad("unsigned integer"),
            Self::Float => f.pad("float"),
            Self::Complex => f.pad("complex"),
            Self::Text => f.pad("string"),
            Self::Char => f.pad("char"),
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// A container for compile-time scalar information.
///
/// # Examples
///
/// ```
/// use sx_reflect::info::{Typed, ScalarKind};
///
/// let info = <u16 as Typed>::type_info().as_scalar().unwrap();
/// assert_eq!(info.scalar_kind(), ScalarKind::UInt);
/// assert_eq!(info.type_path(), "u16");
/// ```
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    scalar_kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub const fn new<T: TypePath>(scalar_kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            scalar_kind,
        }
    }

    /// Returns the [`ScalarKind`] of the type.
    #[inline]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.scalar_kind
    }
}
