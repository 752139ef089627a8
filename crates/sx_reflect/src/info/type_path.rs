use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// The path is a stable, human readable identifier for the type. It is used
/// as the default registry key and appears in error messages.
///
/// Implemented for all reflected types of this crate, and by
/// [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use sx_reflect::info::TypePath;
///
/// assert_eq!(u32::type_path(), "u32");
/// assert_eq!(<Vec<u8>>::type_ident(), "Vec");
/// ```
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type.
    ///
    /// Generic types use [`core::any::type_name`], so their path is unique
    /// per instantiation but not guaranteed to be stable across compilers.
    fn type_path() -> &'static str;

    /// Returns the name of the type without module path and generics.
    fn type_ident() -> &'static str;
}

/// Dynamic dispatch for [`TypePath`].
///
/// Auto implemented for all types that implement [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] and [`TypePath`] accessors.
///
/// # Example
///
/// ```
/// # use core::any::TypeId;
/// # use sx_reflect::info::Type;
/// let ty = Type::of::<String>();
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.ident(), "String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    ident: fn() -> &'static str,
}

impl Type {
    /// Creates a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            ident: T::type_ident,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        (self.ident)()
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

/// Implements the accessors shared by every `*Info` type holding a [`Type`].
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Returns the type ident.
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.$field.ident()
        }
    };
}

pub(crate) use impl_type_fn;
