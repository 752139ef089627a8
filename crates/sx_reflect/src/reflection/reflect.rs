use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`sx_reflect`](crate).
///
/// `Reflect` gives structural access to a value without compile-time knowledge
/// of its type. The [`ReflectKind`] of a value decides which subtrait of
/// [`ops`](crate::ops) it exposes through [`reflect_ref`] and [`reflect_mut`].
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Reflect) for structs. Scalars,
/// arrays, `Vec`, `HashMap`, `BTreeMap`, `Option` and [`Poly`] are
/// implemented by this crate.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type ID,
/// not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use sx_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Type Casting
///
/// ```rust
/// # use sx_reflect::Reflect;
/// let x: Box<dyn Reflect> = 10_u64.into_boxed_reflect();
/// assert_eq!(x.downcast_ref::<u64>(), Some(&10));
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`Poly`]: crate::ops::Poly
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the ["kind"](ReflectKind) of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sx_reflect::{Reflect, info::ReflectKind};
    /// assert_eq!(vec![1, 2].reflect_kind(), ReflectKind::List);
    /// assert_eq!(Some(1).reflect_kind(), ReflectKind::Option);
    /// ```
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_type_info().kind()
    }

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of ["kinds"](ReflectMut) of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sx_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    /// let x = x.downcast::<u8>().unwrap_err();
    /// assert_eq!(*x.downcast::<i32>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

/// Structural formatting, see [`reflect_debug`](crate::impls::reflect_debug).
impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::reflect_debug(self, f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the kind-dependent methods `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn take_returns_the_box_on_mismatch() {
        let value: Box<dyn Reflect> = String::from("x").into_boxed_reflect();
        let value = value.take::<i32>().unwrap_err();
        assert_eq!(value.take::<String>().unwrap(), "x");
    }

    #[test]
    fn kind_follows_type_info() {
        let value: Box<dyn Reflect> = Box::new([1_u8; 2]);
        assert_eq!(value.reflect_kind(), ReflectKind::Array);
        assert_eq!(value.reflect_ref().kind(), ReflectKind::Array);
    }
}
