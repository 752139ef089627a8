use alloc::boxed::Box;
use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Interface

/// A marker naming an open set of concrete types.
///
/// The name is the discriminant written in front of a polymorphic value,
/// and the key under which a concrete type is registered for decoding.
/// Declare markers with [`interface!`](crate::interface).
pub trait Interface: Send + Sync + 'static {
    /// The discriminant name of the interface.
    const NAME: &'static str;
}

/// Declares a unit struct implementing [`Interface`].
///
/// # Examples
///
/// ```
/// use sx_reflect::{interface, ops::Interface};
///
/// interface!(pub Animal = "zoo.Animal");
/// // Without a name, the module path and the ident are used.
/// interface!(Plant);
///
/// assert_eq!(Animal::NAME, "zoo.Animal");
/// assert!(Plant::NAME.ends_with("::Plant"));
/// ```
#[macro_export]
macro_rules! interface {
    ($vis:vis $ident:ident = $name:literal) => {
        $vis struct $ident;

        impl $crate::ops::Interface for $ident {
            const NAME: &'static str = $name;
        }
    };
    ($vis:vis $ident:ident) => {
        $vis struct $ident;

        impl $crate::ops::Interface for $ident {
            const NAME: &'static str = ::core::concat!(
                ::core::module_path!(),
                "::",
                ::core::stringify!($ident)
            );
        }
    };
}

// -----------------------------------------------------------------------------
// Polymorphic

/// A slot holding a value whose concrete type is only known at runtime.
pub trait Polymorphic: Reflect {
    /// Returns the discriminant name of the slot's interface.
    fn interface_name(&self) -> &'static str;

    /// Returns the held value, if any.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the held value mutably, if any.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Replaces the held value.
    fn set_boxed(&mut self, value: Option<Box<dyn Reflect>>);
}

// -----------------------------------------------------------------------------
// Poly

/// A polymorphic slot of interface `I`.
///
/// Any reflected value may be stored. On the wire the value is tagged with
/// `I::NAME`, and decoding resolves that name through a
/// [`TypeRegistry`](crate::registry::TypeRegistry).
///
/// # Examples
///
/// ```
/// use sx_reflect::{interface, ops::Poly};
///
/// interface!(Value = "demo.Value");
///
/// let mut slot = Poly::<Value>::new(5_i64);
/// assert_eq!(slot.downcast_ref::<i64>(), Some(&5));
///
/// slot.set("five".to_string());
/// assert!(slot.downcast_ref::<i64>().is_none());
///
/// assert!(slot.take().is_some());
/// assert!(slot.is_none());
/// ```
pub struct Poly<I: Interface> {
    value: Option<Box<dyn Reflect>>,
    marker: PhantomData<fn() -> I>,
}

impl<I: Interface> Poly<I> {
    /// Creates a slot holding `value`.
    #[inline]
    pub fn new<T: Reflect>(value: T) -> Self {
        Self::from_boxed(Box::new(value))
    }

    /// Creates a slot holding an already boxed value.
    #[inline]
    pub fn from_boxed(value: Box<dyn Reflect>) -> Self {
        Self {
            value: Some(value),
            marker: PhantomData,
        }
    }

    /// Creates an empty slot.
    #[inline]
    pub const fn none() -> Self {
        Self {
            value: None,
            marker: PhantomData,
        }
    }

    /// Returns `true` if the slot is empty.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the held value, if any.
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.value.as_deref()
    }

    /// Returns the held value as `T`, if it is one.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.as_deref()?.downcast_ref::<T>()
    }

    /// Stores `value`, dropping the previous one.
    #[inline]
    pub fn set<T: Reflect>(&mut self, value: T) {
        self.value = Some(Box::new(value));
    }

    /// Takes the held value out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Option<Box<dyn Reflect>> {
        self.value.take()
    }
}

impl<I: Interface> Default for Poly<I> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<I: Interface> fmt::Debug for Poly<I> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::reflect_debug(self, f)
    }
}

impl<I: Interface> PartialEq for Poly<I> {
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => crate::impls::reflect_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<I: Interface> Polymorphic for Poly<I> {
    #[inline]
    fn interface_name(&self) -> &'static str {
        I::NAME
    }

    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.value.as_deref()
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.value.as_deref_mut()
    }

    #[inline]
    fn set_boxed(&mut self, value: Option<Box<dyn Reflect>>) {
        self.value = value;
    }
}
