use crate::info::{Type, TypePath, impl_type_fn};
use crate::ops::{Interface, Polymorphic};

/// A container for compile-time information about a polymorphic slot.
///
/// The slot's concrete type is only known at runtime. What is known
/// statically is the name of the interface, which tags the value on the wire.
///
/// # Examples
///
/// ```
/// use sx_reflect::{info::Typed, interface, ops::Poly};
///
/// interface!(Shape = "geo.Shape");
///
/// let info = <Poly<Shape> as Typed>::type_info().as_interface().unwrap();
/// assert_eq!(info.name(), "geo.Shape");
/// ```
#[derive(Clone, Debug)]
pub struct InterfaceInfo {
    ty: Type,
    name: &'static str,
}

impl InterfaceInfo {
    impl_type_fn!(ty);

    /// Creates a new [`InterfaceInfo`] for the slot type `T` of interface `I`.
    #[inline]
    pub const fn new<T: Polymorphic + TypePath, I: Interface>() -> Self {
        Self {
            ty: Type::of::<T>(),
            name: I::NAME,
        }
    }

    /// Returns the interface name, used as the wire discriminant.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}
