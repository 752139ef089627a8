use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named struct field.
///
/// A field may carry an alias, which replaces its name on the wire.
///
/// # Examples
///
/// ```
/// use sx_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(alias = "a")]
///     field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "field_a");
/// assert_eq!(field_info.key(), "a");
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    alias: Option<&'static str>,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Sets the wire alias of this field.
    #[inline]
    pub const fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the canonical field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared alias, if any.
    #[inline]
    pub const fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// Returns the key written on the wire: the alias if declared, else the name.
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self.alias {
            Some(alias) => alias,
            None => self.name,
        }
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
