use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::{error, fmt};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::Reflect;
use crate::info::{TypePath, Typed};
use crate::ops::Interface;
use crate::registry::TypeMeta;

// -----------------------------------------------------------------------------
// UnregisteredType

/// Error returned by [`TypeRegistry::resolve`] for an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisteredType {
    pub name: Box<str>,
}

impl fmt::Display for UnregisteredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no concrete type registered for `{}`", self.name)
    }
}

impl error::Error for UnregisteredType {}

// -----------------------------------------------------------------------------
// TypeRegistry

/// A mapping from discriminant names to concrete types.
///
/// Decoding a polymorphic value looks up its discriminant here, then builds a
/// zero value of the registered type and reads into it. Nothing is registered
/// implicitly: every name a decode needs must be registered beforehand.
///
/// The registry is a plain value. Populate it once, then share `&TypeRegistry`
/// between decoders, or wrap it in a [`TypeRegistryArc`] when registration
/// continues while other threads decode.
///
/// # Example
///
/// ```
/// use sx_reflect::{interface, registry::TypeRegistry};
///
/// interface!(Payload = "app.Payload");
///
/// let mut registry = TypeRegistry::new();
/// registry.register_interface::<Payload, i64>();
/// registry.register::<String>();
///
/// assert!(registry.get("app.Payload").unwrap().type_info().type_is::<i64>());
/// assert!(registry.contains("alloc::string::String"));
/// assert!(registry.resolve("app.Other").is_err());
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    entries: HashMap<Cow<'static, str>, TypeMeta, FixedState>,
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(FixedState::default()),
        }
    }

    /// Registers `T` under its [type path](TypePath::type_path).
    #[inline]
    pub fn register<T: Reflect + Typed + Default>(&mut self) {
        self.insert(T::type_path(), TypeMeta::of::<T>());
    }

    /// Registers `T` under an explicit `name`.
    #[inline]
    pub fn register_as<T: Reflect + Typed + Default>(&mut self, name: impl Into<Cow<'static, str>>) {
        self.insert(name, TypeMeta::of::<T>());
    }

    /// Registers `T` as the concrete type decoded for slots of interface `I`.
    #[inline]
    pub fn register_interface<I: Interface, T: Reflect + Typed + Default>(&mut self) {
        self.insert(I::NAME, TypeMeta::of::<T>());
    }

    /// Insert or **Overwrite** the entry for `name`.
    ///
    /// Returns the previous entry. Replacing it with a different type is
    /// logged as a warning.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, meta: TypeMeta) -> Option<TypeMeta> {
        let name = name.into();
        log::debug!("registering `{name}` as `{}`", meta.type_path());

        let prev = self.entries.insert(name.clone(), meta);
        if let Some(prev) = &prev
            && prev.type_id() != meta.type_id()
        {
            log::warn!(
                "registration for `{name}` replaced: `{}` -> `{}`",
                prev.type_path(),
                meta.type_path(),
            );
        }
        prev
    }

    /// Returns the entry for `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&TypeMeta> {
        self.entries.get(name)
    }

    /// Returns the entry for `name`, or an [`UnregisteredType`] error.
    pub fn resolve(&self, name: &str) -> Result<&TypeMeta, UnregisteredType> {
        self.entries.get(name).ok_or_else(|| UnregisteredType {
            name: name.into(),
        })
    }

    /// Returns `true` if `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(name, entry)` pairs, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &TypeMeta)> {
        self.entries.iter().map(|(name, meta)| (name.as_ref(), meta))
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shared [`TypeRegistry`] behind a read-write lock.
///
/// # Example
///
/// ```
/// use sx_reflect::registry::TypeRegistryArc;
///
/// let shared = TypeRegistryArc::default();
/// let writer = shared.clone();
///
/// std::thread::spawn(move || writer.write().register_as::<u8>("byte"))
///     .join()
///     .unwrap();
///
/// assert!(shared.read().contains("byte"));
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    /// The wrapped [`TypeRegistry`].
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Wraps an already populated registry.
    #[inline]
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// Takes a read lock on the underlying [`TypeRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`TypeRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{TypeRegistry, UnregisteredType};
    use crate::interface;
    use crate::registry::TypeMeta;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    interface!(Slot = "test.Slot");

    #[test]
    fn overwrite_returns_previous_entry() {
        let mut registry = TypeRegistry::new();
        registry.register_interface::<Slot, i32>();

        let prev = registry.insert("test.Slot", TypeMeta::of::<String>()).unwrap();
        assert!(prev.type_info().type_is::<i32>());
        assert!(registry.get("test.Slot").unwrap().type_info().type_is::<String>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolve_names_the_missing_type() {
        let registry = TypeRegistry::default();
        let err = registry.resolve("pkg.Missing").unwrap_err();
        assert_eq!(err, UnregisteredType { name: "pkg.Missing".into() });
        assert_eq!(
            err.to_string(),
            "no concrete type registered for `pkg.Missing`"
        );
    }

    #[test]
    fn zero_builds_the_registered_type() {
        let mut registry = TypeRegistry::new();
        registry.register_as::<Vec<u8>>("bytes");
        let zero = registry.resolve("bytes").unwrap().zero();
        assert_eq!(zero.take::<Vec<u8>>().unwrap(), Vec::<u8>::new());
    }
}
