//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] for non-generic types.
//! - [`GenericTypeInfoCell`]: for generic types. The `static CELL` inside a
//!   generic function is shared by every instantiation, so the cell keys the
//!   stored info by [`TypeId`] behind a [`RwLock`].

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::info::TypeInfo;

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use sx_reflect::{
///     info::{Typed, TypeInfo, TypePath, OpaqueInfo},
///     impls::NonGenericTypeInfoCell,
/// };
/// # use sx_reflect::{Reflect, ops::{ReflectRef, ReflectMut}};
///
/// struct Handle;
/// # impl TypePath for Handle {
/// #     fn type_path() -> &'static str { "demo::Handle" }
/// #     fn type_ident() -> &'static str { "Handle" }
/// # }
/// # impl Reflect for Handle {
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Opaque(self) }
/// # }
///
/// impl Typed for Handle {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(Handle::type_info().type_ident(), "Handle");
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use sx_reflect::{
///     Reflect,
///     info::{Typed, TypeInfo, TypePath, OpaqueInfo},
///     impls::GenericTypeInfoCell,
/// };
/// # use sx_reflect::ops::{ReflectRef, ReflectMut};
///
/// struct Tagged<T>(T);
/// # impl<T: Send + Sync + 'static> TypePath for Tagged<T> {
/// #     fn type_path() -> &'static str { core::any::type_name::<Self>() }
/// #     fn type_ident() -> &'static str { "Tagged" }
/// # }
/// # impl<T: Send + Sync + 'static> Reflect for Tagged<T> {
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Opaque(self) }
/// # }
///
/// impl<T: Send + Sync + 'static> Typed for Tagged<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(<Tagged<u8>>::type_info().type_is::<Tagged<u8>>());
/// assert!(<Tagged<i8>>::type_info().type_is::<Tagged<i8>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<BTreeMap<TypeId, &'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(BTreeMap::new()))
    }

    /// Returns the info stored for `G`, building it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            // `f` may recurse into this cell for nested generic types, so it
            // runs without holding the lock.
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        let mut table = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *table
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}

impl Default for GenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
