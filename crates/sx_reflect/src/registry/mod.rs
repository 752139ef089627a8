//! Type registry for resolving discriminant names at runtime.
//!
//! - [`TypeMeta`]: a [`TypeInfo`](crate::info::TypeInfo) plus a zero-value constructor.
//! - [`TypeRegistry`]: discriminant name to [`TypeMeta`].
//! - [`TypeRegistryArc`]: a [`TypeRegistry`] shared behind a read-write lock.

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::TypeMeta;
pub use type_registry::{TypeRegistry, TypeRegistryArc, UnregisteredType};
