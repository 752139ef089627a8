//! Per-kind access to reflected values.
//!
//! Each [`ReflectKind`](crate::info::ReflectKind) has a subtrait of
//! [`Reflect`](crate::Reflect), reached through [`ReflectRef`] and [`ReflectMut`]:
//!
//! - [`Scalar`]: atoms, read and written as a [`ScalarValue`].
//! - [`Array`]: fixed-length arrays.
//! - [`List`]: growable sequences.
//! - [`Map`]: associative containers.
//! - [`Struct`]: named structs.
//! - [`Optional`]: `Option<T>`.
//! - [`Polymorphic`]: slots of an [`Interface`], such as [`Poly`].

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod option_ops;
mod poly_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use array_ops::{Array, ArrayItemIter};
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use option_ops::Optional;
pub use poly_ops::{Interface, Poly, Polymorphic};
pub use scalar_ops::{Scalar, ScalarError, ScalarValue};
pub use struct_ops::{Struct, StructFieldIter};
