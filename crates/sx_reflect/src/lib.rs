//! Runtime reflection over the structural shape of values.
//!
//! Every reflected type belongs to exactly one [`ReflectKind`](info::ReflectKind):
//! scalars, fixed arrays, growable lists, maps, named structs, options,
//! polymorphic interface slots, or opaque values that cannot be inspected.
//!
//! - [`Reflect`]: the object-safe entry point, dispatching to the per-kind
//!   access traits in [`ops`] via [`ReflectRef`](ops::ReflectRef) and
//!   [`ReflectMut`](ops::ReflectMut).
//! - [`info`]: static type descriptors ([`TypeInfo`](info::TypeInfo)), computed
//!   once per type on first access.
//! - [`registry`]: the [`TypeRegistry`](registry::TypeRegistry) mapping
//!   discriminant names to concrete types, used to resolve polymorphic values.
//! - [`derive::Reflect`]: derive macro for named structs.
//!
//! # Example
//!
//! ```
//! use sx_reflect::{Reflect, derive::Reflect, info::{Typed, ReflectKind}};
//!
//! #[derive(Reflect, Default)]
//! struct Movie {
//!     #[reflect(alias = "title")]
//!     name: String,
//!     year: i32,
//! }
//!
//! let info = Movie::type_info().as_struct().unwrap();
//! assert_eq!(info.field_at(0).unwrap().key(), "title");
//! assert_eq!(info.index_of_key("year"), Some(1));
//!
//! let movie = Movie::default();
//! assert_eq!(movie.reflect_kind(), ReflectKind::Struct);
//! ```

#![no_std]

// Derived code refers to `::sx_reflect`, which must also resolve inside this crate.
extern crate self as sx_reflect;

// Type info cells, `HashMap` impls and channel senders need `std`.
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod complex;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;
pub use sx_reflect_derive as derive;
