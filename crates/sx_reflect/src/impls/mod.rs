//! Reflection implementations for std types, and helpers for implementing
//! [`Typed`](crate::info::Typed) by hand.
//!
//! - Scalars: integers, floats, `bool`, `char`, `String`, `()` and
//!   [`Complex`](crate::complex::Complex).
//! - Containers: `[T; N]`, `Vec<T>`, `HashMap<K, V, S>`, `BTreeMap<K, V>`,
//!   `Option<T>` and [`Poly<I>`](crate::ops::Poly).
//! - Opaque: function pointers and `mpsc` senders.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod collections;
mod debug;
mod eq;
mod poly;
mod primitives;
mod unsupported;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
pub use debug::reflect_debug;
pub use eq::reflect_eq;
