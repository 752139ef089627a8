//! Compile-time type information.
//!
//! - [`TypePath`]: type path and ident, [`DynamicTypePath`] for dynamic dispatch.
//! - [`Type`]: a `TypeId` plus the `TypePath` accessors.
//! - [`TypeInfo`]: one variant per [`ReflectKind`]:
//!     - [`ScalarInfo`]: atoms such as `bool`, `i32`, `f64`, `String`, with a [`ScalarKind`].
//!     - [`ArrayInfo`]: fixed-length arrays, with item info and length.
//!     - [`ListInfo`]: growable sequences such as `Vec<T>`.
//!     - [`MapInfo`]: `HashMap` and `BTreeMap`, with key and value info.
//!     - [`StructInfo`]: named structs, with [`NamedField`]s and alias resolution.
//!     - [`OptionInfo`]: `Option<T>`.
//!     - [`InterfaceInfo`]: polymorphic slots, with the interface name.
//!     - [`OpaqueInfo`]: values without a textual form.
//! - [`Typed`]: static access to `TypeInfo`, [`DynamicTyped`] for dynamic dispatch.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod interface_info;
mod list_info;
mod map_info;
mod opaque_info;
mod option_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::NamedField;
pub use interface_info::InterfaceInfo;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use option_info::OptionInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
