// -----------------------------------------------------------------------------
// Modules

mod reflect;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use reflect::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Exports

pub use reflect::Reflect;
