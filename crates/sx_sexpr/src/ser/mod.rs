//! Writing reflected values as S-expressions.

// -----------------------------------------------------------------------------
// Modules

mod encoder;
mod options;

// -----------------------------------------------------------------------------
// Exports

pub use encoder::Encoder;
pub use options::{EncodeOptions, Layout};
