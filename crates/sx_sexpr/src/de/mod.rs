//! Reading S-expressions into reflected values.

// -----------------------------------------------------------------------------
// Modules

mod decoder;
mod lexer;
mod options;

// -----------------------------------------------------------------------------
// Exports

pub use decoder::Decoder;
pub use lexer::{LexError, Lexer, Position, Token, TokenKind};
pub use options::{DecodeOptions, UnknownFields};
