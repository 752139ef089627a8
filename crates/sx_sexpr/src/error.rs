use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::de::Position;

// -----------------------------------------------------------------------------
// EncodeError

/// Errors produced while writing a value as an S-expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value, or a value nested in it, has no textual form.
    #[error("cannot encode a value of type `{type_path}`")]
    UnsupportedType { type_path: &'static str },
    /// NaN and infinities cannot be written as a four-digit decimal.
    #[error("cannot encode a non-finite float of type `{type_path}`")]
    NonFiniteFloat { type_path: &'static str },
}

// -----------------------------------------------------------------------------
// DecodeError

/// The cause of a [`DecodeError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// The input does not follow the grammar, or a value has an invalid form.
    #[error("{0}")]
    MalformedInput(String),
    /// A polymorphic value names a discriminant missing from the registry.
    #[error("no concrete type registered for interface `{name}`")]
    UnregisteredInterfaceType { name: Box<str> },
    /// The input holds a value of the wrong shape for the target.
    #[error("cannot read {found} into {expected}")]
    TypeMismatch { expected: String, found: String },
    /// The input ended inside a value.
    #[error("unexpected end of input")]
    TruncatedInput,
    /// A record key matches neither a field name nor an alias.
    #[error("unknown field `{key}` in `{type_path}`")]
    UnknownField { key: Box<str>, type_path: &'static str },
    /// The input bytes are not UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}

/// An error raised while reading an S-expression into a value.
///
/// Carries the position of the offending token and the type path of the
/// value being read when the error occurred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error at {position} reading `{target}`: {kind}")]
pub struct DecodeError {
    pub position: Position,
    pub target: &'static str,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    #[inline]
    pub fn new(position: Position, target: &'static str, kind: DecodeErrorKind) -> Self {
        Self {
            position,
            target,
            kind,
        }
    }
}
