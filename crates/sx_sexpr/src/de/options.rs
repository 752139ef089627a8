/// Handling of record keys that match neither a field name nor an alias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownFields {
    /// Skip the value and continue.
    #[default]
    Ignore,
    /// Fail with [`DecodeErrorKind::UnknownField`](crate::DecodeErrorKind::UnknownField).
    Deny,
}

/// Options of a [`Decoder`](super::Decoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    pub unknown_fields: UnknownFields,
}

impl DecodeOptions {
    /// Options rejecting unknown record keys.
    #[inline]
    pub const fn strict() -> Self {
        Self {
            unknown_fields: UnknownFields::Deny,
        }
    }
}
