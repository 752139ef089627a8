/// How nested sequences and maps are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Each element after the first of a sequence or map starts on a new
    /// line, aligned with the column after the opening parenthesis.
    /// Records and polymorphic values stay on one line.
    #[default]
    Pretty,
    /// Elements are separated by a single space.
    Compact,
}

/// Options of an [`Encoder`](super::Encoder).
///
/// # Examples
///
/// ```
/// use sx_sexpr::ser::{EncodeOptions, Encoder, Layout};
///
/// let encoder = Encoder::new().with_options(EncodeOptions::compact());
/// assert_eq!(encoder.options().layout, Layout::Compact);
/// assert_eq!(encoder.encode(&vec![1_u8, 2, 3]).unwrap(), "(1 2 3)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    pub layout: Layout,
}

impl EncodeOptions {
    /// Options writing every value on a single line.
    #[inline]
    pub const fn compact() -> Self {
        Self {
            layout: Layout::Compact,
        }
    }
}
