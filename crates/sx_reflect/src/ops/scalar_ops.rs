use alloc::borrow::Cow;
use alloc::string::String;
use core::{error, fmt};

use crate::Reflect;
use crate::info::ScalarKind;

// -----------------------------------------------------------------------------
// ScalarValue

/// A borrowed view of a scalar, normalized to the widest representation
/// of its flavour.
///
/// Integers widen to `i128`/`u128`, floats to `f64`. A text value borrows
/// from the scalar when it can.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue<'a> {
    /// The zero of any scalar, and the only value of `()`.
    Nil,
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    Complex(f64, f64),
    Text(Cow<'a, str>),
}

impl ScalarValue<'_> {
    /// A short name of the value flavour, for error messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Complex(..) => "complex",
            Self::Text(_) => "string",
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarError

/// Error returned by [`Scalar::set_scalar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The value flavour cannot be stored in the target.
    Mismatch {
        expected: ScalarKind,
        found: &'static str,
    },
    /// The value has the right flavour but does not fit the target type.
    OutOfRange {
        type_path: &'static str,
        value: String,
    },
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch { expected, found } => {
                write!(f, "cannot store a {found} in a {expected} scalar")
            }
            Self::OutOfRange { type_path, value } => {
                write!(f, "value {value} is out of range for `{type_path}`")
            }
        }
    }
}

impl error::Error for ScalarError {}

// -----------------------------------------------------------------------------
// Scalar

/// A value written as a single atom.
///
/// # Examples
///
/// ```
/// use sx_reflect::ops::{Scalar, ScalarValue};
///
/// let mut value = 0_u8;
/// value.set_scalar(ScalarValue::Int(7)).unwrap();
/// assert_eq!(value, 7);
///
/// assert!(value.set_scalar(ScalarValue::Int(-1)).is_err());
/// assert!(value.set_scalar(ScalarValue::Bool(true)).is_err());
///
/// value.set_scalar(ScalarValue::Nil).unwrap();
/// assert_eq!(value.to_scalar(), ScalarValue::UInt(0));
/// ```
pub trait Scalar: Reflect {
    /// Returns the flavour of this scalar.
    fn scalar_kind(&self) -> ScalarKind;

    /// Returns a view of the current value.
    fn to_scalar(&self) -> ScalarValue<'_>;

    /// Stores `value` into `self`.
    ///
    /// [`ScalarValue::Nil`] resets any scalar to its zero value. Integers are
    /// range checked, and may also be stored in float scalars.
    fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError>;
}
