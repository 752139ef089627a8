#![allow(clippy::unnecessary_cast, reason = "the macros also cover the widest types")]

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use crate::Reflect;
use crate::complex::Complex;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{Scalar, ScalarError, ScalarValue};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Helpers

#[inline(never)]
fn mismatch(expected: ScalarKind, value: &ScalarValue<'_>) -> ScalarError {
    ScalarError::Mismatch {
        expected,
        found: value.describe(),
    }
}

#[inline(never)]
fn out_of_range<T: TypePath>(value: impl ToString) -> ScalarError {
    ScalarError::OutOfRange {
        type_path: T::type_path(),
        value: value.to_string(),
    }
}

/// Rejects a float that became infinite or NaN when narrowed from `source`.
#[inline]
fn finite<T: TypePath, F: Copy + Into<f64>>(narrowed: F, source: impl ToString) -> Result<F, ScalarError> {
    if narrowed.into().is_finite() {
        Ok(narrowed)
    } else {
        Err(out_of_range::<T>(source))
    }
}

/// `TypePath`, `Typed` and `Reflect` for a non-generic scalar type.
macro_rules! impl_scalar_type {
    ($ty:ty, $path:expr, $ident:expr, $kind:ident) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Scalar);
        }
    };
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    (signed: $($ty:ident),*) => {$(
        impl_scalar_type!($ty, stringify!($ty), stringify!($ty), Int);

        impl Scalar for $ty {
            #[inline]
            fn scalar_kind(&self) -> ScalarKind {
                ScalarKind::Int
            }

            #[inline]
            fn to_scalar(&self) -> ScalarValue<'_> {
                ScalarValue::Int(*self as i128)
            }

            fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
                *self = match value {
                    ScalarValue::Nil => 0,
                    ScalarValue::Int(v) => <$ty>::try_from(v).map_err(|_| out_of_range::<Self>(v))?,
                    ScalarValue::UInt(v) => <$ty>::try_from(v).map_err(|_| out_of_range::<Self>(v))?,
                    other => return Err(mismatch(ScalarKind::Int, &other)),
                };
                Ok(())
            }
        }
    )*};
    (unsigned: $($ty:ident),*) => {$(
        impl_scalar_type!($ty, stringify!($ty), stringify!($ty), UInt);

        impl Scalar for $ty {
            #[inline]
            fn scalar_kind(&self) -> ScalarKind {
                ScalarKind::UInt
            }

            #[inline]
            fn to_scalar(&self) -> ScalarValue<'_> {
                ScalarValue::UInt(*self as u128)
            }

            fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
                *self = match value {
                    ScalarValue::Nil => 0,
                    ScalarValue::Int(v) => <$ty>::try_from(v).map_err(|_| out_of_range::<Self>(v))?,
                    ScalarValue::UInt(v) => <$ty>::try_from(v).map_err(|_| out_of_range::<Self>(v))?,
                    other => return Err(mismatch(ScalarKind::UInt, &other)),
                };
                Ok(())
            }
        }
    )*};
}

impl_integer!(signed: i8, i16, i32, i64, i128, isize);
impl_integer!(unsigned: u8, u16, u32, u64, u128, usize);

// -----------------------------------------------------------------------------
// Floats

macro_rules! impl_float {
    ($($ty:ident),*) => {$(
        impl_scalar_type!($ty, stringify!($ty), stringify!($ty), Float);

        impl Scalar for $ty {
            #[inline]
            fn scalar_kind(&self) -> ScalarKind {
                ScalarKind::Float
            }

            #[inline]
            fn to_scalar(&self) -> ScalarValue<'_> {
                ScalarValue::Float(*self as f64)
            }

            fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
                *self = match value {
                    ScalarValue::Nil => 0.0,
                    ScalarValue::Float(v) => finite::<Self, _>(v as $ty, v)?,
                    ScalarValue::Int(v) => finite::<Self, _>(v as $ty, v)?,
                    ScalarValue::UInt(v) => finite::<Self, _>(v as $ty, v)?,
                    other => return Err(mismatch(ScalarKind::Float, &other)),
                };
                Ok(())
            }
        }
    )*};
}

impl_float!(f32, f64);

// -----------------------------------------------------------------------------
// Complex

macro_rules! impl_complex {
    ($($part:ident),*) => {$(
        impl_scalar_type!(
            Complex<$part>,
            concat!("sx_reflect::complex::Complex<", stringify!($part), ">"),
            "Complex",
            Complex
        );

        impl Scalar for Complex<$part> {
            #[inline]
            fn scalar_kind(&self) -> ScalarKind {
                ScalarKind::Complex
            }

            #[inline]
            fn to_scalar(&self) -> ScalarValue<'_> {
                ScalarValue::Complex(self.re as f64, self.im as f64)
            }

            fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
                *self = match value {
                    ScalarValue::Nil => Complex::default(),
                    ScalarValue::Complex(re, im) => Complex::new(
                        finite::<Self, _>(re as $part, re)?,
                        finite::<Self, _>(im as $part, im)?,
                    ),
                    other => return Err(mismatch(ScalarKind::Complex, &other)),
                };
                Ok(())
            }
        }
    )*};
}

impl_complex!(f32, f64);

// -----------------------------------------------------------------------------
// Others

impl_scalar_type!((), "()", "()", Unit);

impl Scalar for () {
    #[inline]
    fn scalar_kind(&self) -> ScalarKind {
        ScalarKind::Unit
    }

    #[inline]
    fn to_scalar(&self) -> ScalarValue<'_> {
        ScalarValue::Nil
    }

    fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarValue::Nil => Ok(()),
            other => Err(mismatch(ScalarKind::Unit, &other)),
        }
    }
}

impl_scalar_type!(bool, "bool", "bool", Bool);

impl Scalar for bool {
    #[inline]
    fn scalar_kind(&self) -> ScalarKind {
        ScalarKind::Bool
    }

    #[inline]
    fn to_scalar(&self) -> ScalarValue<'_> {
        ScalarValue::Bool(*self)
    }

    fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
        *self = match value {
            ScalarValue::Nil => false,
            ScalarValue::Bool(v) => v,
            other => return Err(mismatch(ScalarKind::Bool, &other)),
        };
        Ok(())
    }
}

impl_scalar_type!(String, "alloc::string::String", "String", Text);

impl Scalar for String {
    #[inline]
    fn scalar_kind(&self) -> ScalarKind {
        ScalarKind::Text
    }

    #[inline]
    fn to_scalar(&self) -> ScalarValue<'_> {
        ScalarValue::Text(Cow::Borrowed(self))
    }

    fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarValue::Nil => self.clear(),
            ScalarValue::Text(v) => *self = v.into_owned(),
            other => return Err(mismatch(ScalarKind::Text, &other)),
        }
        Ok(())
    }
}

impl_scalar_type!(char, "char", "char", Char);

impl Scalar for char {
    #[inline]
    fn scalar_kind(&self) -> ScalarKind {
        ScalarKind::Char
    }

    #[inline]
    fn to_scalar(&self) -> ScalarValue<'_> {
        ScalarValue::Text(Cow::Owned(self.to_string()))
    }

    fn set_scalar(&mut self, value: ScalarValue<'_>) -> Result<(), ScalarError> {
        *self = match value {
            ScalarValue::Nil => '\0',
            ScalarValue::Text(v) => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(out_of_range::<Self>(format_args!("{v:?}"))),
                }
            }
            other => return Err(mismatch(ScalarKind::Char, &other)),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::Complex64;
    use crate::info::{ScalarKind, Typed};
    use crate::ops::{Scalar, ScalarError, ScalarValue};
    use alloc::borrow::Cow;
    use alloc::string::String;

    #[test]
    fn integers_are_range_checked() {
        let mut value = 0_i8;
        assert!(value.set_scalar(ScalarValue::Int(-128)).is_ok());
        assert_eq!(value, -128);

        let err = value.set_scalar(ScalarValue::Int(128)).unwrap_err();
        assert_eq!(
            err,
            ScalarError::OutOfRange {
                type_path: "i8",
                value: "128".into(),
            }
        );
        assert_eq!(value, -128);
    }

    #[test]
    fn integers_widen_into_floats() {
        let mut value = 1.5_f32;
        value.set_scalar(ScalarValue::Int(-3)).unwrap();
        assert_eq!(value, -3.0);
        assert!(matches!(
            value.set_scalar(ScalarValue::Bool(true)),
            Err(ScalarError::Mismatch { expected: ScalarKind::Float, found: "boolean" })
        ));
    }

    #[test]
    fn floats_must_stay_finite() {
        let mut value = 1.5_f32;
        let err = value.set_scalar(ScalarValue::Float(1e39)).unwrap_err();
        assert!(matches!(err, ScalarError::OutOfRange { type_path: "f32", .. }));
        assert!(value.set_scalar(ScalarValue::UInt(u128::MAX)).is_err());
        assert_eq!(value, 1.5);

        let mut wide = 0.0_f64;
        wide.set_scalar(ScalarValue::Float(1e39)).unwrap();
        assert_eq!(wide, 1e39);
        assert!(wide.set_scalar(ScalarValue::Float(f64::INFINITY)).is_err());

        let mut z = crate::complex::Complex32::default();
        assert!(z.set_scalar(ScalarValue::Complex(1.0, -1e40)).is_err());
        assert_eq!(z, crate::complex::Complex32::default());
    }

    #[test]
    fn nil_resets_to_zero() {
        let mut text = String::from("abc");
        text.set_scalar(ScalarValue::Nil).unwrap();
        assert!(text.is_empty());

        let mut z = Complex64::new(1.0, 2.0);
        z.set_scalar(ScalarValue::Nil).unwrap();
        assert_eq!(z, Complex64::default());
    }

    #[test]
    fn char_needs_exactly_one_char() {
        let mut c = 'a';
        c.set_scalar(ScalarValue::Text(Cow::Borrowed("z"))).unwrap();
        assert_eq!(c, 'z');
        assert!(c.set_scalar(ScalarValue::Text(Cow::Borrowed("zz"))).is_err());
        assert!(c.set_scalar(ScalarValue::Text(Cow::Borrowed(""))).is_err());
    }

    #[test]
    fn complex_type_path() {
        assert_eq!(
            Complex64::type_info().type_path(),
            "sx_reflect::complex::Complex<f64>"
        );
    }
}
