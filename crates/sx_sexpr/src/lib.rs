//! A reflection-driven codec between values and S-expressions.
//!
//! Any value implementing [`Reflect`] can be written as text, and read back
//! into a value of the same type. The structure of the value decides the
//! shape of the text; nothing is written per type.
//!
//! - [`to_string`], [`to_vec`]: write a value with the default [`Encoder`].
//! - [`unmarshal`], [`from_str`]: read a value, leaving the target untouched
//!   on failure.
//! - [`Decoder::decode_into`]: read in place.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use sx_reflect::{derive::Reflect, registry::TypeRegistry};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Movie {
//!     #[reflect(alias = "title")]
//!     name: String,
//!     year: i32,
//!     cast: HashMap<String, String>,
//!     sequel: Option<String>,
//! }
//!
//! let movie = Movie {
//!     name: "Dr. Strangelove".into(),
//!     year: 1964,
//!     cast: HashMap::from([
//!         ("Dr. Strangelove".into(), "Peter Sellers".into()),
//!         ("Gen. Buck Turgidson".into(), "George C. Scott".into()),
//!     ]),
//!     sequel: None,
//! };
//!
//! let text = sx_sexpr::to_string(&movie).unwrap();
//! assert!(text.starts_with(r#"((title "Dr. Strangelove") (year 1964) (cast (("#));
//!
//! let registry = TypeRegistry::new();
//! let decoded: Movie = sx_sexpr::from_str(&text, &registry).unwrap();
//! assert_eq!(decoded, movie);
//! ```
//!
//! # Polymorphic Values
//!
//! A [`Poly<I>`](sx_reflect::ops::Poly) holds a value of any type. It is
//! written as `("name" value)`, where `name` is [`Interface::NAME`] of `I`.
//! Reading one requires a concrete type registered under that name.
//!
//! ```
//! use sx_reflect::{interface, ops::Poly, registry::TypeRegistry};
//!
//! interface!(Shape = "geo.Shape");
//!
//! let text = sx_sexpr::to_string(&Poly::<Shape>::new(2.5_f64)).unwrap();
//! assert_eq!(text, r#"("geo.Shape" 2.5000)"#);
//!
//! let mut registry = TypeRegistry::new();
//! registry.register_interface::<Shape, f64>();
//!
//! let shape: Poly<Shape> = sx_sexpr::from_str(&text, &registry).unwrap();
//! assert_eq!(shape.downcast_ref::<f64>(), Some(&2.5));
//! ```
//!
//! [`Interface::NAME`]: sx_reflect::ops::Interface::NAME

#![no_std]

#[cfg(test)]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod de;
pub mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::Decoder;
pub use error::{DecodeError, DecodeErrorKind, EncodeError};
pub use ser::Encoder;

use alloc::string::String;
use alloc::vec::Vec;

use sx_reflect::Reflect;
use sx_reflect::registry::TypeRegistry;

use de::Position;

// -----------------------------------------------------------------------------
// Top-level functions

/// Encodes `value` with the default [`Encoder`].
#[inline]
pub fn to_string(value: &dyn Reflect) -> Result<String, EncodeError> {
    Encoder::new().encode(value)
}

/// Encodes `value` with the default [`Encoder`], as UTF-8 bytes.
#[inline]
pub fn to_vec(value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
    to_string(value).map(String::into_bytes)
}

/// Decodes `input` into a new `T`.
#[inline]
pub fn from_str<T: Reflect + Default>(input: &str, registry: &TypeRegistry) -> Result<T, DecodeError> {
    Decoder::new(registry).decode(input)
}

/// Decodes the UTF-8 `input` into `target`.
///
/// The value is read into a fresh `T::default()` and moved into `target`
/// only on success, so `target` is unchanged when an error is returned.
pub fn unmarshal<T: Reflect + Default>(
    input: &[u8],
    target: &mut T,
    registry: &TypeRegistry,
) -> Result<(), DecodeError> {
    let text = core::str::from_utf8(input).map_err(|err| {
        let valid = core::str::from_utf8(&input[..err.valid_up_to()]).unwrap_or_default();
        DecodeError::new(
            Position::after(valid),
            target.reflect_type_path(),
            DecodeErrorKind::InvalidUtf8,
        )
    })?;

    *target = from_str(text, registry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use sx_reflect::complex::{Complex32, Complex64};
    use sx_reflect::derive::Reflect;
    use sx_reflect::interface;
    use sx_reflect::ops::Poly;
    use sx_reflect::registry::TypeRegistry;

    use crate::{DecodeErrorKind, from_str, to_string, unmarshal};

    interface!(Any = "sexpr.Interface");

    #[allow(non_snake_case, reason = "field names are part of the wire format")]
    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Record {
        B: bool,
        F32: f32,
        #[reflect(alias = "f64")]
        F64: f64,
        C64: Complex32,
        C128: Complex64,
        #[reflect(alias = "i")]
        I: Poly<Any>,
    }

    #[allow(non_snake_case, reason = "field names are part of the wire format")]
    #[derive(Reflect, Default, Debug, PartialEq)]
    struct AliasedRecord {
        B: bool,
        #[reflect(alias = "f_32")]
        F32: f32,
        F64: f64,
        #[reflect(alias = "c_64")]
        C64: Complex32,
        C128: Complex64,
        #[reflect(alias = "i")]
        I: Poly<Any>,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register_interface::<Any, i32>();
        registry
    }

    #[test]
    fn record_golden_strings() {
        let record = Record {
            B: true,
            F32: 2.5,
            F64: 0.0,
            C64: Complex32::new(1.0, 2.0),
            C128: Complex64::new(2.0, 3.0),
            I: Poly::new(5_i32),
        };
        assert_eq!(
            to_string(&record).unwrap(),
            r#"((B t) (F32 2.5000) (f64 0.0000) (C64 #C(1.0000 2.0000)) (C128 #C(2.0000 3.0000)) (i ("sexpr.Interface" 5)))"#
        );

        let record = Record {
            B: false,
            F32: 0.0,
            F64: 1.5,
            C64: Complex32::default(),
            C128: Complex64::new(0.0, 1.0),
            I: Poly::new(0_i32),
        };
        assert_eq!(
            to_string(&record).unwrap(),
            r#"((B nil) (F32 0.0000) (f64 1.5000) (C64 #C(0.0000 0.0000)) (C128 #C(0.0000 1.0000)) (i ("sexpr.Interface" 0)))"#
        );
    }

    #[test]
    fn unmarshal_with_aliases() {
        let input = br#"((B t) (f_32 2.5) (F64 0) (c_64 #C(1 2)) (C128 #C(2 3)) (i ("sexpr.Interface" 5)))"#;
        let mut record = AliasedRecord::default();
        unmarshal(input, &mut record, &registry()).unwrap();

        assert!(record.B);
        assert_eq!(record.F32, 2.5);
        assert_eq!(record.F64, 0.0);
        assert_eq!(record.C64, Complex32::new(1.0, 2.0));
        assert_eq!(record.C128, Complex64::new(2.0, 3.0));
        assert_eq!(record.I.downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn unregistered_interface() {
        let input = br#"((i ("sexpr.Interface" 5)))"#;
        let mut record = AliasedRecord::default();
        let err = unmarshal(input, &mut record, &TypeRegistry::new()).unwrap_err();

        assert_eq!(
            err.kind,
            DecodeErrorKind::UnregisteredInterfaceType {
                name: "sexpr.Interface".into()
            }
        );
        assert_eq!(err.position.column, 6);
    }

    #[test]
    fn unmarshal_is_atomic() {
        let mut record = AliasedRecord {
            F64: 9.0,
            ..Default::default()
        };
        let err = unmarshal(b"((F64 1.0) (B 3))", &mut record, &registry()).unwrap_err();

        assert!(matches!(err.kind, DecodeErrorKind::TypeMismatch { .. }));
        assert_eq!(record.F64, 9.0);
    }

    #[test]
    fn unmarshal_rejects_invalid_utf8() {
        let mut text = String::new();
        let err = unmarshal(b"\"ok\n\xff\"", &mut text, &TypeRegistry::new()).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::InvalidUtf8);
        assert_eq!(err.position.line, 2);
        assert_eq!(err.target, "alloc::string::String");
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Movie {
        #[reflect(alias = "title")]
        name: String,
        subtitle: String,
        #[reflect(alias = "year")]
        released: i32,
        actor: HashMap<String, String>,
        oscars: Vec<String>,
        sequel: Option<String>,
        ratings: BTreeMap<u8, Vec<f64>>,
        shape: Poly<Any>,
    }

    fn strangelove() -> Movie {
        Movie {
            name: "Dr. Strangelove".into(),
            subtitle: "How I Learned to Stop Worrying and Love the Bomb".into(),
            released: 1964,
            actor: HashMap::from([
                ("Dr. Strangelove".into(), "Peter Sellers".into()),
                ("Grp. Capt. Lionel Mandrake".into(), "Peter Sellers".into()),
                ("Pres. Merkin Muffley".into(), "Peter Sellers".into()),
                ("Gen. Buck Turgidson".into(), "George C. Scott".into()),
                ("Brig. Gen. Jack D. Ripper".into(), "Sterling Hayden".into()),
                (r#"Maj. T.J. "King" Kong"#.into(), "Slim Pickens".into()),
            ]),
            oscars: vec![
                "Best Actor (Nomin.)".into(),
                "Best Adapted Screenplay (Nomin.)".into(),
                "Best Director (Nomin.)".into(),
                "Best Picture (Nomin.)".into(),
            ],
            sequel: None,
            ratings: BTreeMap::from([(1, vec![0.5, 0.25]), (2, vec![])]),
            shape: Poly::new(-3_i32),
        }
    }

    #[test]
    fn round_trip() {
        let movie = strangelove();
        let text = to_string(&movie).unwrap();
        let decoded: Movie = from_str(&text, &registry()).unwrap();
        assert_eq!(decoded, movie);

        let with_sequel = Movie {
            sequel: Some("None".into()),
            shape: Poly::none(),
            ..strangelove()
        };
        let text = to_string(&with_sequel).unwrap();
        assert_eq!(from_str::<Movie>(&text, &registry()).unwrap(), with_sequel);
    }

    #[test]
    fn map_order_is_deterministic() {
        let first = to_string(&strangelove()).unwrap();
        for _ in 0..8 {
            assert_eq!(to_string(&strangelove()).unwrap(), first);
        }
        let brig = first.find("Brig. Gen.").unwrap();
        let pres = first.find("Pres. Merkin").unwrap();
        assert!(brig < pres);
    }
}
