use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use sx_reflect::Reflect;
use sx_reflect::ops::{Map, Polymorphic, ReflectRef};
use sx_reflect::ops::{Scalar, ScalarValue, Struct};

use super::{EncodeOptions, Layout};
use crate::EncodeError;

// -----------------------------------------------------------------------------
// Encoder

/// Writes reflected values as S-expressions.
///
/// # Encoding Rules
///
/// | value | text |
/// |---|---|
/// | `()`, `None`, `false` | `nil` |
/// | `true` | `t` |
/// | integers | decimal digits |
/// | floats | four fractional digits, `1.5000` |
/// | complex | `#C(1.0000 2.0000)` |
/// | `String`, `char` | quoted, with `\"`, `\\`, `\n`, `\r`, `\t`, `\0` and `\u{..}` escapes |
/// | arrays, lists | `(e1 e2 ...)` |
/// | maps | `((k1 v1) (k2 v2) ...)`, sorted by the text of the keys |
/// | structs | `((key value) ...)`, the key is the field alias if declared |
/// | [`Poly`] | `("interface.Name" value)` |
///
/// Opaque values fail with [`EncodeError::UnsupportedType`], and NaN or
/// infinite floats with [`EncodeError::NonFiniteFloat`].
///
/// # Examples
///
/// ```
/// use sx_reflect::derive::Reflect;
/// use sx_sexpr::ser::Encoder;
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     x: f32,
///     #[reflect(alias = "Y")]
///     y: f32,
/// }
///
/// let text = Encoder::new().encode(&Point { x: 1.0, y: -0.5 }).unwrap();
/// assert_eq!(text, "((x 1.0000) (Y -0.5000))");
/// ```
///
/// [`Poly`]: sx_reflect::ops::Poly
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Creates an encoder with the [`Pretty`](Layout::Pretty) layout.
    #[inline]
    pub const fn new() -> Self {
        Self {
            options: EncodeOptions {
                layout: Layout::Pretty,
            },
        }
    }

    #[inline]
    pub const fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub const fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes `value` into a new string.
    pub fn encode(&self, value: &dyn Reflect) -> Result<String, EncodeError> {
        let mut out = String::new();
        self.encode_to(value, &mut out)?;
        Ok(out)
    }

    /// Appends the encoding of `value` to `out`.
    ///
    /// Continuation lines are aligned relative to the text already in `out`.
    /// On error, `out` may hold a partial encoding.
    pub fn encode_to(&self, value: &dyn Reflect, out: &mut String) -> Result<(), EncodeError> {
        let line_start = out.rfind('\n').map_or(0, |i| i + 1);
        let column = out[line_start..].chars().count();
        Writer {
            out,
            layout: self.options.layout,
            column,
        }
        .write_value(value)
    }
}

// -----------------------------------------------------------------------------
// Writer

struct Writer<'o> {
    out: &'o mut String,
    layout: Layout,
    /// Chars written since the last newline.
    column: usize,
}

impl Writer<'_> {
    fn write_value(&mut self, value: &dyn Reflect) -> Result<(), EncodeError> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => self.write_scalar(scalar),
            ReflectRef::Array(array) => self.write_sequence(array.iter()),
            ReflectRef::List(list) => self.write_sequence(list.iter()),
            ReflectRef::Map(map) => self.write_map(map),
            ReflectRef::Struct(record) => self.write_struct(record),
            ReflectRef::Option(option) => match option.value() {
                Some(inner) => self.write_value(inner),
                None => {
                    self.push_str("nil");
                    Ok(())
                }
            },
            ReflectRef::Interface(poly) => self.write_poly(poly),
            ReflectRef::Opaque(_) => Err(EncodeError::UnsupportedType {
                type_path: value.reflect_type_path(),
            }),
        }
    }

    fn write_scalar(&mut self, scalar: &dyn Scalar) -> Result<(), EncodeError> {
        let non_finite = || EncodeError::NonFiniteFloat {
            type_path: scalar.reflect_type_path(),
        };

        match scalar.to_scalar() {
            ScalarValue::Nil | ScalarValue::Bool(false) => self.push_str("nil"),
            ScalarValue::Bool(true) => self.push('t'),
            ScalarValue::Int(v) => self.write_args(format_args!("{v}")),
            ScalarValue::UInt(v) => self.write_args(format_args!("{v}")),
            ScalarValue::Float(v) => {
                if !v.is_finite() {
                    return Err(non_finite());
                }
                self.write_args(format_args!("{v:.4}"));
            }
            ScalarValue::Complex(re, im) => {
                if !re.is_finite() || !im.is_finite() {
                    return Err(non_finite());
                }
                self.write_args(format_args!("#C({re:.4} {im:.4})"));
            }
            ScalarValue::Text(text) => self.write_quoted(&text),
        }
        Ok(())
    }

    fn write_sequence<'v>(
        &mut self,
        items: impl Iterator<Item = &'v dyn Reflect>,
    ) -> Result<(), EncodeError> {
        self.push('(');
        let indent = self.column;
        for (index, item) in items.enumerate() {
            if index > 0 {
                self.separator(indent);
            }
            self.write_value(item)?;
        }
        self.push(')');
        Ok(())
    }

    fn write_map(&mut self, map: &dyn Map) -> Result<(), EncodeError> {
        // Keys are rendered on their own first, so entries can be ordered by
        // their text independently of the map's iteration order.
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map.iter() {
            let mut key_text = String::new();
            Writer {
                out: &mut key_text,
                layout: Layout::Compact,
                column: 0,
            }
            .write_value(key)?;
            entries.push((key_text, value));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        self.push('(');
        let indent = self.column;
        for (index, (key_text, value)) in entries.into_iter().enumerate() {
            if index > 0 {
                self.separator(indent);
            }
            self.push('(');
            self.push_str(&key_text);
            self.push(' ');
            self.write_value(value)?;
            self.push(')');
        }
        self.push(')');
        Ok(())
    }

    fn write_struct(&mut self, record: &dyn Struct) -> Result<(), EncodeError> {
        let info = record.struct_info();

        self.push('(');
        for (index, (name, value)) in record.iter_fields().enumerate() {
            if index > 0 {
                self.push(' ');
            }
            let key = info
                .and_then(|info| info.field_at(index))
                .map_or(name, |field| field.key());
            self.push('(');
            self.push_str(key);
            self.push(' ');
            self.write_value(value)?;
            self.push(')');
        }
        self.push(')');
        Ok(())
    }

    fn write_poly(&mut self, poly: &dyn Polymorphic) -> Result<(), EncodeError> {
        self.push('(');
        self.write_quoted(poly.interface_name());
        self.push(' ');
        match poly.value() {
            Some(inner) => self.write_value(inner)?,
            None => self.push_str("nil"),
        }
        self.push(')');
        Ok(())
    }

    fn separator(&mut self, indent: usize) {
        match self.layout {
            Layout::Pretty => {
                self.out.push('\n');
                self.out.extend(core::iter::repeat_n(' ', indent));
                self.column = indent;
            }
            Layout::Compact => self.push(' '),
        }
    }

    // -------------------------------------------------------------------------
    // Output

    // Apart from `separator`, nothing writes a newline: strings escape theirs.

    #[inline]
    fn push(&mut self, ch: char) {
        self.out.push(ch);
        self.column += 1;
    }

    #[inline]
    fn push_str(&mut self, text: &str) {
        self.out.push_str(text);
        self.column += text.chars().count();
    }

    fn write_args(&mut self, args: core::fmt::Arguments<'_>) {
        let start = self.out.len();
        // Writing into a `String` cannot fail.
        let _ = self.out.write_fmt(args);
        self.column += self.out[start..].chars().count();
    }

    /// Writes `text` as a double-quoted string literal.
    fn write_quoted(&mut self, text: &str) {
        let start = self.out.len();
        let out = &mut *self.out;
        out.push('"');
        for ch in text.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\0' => out.push_str("\\0"),
                c if c.is_control() => {
                    let _ = write!(out, "\\u{{{:x}}}", c as u32);
                }
                c => out.push(c),
            }
        }
        out.push('"');
        self.column += self.out[start..].chars().count();
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use sx_reflect::complex::Complex64;
    use sx_reflect::derive::Reflect;
    use sx_reflect::interface;
    use sx_reflect::ops::Poly;

    use super::{EncodeOptions, Encoder};
    use crate::EncodeError;

    interface!(Shape = "demo.Shape");

    fn pretty(value: &dyn sx_reflect::Reflect) -> String {
        Encoder::new().encode(value).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(pretty(&true), "t");
        assert_eq!(pretty(&false), "nil");
        assert_eq!(pretty(&()), "nil");
        assert_eq!(pretty(&-42_i64), "-42");
        assert_eq!(pretty(&u128::MAX), "340282366920938463463374607431768211455");
        assert_eq!(pretty(&1.5_f64), "1.5000");
        assert_eq!(pretty(&0.0_f32), "0.0000");
        assert_eq!(pretty(&Complex64::new(1.0, -2.25)), "#C(1.0000 -2.2500)");
        assert_eq!(pretty(&'x'), "\"x\"");
    }

    #[test]
    fn string_escapes() {
        let text = String::from("a\"b\\c\nd\te\u{1b}");
        assert_eq!(pretty(&text), r#""a\"b\\c\nd\te\u{1b}""#);
    }

    #[test]
    fn non_finite_floats_fail() {
        assert_eq!(
            Encoder::new().encode(&f64::NAN),
            Err(EncodeError::NonFiniteFloat { type_path: "f64" })
        );
        assert!(Encoder::new().encode(&vec![1.0_f32, f32::INFINITY]).is_err());
    }

    #[test]
    fn sequences_align_after_the_paren() {
        assert_eq!(pretty(&vec![1_u8, 2, 3]), "(1\n 2\n 3)");
        assert_eq!(pretty(&Vec::<u8>::new()), "()");
        assert_eq!(pretty(&[vec![1_u8, 2], vec![3]]), "((1\n  2)\n (3))");
    }

    #[test]
    fn compact_layout() {
        let encoder = Encoder::new().with_options(EncodeOptions::compact());
        assert_eq!(encoder.encode(&[vec![1_u8, 2], vec![3]]).unwrap(), "((1 2) (3))");
    }

    #[test]
    fn alignment_counts_chars_and_existing_text() {
        let words = [vec![String::from("é"), String::from("ü")], vec![]];
        assert_eq!(pretty(&words), "((\"é\"\n  \"ü\")\n ())");

        let mut out = String::from("first line\nkey: ");
        Encoder::new().encode_to(&vec![1_u8, 2], &mut out).unwrap();
        assert_eq!(out, "first line\nkey: (1\n      2)");
    }

    #[test]
    fn long_single_line_output() {
        let nested = vec![vec![1_u8]; 50_000];
        let encoder = Encoder::new().with_options(EncodeOptions::compact());
        let text = encoder.encode(&nested).unwrap();
        assert_eq!(text.len(), 2 + 50_000 * 4 - 1);
        assert!(text.starts_with("((1) (1)"));
    }

    #[test]
    fn maps_are_sorted_by_key_text() {
        let mut map = HashMap::new();
        map.insert(String::from("b"), 2_u8);
        map.insert(String::from("a"), 1);
        map.insert(String::from("c"), 3);
        assert_eq!(pretty(&map), "((\"a\" 1)\n (\"b\" 2)\n (\"c\" 3))");

        // Ordering follows the text, not the numeric value.
        let tree = BTreeMap::from([(10_u8, ()), (9, ())]);
        let encoder = Encoder::new().with_options(EncodeOptions::compact());
        assert_eq!(encoder.encode(&tree).unwrap(), "((10 nil) (9 nil))");
    }

    #[derive(Reflect, Default)]
    struct Labeled {
        #[reflect(alias = "tags")]
        labels: Vec<String>,
        weight: Option<u32>,
    }

    #[test]
    fn struct_fields_stay_on_one_line() {
        let value = Labeled {
            labels: vec!["x".into(), "y".into()],
            weight: None,
        };
        assert_eq!(pretty(&value), "((tags (\"x\"\n        \"y\")) (weight nil))");

        let value = Labeled {
            labels: vec![],
            weight: Some(3),
        };
        assert_eq!(pretty(&value), "((tags ()) (weight 3))");
    }

    #[test]
    fn polymorphic_values_carry_the_interface_name() {
        let shape = Poly::<Shape>::new(5_i32);
        assert_eq!(pretty(&shape), "(\"demo.Shape\" 5)");
        assert_eq!(pretty(&Poly::<Shape>::none()), "(\"demo.Shape\" nil)");
    }

    #[test]
    fn opaque_values_are_unsupported() {
        let value: fn() -> u8 = || 1;
        assert!(matches!(
            Encoder::new().encode(&value),
            Err(EncodeError::UnsupportedType { .. })
        ));
    }
}
