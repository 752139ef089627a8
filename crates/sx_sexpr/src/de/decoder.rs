use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};

use sx_reflect::Reflect;
use sx_reflect::info::TypeInfo;
use sx_reflect::ops::{Array, List, Map, Polymorphic, ReflectMut};
use sx_reflect::ops::{ScalarError, ScalarValue, Struct};
use sx_reflect::registry::TypeRegistry;

use super::{DecodeOptions, LexError, Lexer, Position, Token, TokenKind, UnknownFields};
use crate::{DecodeError, DecodeErrorKind};

// -----------------------------------------------------------------------------
// Decoder

/// Reads S-expressions into reflected values.
///
/// The shape of the target drives the reading: the text carries no type
/// information apart from the interface names of polymorphic values, which
/// are resolved through the [`TypeRegistry`].
///
/// # Decoding Rules
///
/// - `nil` resets the target to its zero value.
/// - `t` is `true`; strings, integers, floats and complex literals are
///   stored into scalars of a compatible kind. Integers widen into floats.
/// - A list fills an array positionally, replaces the content of a `Vec`
///   or a map, and sets the named fields of a struct.
/// - `Option` is transparent: anything other than `nil` is read into
///   `Some`.
/// - `("name" value)` reads a polymorphic value of the type registered under
///   `name`.
///
/// # Examples
///
/// ```
/// use sx_reflect::{derive::Reflect, registry::TypeRegistry};
/// use sx_sexpr::de::Decoder;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     #[reflect(alias = "Y")]
///     y: i32,
/// }
///
/// let registry = TypeRegistry::new();
/// let point: Point = Decoder::new(&registry).decode("((Y 2) (x 1))").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r TypeRegistry,
    options: DecodeOptions,
}

impl<'r> Decoder<'r> {
    #[inline]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            options: DecodeOptions::default(),
        }
    }

    #[inline]
    pub const fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Reads `input` into a fresh `T::default()`.
    pub fn decode<T: Reflect + Default>(&self, input: &str) -> Result<T, DecodeError> {
        let mut value = T::default();
        self.decode_into(input, &mut value)?;
        Ok(value)
    }

    /// Reads `input` into `target` in place.
    ///
    /// On error, `target` may be left partially updated. Use [`decode`]
    /// or [`unmarshal`] to keep the target intact on failure.
    ///
    /// [`decode`]: Self::decode
    /// [`unmarshal`]: crate::unmarshal
    pub fn decode_into(&self, input: &str, target: &mut dyn Reflect) -> Result<(), DecodeError> {
        let root = target.reflect_type_path();
        let result = Lexer::new(input)
            .map_err(|err| lex_error(err, root))
            .and_then(|lexer| {
                let mut reader = Reader {
                    lexer,
                    registry: self.registry,
                    options: self.options,
                };
                reader.read(target)?;
                reader.finish(root)
            });

        if let Err(err) = &result {
            log::trace!("failed to decode `{root}`: {err}");
        }
        result
    }
}

// -----------------------------------------------------------------------------
// Reader

/// The state of one decoding call.
struct Reader<'a, 'r> {
    lexer: Lexer<'a>,
    registry: &'r TypeRegistry,
    options: DecodeOptions,
}

impl<'a> Reader<'a, '_> {
    /// Reads one value into `target`.
    fn read(&mut self, target: &mut dyn Reflect) -> Result<(), DecodeError> {
        let path = target.reflect_type_path();
        let current = self.lexer.current();

        match current.kind {
            TokenKind::Eof => return Err(self.error(path, DecodeErrorKind::TruncatedInput)),
            TokenKind::Close => {
                let msg = "unexpected `)`, expected a value";
                return Err(self.malformed(path, msg));
            }
            TokenKind::Ident if current.is_ident("nil") => {
                let position = current.position;
                self.advance(path)?;
                return zero_in_place(target)
                    .map_err(|kind| DecodeError::new(position, path, kind));
            }
            _ => {}
        }

        if let ReflectMut::Option(option) = target.reflect_mut() {
            return self.read(option.insert_zero());
        }

        if self.lexer.current().kind == TokenKind::Open {
            self.advance(path)?;
            self.read_list(target, path)?;
            return self.expect(TokenKind::Close, path).map(drop);
        }

        self.read_atom(target, path)
    }

    fn read_atom(&mut self, target: &mut dyn Reflect, path: &'static str) -> Result<(), DecodeError> {
        let token = self.advance(path)?;
        let position = token.position;
        let value = atom_value(&token).map_err(|kind| DecodeError::new(position, path, kind))?;

        let found = value.describe();
        match target.reflect_mut() {
            ReflectMut::Scalar(scalar) => {
                return scalar
                    .set_scalar(value)
                    .map_err(|err| DecodeError::new(position, path, scalar_error(err)));
            }
            ReflectMut::Opaque(_) => return Err(DecodeError::new(position, path, unsupported(path))),
            _ => {}
        }

        let kind = DecodeErrorKind::TypeMismatch {
            expected: expected_of(target),
            found: found.to_string(),
        };
        Err(DecodeError::new(position, path, kind))
    }

    /// Reads the elements of a list, after its `(`.
    fn read_list(&mut self, target: &mut dyn Reflect, path: &'static str) -> Result<(), DecodeError> {
        match target.reflect_mut() {
            ReflectMut::Array(array) => self.read_array(array, path),
            ReflectMut::List(list) => self.read_vec(list, path),
            ReflectMut::Map(map) => self.read_map(map, path),
            ReflectMut::Struct(record) => self.read_struct(record, path),
            ReflectMut::Interface(poly) => self.read_poly(poly, path),
            ReflectMut::Scalar(scalar) => {
                let kind = DecodeErrorKind::TypeMismatch {
                    expected: shape_of(scalar.reflect_type_info()),
                    found: String::from("list"),
                };
                Err(self.error(path, kind))
            }
            // `read` unwraps options before reaching a list.
            ReflectMut::Option(_) | ReflectMut::Opaque(_) => Err(self.error(path, unsupported(path))),
        }
    }

    fn read_array(&mut self, array: &mut dyn Array, path: &'static str) -> Result<(), DecodeError> {
        let len = array.len();
        for index in 0..len {
            if self.end_list(path)? {
                let msg = format!("expected {len} elements, found {index}");
                return Err(self.malformed(path, msg));
            }
            if let Some(item) = array.get_mut(index) {
                self.read(item)?;
            }
        }
        if !self.end_list(path)? {
            let msg = format!("expected {len} elements, found more");
            return Err(self.malformed(path, msg));
        }
        Ok(())
    }

    fn read_vec(&mut self, list: &mut dyn List, path: &'static str) -> Result<(), DecodeError> {
        list.clear();
        while !self.end_list(path)? {
            self.read(list.push_zero())?;
        }
        Ok(())
    }

    fn read_map(&mut self, map: &mut dyn Map, path: &'static str) -> Result<(), DecodeError> {
        map.clear();
        while !self.end_list(path)? {
            self.expect(TokenKind::Open, path)?;
            let position = self.lexer.current().position;

            let mut key = map.zero_key();
            self.read(&mut *key)?;
            let mut value = map.zero_value();
            self.read(&mut *value)?;

            if map.insert_boxed(key, value).is_err() {
                let kind = DecodeErrorKind::MalformedInput(format!(
                    "cannot insert the entry into `{path}`"
                ));
                return Err(DecodeError::new(position, path, kind));
            }
            self.expect(TokenKind::Close, path)?;
        }
        Ok(())
    }

    fn read_struct(&mut self, record: &mut dyn Struct, path: &'static str) -> Result<(), DecodeError> {
        let info = record.struct_info();

        while !self.end_list(path)? {
            self.expect(TokenKind::Open, path)?;

            if self.lexer.current().kind != TokenKind::Ident {
                let found = self.lexer.current().describe();
                return Err(self.malformed(path, format!("expected a field name, found {found}")));
            }
            let key = self.advance(path)?;

            let field = match info {
                Some(info) => info
                    .index_of_key(key.text)
                    .and_then(|index| record.field_at_mut(index)),
                None => record.field_mut(key.text),
            };

            match field {
                Some(field) => self.read(field)?,
                None => self.unknown_field(&key, path)?,
            }
            self.expect(TokenKind::Close, path)?;
        }
        Ok(())
    }

    fn unknown_field(&mut self, key: &Token<'a>, path: &'static str) -> Result<(), DecodeError> {
        match self.options.unknown_fields {
            UnknownFields::Ignore => {
                log::debug!("ignoring unknown field `{}` of `{path}`", key.text);
                self.skip_value(path)
            }
            UnknownFields::Deny => {
                let kind = DecodeErrorKind::UnknownField {
                    key: key.text.into(),
                    type_path: path,
                };
                Err(DecodeError::new(key.position, path, kind))
            }
        }
    }

    fn read_poly(&mut self, poly: &mut dyn Polymorphic, path: &'static str) -> Result<(), DecodeError> {
        if self.lexer.current().kind != TokenKind::String {
            let found = self.lexer.current().describe();
            let msg = format!("expected a quoted interface name, found {found}");
            return Err(self.malformed(path, msg));
        }
        let name = self.advance(path)?;

        if self.lexer.current().is_ident("nil") {
            self.advance(path)?;
            poly.set_boxed(None);
            return Ok(());
        }

        let meta = self.registry.resolve(&name.value).map_err(|err| {
            let kind = DecodeErrorKind::UnregisteredInterfaceType { name: err.name };
            DecodeError::new(name.position, path, kind)
        })?;

        let mut value = meta.zero();
        self.read(&mut *value)?;
        poly.set_boxed(Some(value));
        Ok(())
    }

    /// Skips one value of any shape.
    fn skip_value(&mut self, path: &'static str) -> Result<(), DecodeError> {
        let mut depth = 0_usize;
        loop {
            let token = self.advance(path)?;
            match token.kind {
                TokenKind::Open => depth += 1,
                TokenKind::Close if depth > 0 => depth -= 1,
                TokenKind::Close => {
                    let kind = DecodeErrorKind::MalformedInput("unexpected `)`".into());
                    return Err(DecodeError::new(token.position, path, kind));
                }
                TokenKind::Eof => {
                    return Err(DecodeError::new(token.position, path, DecodeErrorKind::TruncatedInput));
                }
                _ => {}
            }
            if depth == 0 {
                return Ok(());
            }
        }
    }

    /// Returns `true` on the `)` closing the current list, without consuming it.
    fn end_list(&self, path: &'static str) -> Result<bool, DecodeError> {
        match self.lexer.current().kind {
            TokenKind::Close => Ok(true),
            TokenKind::Eof => Err(self.error(path, DecodeErrorKind::TruncatedInput)),
            _ => Ok(false),
        }
    }

    /// Checks that nothing follows the outermost value.
    fn finish(&self, path: &'static str) -> Result<(), DecodeError> {
        let current = self.lexer.current();
        if current.kind == TokenKind::Eof {
            return Ok(());
        }
        let msg = format!("unexpected {} after the value", current.describe());
        Err(self.malformed(path, msg))
    }

    // -------------------------------------------------------------------------
    // Helpers

    #[inline]
    fn advance(&mut self, path: &'static str) -> Result<Token<'a>, DecodeError> {
        self.lexer.advance().map_err(|err| lex_error(err, path))
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind, path: &'static str) -> Result<Token<'a>, DecodeError> {
        self.lexer.expect(kind).map_err(|err| lex_error(err, path))
    }

    #[inline]
    fn position(&self) -> Position {
        self.lexer.current().position
    }

    #[inline]
    fn error(&self, path: &'static str, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(self.position(), path, kind)
    }

    #[inline]
    fn malformed(&self, path: &'static str, msg: impl Into<String>) -> DecodeError {
        self.error(path, DecodeErrorKind::MalformedInput(msg.into()))
    }
}

// -----------------------------------------------------------------------------
// Utils

#[inline]
fn lex_error(err: LexError, target: &'static str) -> DecodeError {
    DecodeError::new(err.position, target, err.kind)
}

#[inline]
fn unsupported(path: &str) -> DecodeErrorKind {
    DecodeErrorKind::MalformedInput(format!("cannot decode into `{path}`"))
}

/// Converts an atom token into a scalar value.
fn atom_value<'t>(token: &'t Token<'_>) -> Result<ScalarValue<'t>, DecodeErrorKind> {
    let invalid = |what: &str| {
        DecodeErrorKind::MalformedInput(format!("invalid {what} literal `{}`", token.text))
    };

    match token.kind {
        TokenKind::Ident if token.is_ident("t") => Ok(ScalarValue::Bool(true)),
        TokenKind::Ident => Err(DecodeErrorKind::MalformedInput(format!(
            "unexpected symbol `{}`",
            token.text
        ))),
        TokenKind::String => Ok(ScalarValue::Text(Cow::Borrowed(&*token.value))),
        TokenKind::Int => {
            if let Ok(v) = token.text.parse::<i128>() {
                return Ok(ScalarValue::Int(v));
            }
            let digits = token.text.strip_prefix('+').unwrap_or(token.text);
            digits
                .parse::<u128>()
                .map(ScalarValue::UInt)
                .map_err(|_| invalid("integer"))
        }
        TokenKind::Float => token
            .text
            .parse::<f64>()
            .map(ScalarValue::Float)
            .map_err(|_| invalid("float")),
        TokenKind::Complex => {
            let (re, im) = token.complex_parts().ok_or_else(|| invalid("complex"))?;
            match (re.parse::<f64>(), im.parse::<f64>()) {
                (Ok(re), Ok(im)) => Ok(ScalarValue::Complex(re, im)),
                _ => Err(invalid("complex")),
            }
        }
        TokenKind::Open | TokenKind::Close | TokenKind::Eof => Err(DecodeErrorKind::MalformedInput(
            format!("expected an atom, found {}", token.describe()),
        )),
    }
}

fn scalar_error(err: ScalarError) -> DecodeErrorKind {
    match err {
        ScalarError::Mismatch { expected, found } => DecodeErrorKind::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        },
        err @ ScalarError::OutOfRange { .. } => DecodeErrorKind::MalformedInput(err.to_string()),
    }
}

/// Describes what a target accepts, for mismatch errors.
fn expected_of(target: &dyn Reflect) -> String {
    shape_of(target.reflect_type_info())
}

fn shape_of(info: &TypeInfo) -> String {
    match info {
        TypeInfo::Scalar(info) => info.scalar_kind().to_string(),
        TypeInfo::Array(info) => format!("array of {} {}", info.len(), shape_of(info.item_info())),
        TypeInfo::List(info) => format!("list of {}", shape_of(info.item_info())),
        TypeInfo::Map(info) => format!(
            "map of {} to {}",
            shape_of(info.key_info()),
            shape_of(info.value_info())
        ),
        TypeInfo::Option(info) => shape_of(info.some_info()),
        TypeInfo::Struct(_) | TypeInfo::Opaque(_) => format!("`{}`", info.type_path()),
        TypeInfo::Interface(info) => format!("interface `{}`", info.name()),
    }
}

/// Resets `target` to its zero value, keeping allocations where possible.
fn zero_in_place(target: &mut dyn Reflect) -> Result<(), DecodeErrorKind> {
    let path = target.reflect_type_path();
    match target.reflect_mut() {
        ReflectMut::Scalar(scalar) => scalar.set_scalar(ScalarValue::Nil).map_err(scalar_error),
        ReflectMut::Array(array) => {
            for index in 0..array.len() {
                if let Some(item) = array.get_mut(index) {
                    zero_in_place(item)?;
                }
            }
            Ok(())
        }
        ReflectMut::List(list) => {
            list.clear();
            Ok(())
        }
        ReflectMut::Map(map) => {
            map.clear();
            Ok(())
        }
        ReflectMut::Struct(record) => {
            for index in 0..record.field_len() {
                if let Some(field) = record.field_at_mut(index) {
                    zero_in_place(field)?;
                }
            }
            Ok(())
        }
        ReflectMut::Option(option) => {
            option.set_none();
            Ok(())
        }
        ReflectMut::Interface(poly) => {
            poly.set_boxed(None);
            Ok(())
        }
        ReflectMut::Opaque(_) => Err(unsupported(path)),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use sx_reflect::complex::Complex64;
    use sx_reflect::derive::Reflect;
    use sx_reflect::interface;
    use sx_reflect::ops::Poly;
    use sx_reflect::registry::TypeRegistry;

    use super::Decoder;
    use crate::de::{DecodeOptions, Position};
    use crate::DecodeErrorKind;

    interface!(Value = "test.Value");

    fn decode<T: sx_reflect::Reflect + Default>(input: &str) -> Result<T, crate::DecodeError> {
        Decoder::new(&TypeRegistry::new()).decode(input)
    }

    #[test]
    fn scalars() {
        assert_eq!(decode::<i32>("-17"), Ok(-17));
        assert_eq!(decode::<u8>("+200"), Ok(200));
        assert_eq!(decode::<f64>("3"), Ok(3.0));
        assert_eq!(decode::<f32>("2.5000"), Ok(2.5));
        assert_eq!(decode::<bool>("t"), Ok(true));
        assert_eq!(decode::<bool>("nil"), Ok(false));
        assert_eq!(decode::<String>("\"a\\tb\""), Ok(String::from("a\tb")));
        assert_eq!(decode::<char>("\"z\""), Ok('z'));
        assert_eq!(decode::<Complex64>("#C(1 -2.5)"), Ok(Complex64::new(1.0, -2.5)));
        assert_eq!(decode::<()>("nil"), Ok(()));
        assert_eq!(decode::<u128>(&u128::MAX.to_string()), Ok(u128::MAX));
    }

    #[test]
    fn numbers_are_range_checked() {
        let err = decode::<u8>("256").unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedInput(_)));
        assert_eq!(err.target, "u8");

        let err = decode::<f32>("1e39").unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedInput(_)));
        assert_eq!(decode::<f64>("1e39"), Ok(1e39));
    }

    #[test]
    fn atom_kind_must_match() {
        let err = decode::<i32>("1.5").unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::TypeMismatch {
                expected: "integer".into(),
                found: "float".into(),
            }
        );

        let err = decode::<Vec<u8>>("5").unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::TypeMismatch {
                expected: "list of unsigned integer".into(),
                found: "integer".into(),
            }
        );

        let err = decode::<BTreeMap<String, [u8; 2]>>("\"k\"").unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::TypeMismatch {
                expected: "map of string to array of 2 unsigned integer".into(),
                found: "string".into(),
            }
        );

        let err = decode::<String>("(1)").unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::TypeMismatch {
                expected: "string".into(),
                found: "list".into(),
            }
        );
    }

    #[test]
    fn sequences() {
        assert_eq!(decode::<Vec<u8>>("(1 2 3)"), Ok(vec![1, 2, 3]));
        assert_eq!(decode::<Vec<u8>>("()"), Ok(vec![]));
        assert_eq!(decode::<[i8; 2]>("(-1 1)"), Ok([-1, 1]));

        let err = decode::<[i8; 2]>("(1)").unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::MalformedInput("expected 2 elements, found 1".into())
        );
        assert!(decode::<[i8; 2]>("(1 2 3)").is_err());
    }

    #[test]
    fn lists_are_replaced_not_appended() {
        let registry = TypeRegistry::new();
        let mut list = vec![9_u8, 9, 9];
        Decoder::new(&registry).decode_into("(1)", &mut list).unwrap();
        assert_eq!(list, [1]);
    }

    #[test]
    fn maps_keep_the_last_duplicate() {
        let map = decode::<BTreeMap<String, u8>>("((\"a\" 1) (\"b\" 2) (\"a\" 3))").unwrap();
        assert_eq!(map, BTreeMap::from([("a".into(), 3), ("b".into(), 2)]));
    }

    #[test]
    fn options_are_transparent() {
        assert_eq!(decode::<Option<u8>>("nil"), Ok(None));
        assert_eq!(decode::<Option<u8>>("4"), Ok(Some(4)));
        assert_eq!(decode::<Option<Vec<u8>>>("(4)"), Ok(Some(vec![4])));
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Inner {
        #[reflect(alias = "n")]
        number: i64,
        text: String,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Outer {
        inner: Inner,
        list: Vec<Inner>,
    }

    #[test]
    fn struct_keys_accept_alias_and_name() {
        let inner = decode::<Inner>("((n 1) (text \"x\"))").unwrap();
        assert_eq!(inner, Inner { number: 1, text: "x".into() });

        let inner = decode::<Inner>("((number 2))").unwrap();
        assert_eq!(inner.number, 2);
    }

    #[test]
    fn nested_structs() {
        let outer = decode::<Outer>("((list (((n 1)) ((n 2)))) (inner ((text \"in\"))))").unwrap();
        assert_eq!(outer.inner.text, "in");
        assert_eq!(outer.list.len(), 2);
        assert_eq!(outer.list[1].number, 2);
    }

    #[test]
    fn unknown_fields() {
        let input = "((n 1) (extra (1 (2 3) \"x\")) (text \"y\"))";
        let inner = decode::<Inner>(input).unwrap();
        assert_eq!(inner, Inner { number: 1, text: "y".into() });

        let registry = TypeRegistry::new();
        let strict = Decoder::new(&registry).with_options(DecodeOptions::strict());
        let err = strict.decode::<Inner>(input).unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::UnknownField { ref key, .. } if &**key == "extra"
        ));
    }

    #[test]
    fn nil_zeroes_composites() {
        let registry = TypeRegistry::new();
        let mut outer = Outer {
            inner: Inner { number: 5, text: "t".into() },
            list: vec![Inner::default()],
        };
        Decoder::new(&registry).decode_into("nil", &mut outer).unwrap();
        assert_eq!(outer, Outer::default());
    }

    #[test]
    fn polymorphic_values_resolve_through_the_registry() {
        let mut registry = TypeRegistry::new();
        registry.register_interface::<Value, i32>();

        let decoder = Decoder::new(&registry);
        let value: Poly<Value> = decoder.decode("(\"test.Value\" 5)").unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&5));

        let empty: Poly<Value> = decoder.decode("(\"test.Value\" nil)").unwrap();
        assert!(empty.is_none());

        let err = decoder.decode::<Poly<Value>>("(\"test.Other\" 5)").unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::UnregisteredInterfaceType { name: "test.Other".into() }
        );
    }

    #[test]
    fn truncated_input() {
        let err = decode::<Vec<u8>>("(1 2").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::TruncatedInput);
        assert_eq!(
            err.position,
            Position {
                offset: 4,
                line: 1,
                column: 5
            }
        );

        let err = decode::<u8>("").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::TruncatedInput);
    }

    #[test]
    fn trailing_input_is_rejected() {
        let err = decode::<u8>("1 2").unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedInput(_)));
        assert_eq!(err.position.column, 3);

        let err = decode::<Vec<u8>>("(1))").unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedInput(_)));
    }

    #[test]
    fn in_place_decoding_keeps_partial_updates() {
        let registry = TypeRegistry::new();
        let mut inner = Inner { number: 0, text: "old".into() };
        let result = Decoder::new(&registry).decode_into("((n 7) (text 1))", &mut inner);

        assert!(result.is_err());
        assert_eq!(inner.number, 7);
        assert_eq!(inner.text, "old");
    }

    #[test]
    fn error_display() {
        let err = decode::<i32>("\"x\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error at 1:1 reading `i32`: cannot read string into integer"
        );
    }
}
