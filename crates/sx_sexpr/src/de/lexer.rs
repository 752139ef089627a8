use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::DecodeErrorKind;

// -----------------------------------------------------------------------------
// Position

/// A location in the input text.
///
/// `line` and `column` start at 1. Columns count chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of the input.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Returns the position reached after reading all of `text`.
    pub fn after(text: &str) -> Self {
        let mut position = Self::START;
        for ch in text.chars() {
            position.step(ch);
        }
        position
    }

    #[inline]
    fn step(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// -----------------------------------------------------------------------------
// Token

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A symbol, including `nil` and `t`.
    Ident,
    /// A double-quoted string.
    String,
    /// `[+-]?digits`
    Int,
    /// Digits with a fraction, an exponent, or both.
    Float,
    /// `#C(re im)`
    Complex,
    Open,
    Close,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Ident => "symbol",
            Self::String => "string",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::Open => "`(`",
            Self::Close => "`)`",
            Self::Eof => "end of input",
        })
    }
}

/// A token of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The source text of the token, quotes and escapes included.
    pub text: &'a str,
    /// For strings, the content with escapes resolved. Otherwise `text`.
    pub value: Cow<'a, str>,
    pub position: Position,
}

impl<'a> Token<'a> {
    #[inline]
    fn new(kind: TokenKind, text: &'a str, position: Position) -> Self {
        Self {
            kind,
            text,
            value: Cow::Borrowed(text),
            position,
        }
    }

    /// Returns `true` for the symbol `name`.
    #[inline]
    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == name
    }

    /// Returns the real and imaginary parts of a complex literal.
    pub fn complex_parts(&self) -> Option<(&'a str, &'a str)> {
        if self.kind != TokenKind::Complex {
            return None;
        }
        let inner = self.text.strip_prefix("#C(")?.strip_suffix(')')?;
        let mut parts = inner.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(re), Some(im), None) => Some((re, im)),
            _ => None,
        }
    }

    /// The token as it appears in error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => String::from("end of input"),
            _ => format!("`{}`", self.text),
        }
    }
}

// -----------------------------------------------------------------------------
// LexError

/// An error found while splitting the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: Position,
    pub kind: DecodeErrorKind,
}

impl LexError {
    #[inline]
    fn new(position: Position, kind: DecodeErrorKind) -> Self {
        Self { position, kind }
    }

    #[inline]
    fn malformed(position: Position, msg: impl Into<String>) -> Self {
        Self::new(position, DecodeErrorKind::MalformedInput(msg.into()))
    }

    #[inline]
    fn truncated(position: Position) -> Self {
        Self::new(position, DecodeErrorKind::TruncatedInput)
    }
}

// -----------------------------------------------------------------------------
// Lexer

/// Splits S-expression text into tokens, with one token of lookahead.
///
/// - Whitespace separates tokens; `;` starts a comment running to the end of
///   the line.
/// - `(` and `)` are tokens of their own.
/// - Strings are double-quoted and accept the escapes `\"`, `\\`, `\n`, `\r`,
///   `\t`, `\0` and `\u{hex}`.
/// - `#C(re im)` is a complex literal; both parts are integers or floats.
/// - Any other run of characters is an integer, a float, or a symbol.
///
/// # Examples
///
/// ```
/// use sx_sexpr::de::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("(t 1.5 ; comment\n \"a\\n\")").unwrap();
/// let mut kinds = Vec::new();
/// while lexer.current().kind != TokenKind::Eof {
///     kinds.push(lexer.advance().unwrap().kind);
/// }
///
/// assert_eq!(kinds, [
///     TokenKind::Open,
///     TokenKind::Ident,
///     TokenKind::Float,
///     TokenKind::String,
///     TokenKind::Close,
/// ]);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    position: Position,
    current: Token<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned on the first token of `input`.
    pub fn new(input: &'a str) -> Result<Self, LexError> {
        let mut lexer = Self {
            input,
            position: Position::START,
            current: Token::new(TokenKind::Eof, "", Position::START),
        };
        lexer.current = lexer.scan()?;
        Ok(lexer)
    }

    /// The token under the cursor.
    #[inline]
    pub fn current(&self) -> &Token<'a> {
        &self.current
    }

    /// Moves to the next token and returns the previous one.
    ///
    /// At the end of input, keeps returning [`TokenKind::Eof`].
    pub fn advance(&mut self) -> Result<Token<'a>, LexError> {
        let next = self.scan()?;
        Ok(core::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is of `kind`.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, LexError> {
        if self.current.kind == kind {
            return self.advance();
        }
        let position = self.current.position;
        match self.current.kind {
            TokenKind::Eof => Err(LexError::truncated(position)),
            _ => Err(LexError::malformed(
                position,
                format!("expected {kind}, found {}", self.current.describe()),
            )),
        }
    }

    // -------------------------------------------------------------------------
    // Scanning

    #[inline]
    fn peek(&self) -> Option<char> {
        self.input[self.position.offset..].chars().next()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position.step(ch);
        Some(ch)
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else if ch == ';' {
                while let Some(ch) = self.bump() {
                    if ch == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn scan(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_trivia();
        let start = self.position;

        let Some(ch) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, "", start));
        };

        match ch {
            '(' => {
                self.bump();
                Ok(Token::new(TokenKind::Open, self.slice(start), start))
            }
            ')' => {
                self.bump();
                Ok(Token::new(TokenKind::Close, self.slice(start), start))
            }
            '"' => self.scan_string(start),
            _ => {
                self.scan_run();
                let text = self.slice(start);
                if text == "#C" && self.peek() == Some('(') {
                    return self.scan_complex(start);
                }
                Ok(Token::new(classify(text), text, start))
            }
        }
    }

    #[inline]
    fn slice(&self, start: Position) -> &'a str {
        &self.input[start.offset..self.position.offset]
    }

    /// Consumes chars up to the next delimiter.
    fn scan_run(&mut self) {
        while let Some(ch) = self.peek() {
            if is_delimiter(ch) {
                break;
            }
            self.bump();
        }
    }

    fn scan_string(&mut self, start: Position) -> Result<Token<'a>, LexError> {
        self.bump();
        let content_start = self.position.offset;
        // Allocated on the first escape only.
        let mut owned: Option<String> = None;

        loop {
            let here = self.position;
            let Some(ch) = self.bump() else {
                return Err(LexError::truncated(self.position));
            };
            match ch {
                '"' => break,
                '\\' => {
                    let buf = owned.get_or_insert_with(|| {
                        String::from(&self.input[content_start..here.offset])
                    });
                    let escape = self
                        .bump()
                        .ok_or_else(|| LexError::truncated(self.position))?;
                    let resolved = match escape {
                        '"' => '"',
                        '\\' => '\\',
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        '0' => '\0',
                        'u' => self.scan_unicode_escape(here)?,
                        other => {
                            return Err(LexError::malformed(
                                here,
                                format!("unknown escape `\\{other}`"),
                            ));
                        }
                    };
                    buf.push(resolved);
                }
                other => {
                    if let Some(buf) = owned.as_mut() {
                        buf.push(other);
                    }
                }
            }
        }

        let text = self.slice(start);
        let value = match owned {
            Some(buf) => Cow::Owned(buf),
            None => Cow::Borrowed(&text[1..text.len() - 1]),
        };
        Ok(Token {
            kind: TokenKind::String,
            text,
            value,
            position: start,
        })
    }

    /// Reads `{hex}` after `\u`.
    fn scan_unicode_escape(&mut self, escape_start: Position) -> Result<char, LexError> {
        let invalid = || LexError::malformed(escape_start, "invalid unicode escape");

        if self.bump().ok_or_else(|| LexError::truncated(self.position))? != '{' {
            return Err(invalid());
        }
        let digits_start = self.position.offset;
        loop {
            match self.bump() {
                Some('}') => break,
                Some(ch) if ch.is_ascii_hexdigit() => {}
                Some(_) => return Err(invalid()),
                None => return Err(LexError::truncated(self.position)),
            }
        }
        let digits = &self.input[digits_start..self.position.offset - 1];
        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(invalid)
    }

    fn scan_complex(&mut self, start: Position) -> Result<Token<'a>, LexError> {
        let invalid = || LexError::malformed(start, "malformed complex literal");
        self.bump();

        for _ in 0..2 {
            self.skip_trivia();
            let part_start = self.position;
            self.scan_run();
            match classify(self.slice(part_start)) {
                TokenKind::Int | TokenKind::Float => {}
                _ if self.peek().is_none() => return Err(LexError::truncated(self.position)),
                _ => return Err(invalid()),
            }
        }

        self.skip_trivia();
        match self.bump() {
            Some(')') => Ok(Token::new(TokenKind::Complex, self.slice(start), start)),
            Some(_) => Err(invalid()),
            None => Err(LexError::truncated(self.position)),
        }
    }
}

#[inline]
fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | ')' | '"' | ';')
}

/// Classifies a run of non-delimiter chars.
fn classify(text: &str) -> TokenKind {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
        None => (unsigned, None),
    };
    let (integral, fraction) = match mantissa.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (mantissa, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !is_digits(integral) {
        return TokenKind::Ident;
    }
    if let Some(fraction) = fraction
        && !is_digits(fraction)
    {
        return TokenKind::Ident;
    }
    if let Some(exponent) = exponent {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if !is_digits(exponent) {
            return TokenKind::Ident;
        }
    }

    if fraction.is_none() && exponent.is_none() {
        TokenKind::Int
    } else {
        TokenKind::Float
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::{Lexer, Position, TokenKind, classify};
    use crate::DecodeErrorKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input).unwrap();
        let mut kinds = Vec::new();
        loop {
            let token = lexer.advance().unwrap();
            if token.kind == TokenKind::Eof {
                return kinds;
            }
            kinds.push(token.kind);
        }
    }

    #[test]
    fn classify_numbers() {
        assert_eq!(classify("42"), TokenKind::Int);
        assert_eq!(classify("-7"), TokenKind::Int);
        assert_eq!(classify("+0"), TokenKind::Int);
        assert_eq!(classify("1.5000"), TokenKind::Float);
        assert_eq!(classify("-2e10"), TokenKind::Float);
        assert_eq!(classify("3.0E-2"), TokenKind::Float);
        assert_eq!(classify("-"), TokenKind::Ident);
        assert_eq!(classify("1."), TokenKind::Ident);
        assert_eq!(classify(".5"), TokenKind::Ident);
        assert_eq!(classify("1x"), TokenKind::Ident);
        assert_eq!(classify("nil"), TokenKind::Ident);
    }

    #[test]
    fn tokens_and_comments() {
        use TokenKind::*;
        assert_eq!(
            kinds("((B t) ; trailing\n (C #C(1.0000 -2)))"),
            [Open, Open, Ident, Ident, Close, Open, Ident, Complex, Close, Close]
        );
        assert!(kinds("  ; only a comment").is_empty());
        assert_eq!(kinds("#Cx"), [Ident]);
    }

    #[test]
    fn string_escapes_are_resolved() {
        let lexer = Lexer::new(r#""a\"b\\c\n\u{1b}\0""#).unwrap();
        let token = lexer.current();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.value, "a\"b\\c\n\u{1b}\0");

        let lexer = Lexer::new("\"plain (text)\"").unwrap();
        assert_eq!(lexer.current().value, "plain (text)");
    }

    #[test]
    fn positions_track_lines() {
        let mut lexer = Lexer::new("(\n  foo)").unwrap();
        lexer.advance().unwrap();
        let token = lexer.advance().unwrap();
        assert_eq!(token.text, "foo");
        assert_eq!(
            token.position,
            Position {
                offset: 4,
                line: 2,
                column: 3
            }
        );
        assert_eq!(token.position.to_string(), "2:3");
    }

    #[test]
    fn complex_parts() {
        let lexer = Lexer::new("#C( 1.5  -2 )").unwrap();
        assert_eq!(lexer.current().complex_parts(), Some(("1.5", "-2")));
    }

    #[test]
    fn malformed_and_truncated_tokens() {
        let err = Lexer::new("\"open").err().unwrap();
        assert_eq!(err.kind, DecodeErrorKind::TruncatedInput);

        let err = Lexer::new(r#""\q""#).err().unwrap();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedInput(_)));

        let err = Lexer::new("#C(1 x)").err().unwrap();
        assert!(matches!(err.kind, DecodeErrorKind::MalformedInput(_)));

        let err = Lexer::new("#C(1 2").err().unwrap();
        assert_eq!(err.kind, DecodeErrorKind::TruncatedInput);
    }

    #[test]
    fn expect_reports_the_found_token() {
        let mut lexer = Lexer::new("foo").unwrap();
        let err = lexer.expect(TokenKind::Open).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::MalformedInput("expected `(`, found `foo`".into())
        );

        lexer.advance().unwrap();
        let err = lexer.expect(TokenKind::Close).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::TruncatedInput);
    }
}
