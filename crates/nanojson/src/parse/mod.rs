//! JSON text parser (RFC 8259).
//!
//! The parser is a recursive-descent reader over the input bytes. It stops at
//! the first syntax error and never returns a partial tree. Nesting depth is
//! bounded by [`ParseOptions::max_depth`].

mod error;

pub use error::{ParseError, ParseErrorKind};

use crate::value::{Array, Object, Value};

/// Default bound on nested arrays/objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested arrays/objects. A scalar document has depth 0.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parses a complete JSON document.
pub fn parse_value(input: &str) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Parses a complete JSON document with explicit options.
pub fn parse_value_with(input: &str, options: ParseOptions) -> Result<Value, ParseError> {
    Parser::new(input).with_options(options).parse()
}

/// Parses a complete JSON document from raw bytes, rejecting invalid UTF-8.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    parse_slice_with(input, ParseOptions::default())
}

pub fn parse_slice_with(input: &[u8], options: ParseOptions) -> Result<Value, ParseError> {
    let text = std::str::from_utf8(input).map_err(|err| {
        let err = ParseError::new(ParseErrorKind::InvalidUtf8, input, err.valid_up_to());
        tracing::debug!(offset = err.offset(), "JSON input is not valid UTF-8");
        err
    })?;
    parse_value_with(text, options)
}

/// Recursive-descent JSON reader.
///
/// The cursor `x` only ever rests on ASCII bytes or the end of input, so it is
/// always a `str` character boundary.
pub struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    x: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            x: 0,
            depth: 0,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Reads one value and requires that only whitespace follows it.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let result = self.document();
        if let Err(err) = &result {
            tracing::debug!(
                offset = err.offset(),
                kind = %err.kind(),
                "JSON parse failed"
            );
        }
        result
    }

    fn document(&mut self) -> Result<Value, ParseError> {
        let value = self.value()?;
        self.skip_whitespace();
        if self.x < self.bytes.len() {
            return Err(self.error(ParseErrorKind::TrailingCharacters));
        }
        Ok(value)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.bytes, self.x)
    }

    fn error_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, self.bytes, offset)
    }

    fn unexpected(&self) -> ParseError {
        match self.input.get(self.x..).and_then(|rest| rest.chars().next()) {
            Some(ch) => self.error(ParseErrorKind::UnexpectedCharacter(ch)),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.x).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(b) if b == byte => {
                self.x += 1;
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
            Some(b'n') => self.literal(b"null", Value::Null),
            Some(b't') => self.literal(b"true", Value::Bool(true)),
            Some(b'f') => self.literal(b"false", Value::Bool(false)),
            Some(b'"') => self.string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.number(),
            Some(b'[') => self.array(),
            Some(b'{') => self.object(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn literal(&mut self, word: &[u8], value: Value) -> Result<Value, ParseError> {
        for &byte in word {
            self.expect(byte)?;
        }
        Ok(value)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(ParseErrorKind::DepthLimit(self.options.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.x += 1;
        let mut items = Array::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.x += 1;
            self.leave();
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.x += 1;
        let mut members = Object::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
            self.leave();
            return Ok(Value::Object(members));
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.unexpected());
            }
            let key = self.string()?;
            self.skip_whitespace();
            self.expect(b':')?;
            let value = self.value()?;
            // Duplicate keys: the last value wins, the key keeps its first slot.
            members.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.leave();
        Ok(Value::Object(members))
    }

    fn string(&mut self) -> Result<String, ParseError> {
        self.x += 1;
        let mut out = String::new();
        let mut run = self.x;
        loop {
            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                Some(b'"') => {
                    out.push_str(&self.input[run..self.x]);
                    self.x += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[run..self.x]);
                    self.escape(&mut out)?;
                    run = self.x;
                }
                Some(0x00..=0x1f) => return Err(self.error(ParseErrorKind::ControlCharacter)),
                Some(_) => self.x += 1,
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let start = self.x;
        self.x += 1;
        let Some(byte) = self.peek() else {
            return Err(self.error(ParseErrorKind::UnexpectedEnd));
        };
        self.x += 1;
        let ch = match byte {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{08}',
            b'f' => '\u{0c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => self.unicode_escape(start)?,
            _ => return Err(self.error_at(ParseErrorKind::InvalidEscape, start)),
        };
        out.push(ch);
        Ok(())
    }

    fn hex4(&mut self) -> Result<u16, ParseError> {
        let mut code: u16 = 0;
        for _ in 0..4 {
            let digit = match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                Some(_) => return Err(self.error(ParseErrorKind::InvalidEscape)),
            };
            code = (code << 4) | u16::from(digit);
            self.x += 1;
        }
        Ok(code)
    }

    /// Decodes the payload of `\uXXXX`, joining surrogate pairs.
    fn unicode_escape(&mut self, start: usize) -> Result<char, ParseError> {
        let first = self.hex4()?;
        let code = match first {
            0xD800..=0xDBFF => {
                if self.bytes.get(self.x..self.x + 2) != Some(&b"\\u"[..]) {
                    return Err(self.error_at(ParseErrorKind::InvalidUnicode, start));
                }
                self.x += 2;
                let second = self.hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.error_at(ParseErrorKind::InvalidUnicode, start));
                }
                0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(self.error_at(ParseErrorKind::InvalidUnicode, start)),
            _ => u32::from(first),
        };
        char::from_u32(code).ok_or_else(|| self.error_at(ParseErrorKind::InvalidUnicode, start))
    }

    fn digits(&mut self) -> bool {
        let start = self.x;
        while let Some(b'0'..=b'9') = self.peek() {
            self.x += 1;
        }
        self.x > start
    }

    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.x;
        if self.peek() == Some(b'-') {
            self.x += 1;
        }
        match self.peek() {
            Some(b'0') => self.x += 1,
            Some(b'1'..=b'9') => {
                self.digits();
            }
            _ => return Err(self.error(ParseErrorKind::InvalidNumber)),
        }
        if self.peek() == Some(b'.') {
            self.x += 1;
            if !self.digits() {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.x += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.x += 1;
            }
            if !self.digits() {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }
        let n: f64 = self.input[start..self.x]
            .parse()
            .map_err(|_| self.error_at(ParseErrorKind::InvalidNumber, start))?;
        if !n.is_finite() {
            return Err(self.error_at(ParseErrorKind::NumberOutOfRange, start));
        }
        Ok(Value::Number(n))
    }
}
