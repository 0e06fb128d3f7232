//! JSON Parser: converts JSON text into a [`Value`] tree.
//!
//! A single-pass recursive-descent parser with one byte of lookahead and no
//! backtracking. The first error aborts the whole parse; no partial tree is
//! returned.
//!
//! # Key design decisions
//!
//! - **Containers only at the root**: a document must be an object or an array.
//!   `42` or `"x"` on their own fail with `NotJson`.
//! - **Numbers stay text**: the matched literal is stored verbatim, never evaluated.
//! - **Strings are scanned raw, then unescaped**: the raw slice between the quotes
//!   is validated for escape syntax and then decoded by [`crate::escape::unescape`].
//!   `\u` escapes pass the syntax check but are not decoded.
//! - **Bounded nesting**: recursion depth is capped by [`ParseOptions::max_depth`]
//!   so hostile input cannot exhaust the stack.

use crate::containers::{Array, Object};
use crate::error::{ErrorKind, JsonError, Result};
use crate::escape::unescape;
use crate::types::{Number, Value};
use std::str::FromStr;

/// Default cap on nested arrays/objects.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Tunables for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of arrays/objects open at once. The root counts as one.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a JSON document whose root is an object or an array.
///
/// ```
/// use smalljson_core::parse;
/// let doc = parse(r#" {"b":[1,2.5e3,null],"a":"x\ty"} "#).unwrap();
/// assert_eq!(doc.to_string(), r#"{"a":"x\ty","b":[1,2.5e3,null]}"#);
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ParseOptions::default())
}

/// Parse with explicit [`ParseOptions`].
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value> {
    Parser::new(text, options).parse_document()
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Value> {
        parse(s)
    }
}

/// Cursor over the input. Each `parse` call owns one.
struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, options: &ParseOptions) -> Self {
        Parser {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn fail<T>(&self, kind: ErrorKind) -> Result<T> {
        Err(JsonError::parse(kind, self.pos))
    }

    /// JSON whitespace is exactly space, `\n`, `\r` and `\t`.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\n' | b'\r' | b'\t') = self.peek() {
            self.pos += 1;
        }
    }

    fn parse_document(mut self) -> Result<Value> {
        self.skip_whitespace();
        let root = match self.peek() {
            Some(b'{') => self.parse_object()?,
            Some(b'[') => self.parse_array()?,
            _ => return self.fail(ErrorKind::NotJson),
        };
        self.skip_whitespace();
        if self.pos != self.bytes.len() {
            return self.fail(ErrorKind::RootNotOne);
        }
        Ok(root)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return self.fail(ErrorKind::TooDeep);
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Dispatch on the lookahead byte.
    fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            None => self.fail(ErrorKind::MissValue),
            Some(b't' | b'f') => self.parse_boolean(),
            Some(b'n') => self.parse_null(),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => self.fail(ErrorKind::BadValue),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1; // '{'
        self.skip_whitespace();

        let mut object = Object::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Object(object));
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return self.fail(ErrorKind::BadKey);
            }
            let key = self.parse_raw_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return self.fail(ErrorKind::MissColon);
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = self.parse_value()?;
            self.skip_whitespace();
            object.insert(unescape(key), value);

            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => return self.fail(ErrorKind::LackCommaOrBrace),
            }
        }

        self.leave();
        Ok(Value::Object(object))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1; // '['
        self.skip_whitespace();

        let mut array = Array::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Array(array));
        }

        loop {
            self.skip_whitespace();
            let value = self.parse_value()?;
            self.skip_whitespace();
            array.push(value);

            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return self.fail(ErrorKind::LackCommaOrBracket),
            }
        }

        self.leave();
        Ok(Value::Array(array))
    }

    /// Scan a string literal starting at its opening quote and return the raw
    /// (still escaped) text between the quotes.
    ///
    /// Slicing at quote/backslash positions is always a char boundary: both are
    /// ASCII, and UTF-8 continuation bytes never collide with ASCII.
    fn parse_raw_string(&mut self) -> Result<&'a str> {
        let text = self.text;
        self.pos += 1; // '"'
        let start = self.pos;
        loop {
            match self.peek() {
                None => return self.fail(ErrorKind::JsonLength),
                Some(b'\\') => {
                    self.pos += 1;
                    match self.peek() {
                        Some(b'"' | b'\\' | b'/' | b't' | b'r' | b'n' | b'u' | b'b' | b'f') => {
                            self.pos += 1;
                        }
                        _ => return self.fail(ErrorKind::BadEscape),
                    }
                }
                Some(b'"') => {
                    let raw = &text[start..self.pos];
                    self.pos += 1;
                    return Ok(raw);
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn parse_string(&mut self) -> Result<Value> {
        let raw = self.parse_raw_string()?;
        Ok(Value::String(unescape(raw)))
    }

    fn parse_boolean(&mut self) -> Result<Value> {
        let rest = &self.bytes[self.pos..];
        if rest.starts_with(b"true") {
            self.pos += 4;
            Ok(Value::Boolean(true))
        } else if rest.starts_with(b"false") {
            self.pos += 5;
            Ok(Value::Boolean(false))
        } else {
            self.fail(ErrorKind::BadBoolean)
        }
    }

    fn parse_null(&mut self) -> Result<Value> {
        if self.bytes[self.pos..].starts_with(b"null") {
            self.pos += 4;
            Ok(Value::Null)
        } else {
            self.fail(ErrorKind::BadNull)
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let end = scan_number(self.bytes, start)
            .map_err(|at| JsonError::parse(ErrorKind::BadNumber, at))?;
        self.pos = end;
        let literal = self.text[start..end].to_string();
        Ok(Value::Number(Number::from_scanned(literal)))
    }
}

/// Match `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?` at `start`.
///
/// Returns the end offset of the literal, or the offset of the offending byte.
pub(crate) fn scan_number(bytes: &[u8], start: usize) -> std::result::Result<usize, usize> {
    let mut i = start;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'0') => {
            i += 1;
            // No redundant leading zeros.
            if bytes.get(i).is_some_and(u8::is_ascii_digit) {
                return Err(i);
            }
        }
        Some(b'1'..=b'9') => i = skip_digits(bytes, i),
        _ => return Err(i),
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let end = skip_digits(bytes, i);
        if end == i {
            return Err(i);
        }
        i = end;
    }

    if let Some(b'e' | b'E') = bytes.get(i) {
        i += 1;
        if let Some(b'+' | b'-') = bytes.get(i) {
            i += 1;
        }
        let end = skip_digits(bytes, i);
        if end == i {
            return Err(i);
        }
        i = end;
    }

    Ok(i)
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}
