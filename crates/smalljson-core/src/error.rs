//! Error types for parsing and navigating JSON values.

use crate::types::ValueType;
use thiserror::Error;

/// The closed set of failure kinds reported by the parser and the typed accessors.
///
/// Each kind carries a fixed human-readable message, available through
/// [`ErrorKind::message`] or `Display`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The document does not start with `{` or `[`.
    #[error("format not json")]
    NotJson,
    /// Non-whitespace content follows the root value.
    #[error("root not one")]
    RootNotOne,
    /// An object key is not followed by `:`.
    #[error("miss colon")]
    MissColon,
    /// Input ended where a value was expected.
    #[error("miss value")]
    MissValue,
    /// An object member is followed by something other than `,` or `}`.
    #[error("lack ',' or '}}'")]
    LackCommaOrBrace,
    /// An array element is followed by something other than `,` or `]`.
    #[error("lack ',' or ']'")]
    LackCommaOrBracket,
    /// An object key is not a string literal.
    #[error("bad key")]
    BadKey,
    /// A value starts with a character no value can start with.
    #[error("bad value")]
    BadValue,
    /// A string literal is not terminated before the end of input.
    #[error("unterminated string")]
    JsonLength,
    /// A backslash is followed by a character outside the escape set.
    #[error("bad escape")]
    BadEscape,
    /// Content starting with `t`/`f` is not `true`/`false`.
    #[error("bad boolean")]
    BadBoolean,
    /// Content starting with `n` is not `null`.
    #[error("bad null")]
    BadNull,
    /// A number literal violates the number grammar.
    #[error("bad number")]
    BadNumber,
    /// An accessor was called on a value of the wrong variant.
    #[error("bad type")]
    BadType,
    /// Arrays and objects are nested deeper than the configured limit.
    #[error("nesting too deep")]
    TooDeep,
}

impl ErrorKind {
    /// The fixed message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotJson => "format not json",
            ErrorKind::RootNotOne => "root not one",
            ErrorKind::MissColon => "miss colon",
            ErrorKind::MissValue => "miss value",
            ErrorKind::LackCommaOrBrace => "lack ',' or '}'",
            ErrorKind::LackCommaOrBracket => "lack ',' or ']'",
            ErrorKind::BadKey => "bad key",
            ErrorKind::BadValue => "bad value",
            ErrorKind::JsonLength => "unterminated string",
            ErrorKind::BadEscape => "bad escape",
            ErrorKind::BadBoolean => "bad boolean",
            ErrorKind::BadNull => "bad null",
            ErrorKind::BadNumber => "bad number",
            ErrorKind::BadType => "bad type",
            ErrorKind::TooDeep => "nesting too deep",
        }
    }
}

/// Errors that can occur while parsing, navigating or converting JSON values.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input text was not accepted by the parser.
    /// `offset` is the byte offset at which the failure was detected.
    #[error("JSON parse error at byte {offset}: {kind}")]
    Parse { kind: ErrorKind, offset: usize },

    /// A typed accessor was called on a value of another variant.
    #[error("bad type: expected {expected}, found {found}")]
    BadType {
        expected: ValueType,
        found: ValueType,
    },

    /// `at(index)` on an array with no element at that index.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// `at(key)` on an object without that key.
    #[error("missing key: {0:?}")]
    MissingKey(String),

    /// Conversion into a `serde_json::Value` failed.
    #[error("serde_json conversion error: {0}")]
    Interop(#[from] serde_json::Error),
}

impl JsonError {
    pub(crate) fn parse(kind: ErrorKind, offset: usize) -> Self {
        JsonError::Parse { kind, offset }
    }

    /// The taxonomy kind of this error, if it has one.
    ///
    /// Parse failures report their own kind, wrong-variant accessors report
    /// [`ErrorKind::BadType`]. Lookup misses and interop failures have none.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            JsonError::Parse { kind, .. } => Some(*kind),
            JsonError::BadType { .. } => Some(ErrorKind::BadType),
            JsonError::IndexOutOfBounds { .. }
            | JsonError::MissingKey(_)
            | JsonError::Interop(_) => None,
        }
    }

    /// Byte offset of a parse failure.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::Parse { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// Convenience alias used throughout smalljson-core.
pub type Result<T> = std::result::Result<T, JsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_message() {
        for kind in [
            ErrorKind::NotJson,
            ErrorKind::LackCommaOrBrace,
            ErrorKind::LackCommaOrBracket,
            ErrorKind::JsonLength,
            ErrorKind::TooDeep,
        ] {
            assert_eq!(kind.to_string(), kind.message());
        }
    }

    #[test]
    fn parse_error_reports_kind_and_offset() {
        let err = JsonError::parse(ErrorKind::BadNumber, 3);
        assert_eq!(err.kind(), Some(ErrorKind::BadNumber));
        assert_eq!(err.offset(), Some(3));
        assert_eq!(err.to_string(), "JSON parse error at byte 3: bad number");
    }

    #[test]
    fn lookup_errors_have_no_kind() {
        assert_eq!(JsonError::MissingKey("a".into()).kind(), None);
        assert_eq!(
            JsonError::IndexOutOfBounds { index: 1, len: 0 }.kind(),
            None
        );
    }
}
