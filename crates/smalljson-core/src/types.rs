//! The JSON value model.
//!
//! A [`Value`] is a strict tree: every [`Array`] and [`Object`] exclusively owns
//! its children, so `clone()` is a deep copy and moving a value transfers the
//! whole subtree without copying.
//!
//! Scalars keep their textual form. A [`Number`] holds the exact literal text it
//! was parsed from (exponents and fraction digits included) and is never
//! evaluated; a boolean renders as `true`/`false`.

use crate::containers::{Array, Object};
use crate::decoder::scan_number;
use crate::error::{ErrorKind, JsonError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// The variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        };
        f.write_str(name)
    }
}

/// A JSON number kept as its literal text.
///
/// The text always satisfies the JSON number grammar; the only ways to build a
/// `Number` are the parser, [`Number::from_literal`], and the native integer and
/// float conversions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Validate `text` against the number grammar and keep it verbatim.
    ///
    /// ```
    /// use smalljson_core::{ErrorKind, Number};
    /// assert_eq!(Number::from_literal("-1.5E+3").unwrap().as_str(), "-1.5E+3");
    /// let err = Number::from_literal("01").unwrap_err();
    /// assert_eq!(err.kind(), Some(ErrorKind::BadNumber));
    /// ```
    pub fn from_literal(text: &str) -> Result<Number> {
        match scan_number(text.as_bytes(), 0) {
            Ok(end) if end == text.len() => Ok(Number(text.to_string())),
            Ok(end) => Err(JsonError::parse(ErrorKind::BadNumber, end)),
            Err(at) => Err(JsonError::parse(ErrorKind::BadNumber, at)),
        }
    }

    /// Build from text already accepted by the number scanner.
    pub(crate) fn from_scanned(text: String) -> Number {
        Number(text)
    }

    /// Convert a float, or `None` for NaN and infinities (JSON has no spelling for them).
    pub fn from_f64(f: f64) -> Option<Number> {
        f.is_finite().then(|| Number(f.to_string()))
    }

    /// The literal text of this number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! number_from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number(n.to_string())
                }
            }

            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

/// A JSON document node: exactly one of null, boolean, number, string, array or object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(Number),
    /// Unescaped text (escape sequences already decoded).
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// The variant tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    fn bad_type(&self, expected: ValueType) -> JsonError {
        JsonError::BadType {
            expected,
            found: self.value_type(),
        }
    }

    /// Borrow the array payload, failing with `BadType` on any other variant.
    pub fn to_array(&self) -> Result<&Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.bad_type(ValueType::Array)),
        }
    }

    pub fn to_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.bad_type(ValueType::Array)),
        }
    }

    pub fn into_array(self) -> Result<Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.bad_type(ValueType::Array)),
        }
    }

    /// Borrow the object payload, failing with `BadType` on any other variant.
    pub fn to_object(&self) -> Result<&Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(other.bad_type(ValueType::Object)),
        }
    }

    pub fn to_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(other.bad_type(ValueType::Object)),
        }
    }

    pub fn into_object(self) -> Result<Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(other.bad_type(ValueType::Object)),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Look up an array element by position or an object member by key.
    ///
    /// Fails with `BadType` when the index kind does not match the variant,
    /// and with `IndexOutOfBounds` / `MissingKey` when nothing is there.
    ///
    /// ```
    /// use smalljson_core::parse;
    /// let doc = parse(r#"{"tags":["a","b"]}"#).unwrap();
    /// assert_eq!(doc.at("tags").unwrap().at(1).unwrap().as_str(), Some("b"));
    /// assert!(doc.at(0).is_err());
    /// ```
    pub fn at<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    /// Mutable counterpart of [`Value::at`]; assigning through it edits the tree in place.
    pub fn at_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }

    /// Like [`Value::at`], but `None` on any failure.
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        self.at(index).ok()
    }

    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        self.at_mut(index).ok()
    }

    /// Move the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Types usable with [`Value::at`]: `usize` positions and string keys.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value>;
    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        v.to_array()?.at(*self)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        v.to_array_mut()?.at_mut(*self)
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        v.to_object()?.at(self)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        v.to_object_mut()?.at_mut(self)
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(v)
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(v)
    }
}

static NULL: Value = Value::Null;

impl std::ops::Index<usize> for Value {
    type Output = Value;

    /// Missing elements and non-arrays read as `null`.
    fn index(&self, index: usize) -> &Value {
        self.get(index).unwrap_or(&NULL)
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;

    /// Missing members and non-objects read as `null`.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl std::ops::IndexMut<usize> for Value {
    /// Panics unless `self` is an array with an element at `index`.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        let found = self.value_type();
        match self {
            Value::Array(arr) => {
                let len = arr.len();
                match arr.get_mut(index) {
                    Some(v) => v,
                    None => panic!("index {index} out of bounds for array of length {len}"),
                }
            }
            _ => panic!("cannot index into {found} with a position"),
        }
    }
}

impl std::ops::IndexMut<&str> for Value {
    /// Inserts `null` under a missing key. `null` itself becomes an empty object
    /// first; any other non-object panics.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        if self.is_null() {
            *self = Value::Object(Object::new());
        }
        let found = self.value_type();
        match self {
            Value::Object(obj) => obj.entry_or_null(key),
            _ => panic!("cannot index into {found} with key {key:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    /// NaN and infinities become `null`.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        if f.is_finite() {
            Value::Number(Number(f.to_string()))
        } else {
            Value::Null
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(Object::from(map))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
