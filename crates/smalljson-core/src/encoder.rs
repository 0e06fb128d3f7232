//! JSON Serializer: renders a [`Value`] tree as JSON text.
//!
//! The canonical form is minified: no whitespace is inserted, object members
//! come out in key order, and strings are quoted with the seven recognized
//! control characters escaped. Numbers and booleans are written as their
//! literal text.
//!
//! # Example
//! ```
//! use smalljson_core::{encode, Array, Object, Value};
//! let mut obj = Object::new();
//! obj.insert("tags", ["rust", "json"].into_iter().collect::<Array>());
//! obj.insert("id", 7);
//! assert_eq!(encode(&Value::from(obj)), r#"{"id":7,"tags":["rust","json"]}"#);
//! ```

use crate::containers::{Array, Object};
use crate::escape::escape_into;
use crate::types::Value;
use std::fmt;

/// Render `value` in canonical (minified) form.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Render `value` across lines, indenting each nesting level by `indent` spaces.
///
/// Members are separated by `,` + newline, keys are followed by `": "`, and empty
/// containers stay `[]` / `{}`. The result parses back to the same tree.
pub fn encode_pretty(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_pretty(value, indent, 0, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(n.as_str()),
        Value::String(s) => write_string(s, out),
        Value::Array(arr) => write_array(arr, out),
        Value::Object(obj) => write_object(obj, out),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    escape_into(s, out);
    out.push('"');
}

/// `[v1,v2,...]`, or `[]` when empty.
fn write_array(arr: &Array, out: &mut String) {
    out.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_value(value, out);
    }
    out.push(']');
}

/// `{"k1":v1,"k2":v2,...}`, or `{}` when empty.
fn write_object(obj: &Object, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        write_value(value, out);
    }
    out.push('}');
}

fn write_pretty(value: &Value, indent: usize, depth: usize, out: &mut String) {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                push_newline_indent(indent, depth + 1, out);
                write_pretty(item, indent, depth + 1, out);
            }
            push_newline_indent(indent, depth, out);
            out.push(']');
        }
        Value::Object(obj) if !obj.is_empty() => {
            out.push('{');
            for (i, (key, item)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                push_newline_indent(indent, depth + 1, out);
                write_string(key, out);
                out.push_str(": ");
                write_pretty(item, indent, depth + 1, out);
            }
            push_newline_indent(indent, depth, out);
            out.push('}');
        }
        // Scalars and empty containers render the same as in canonical form.
        _ => write_value(value, out),
    }
}

fn push_newline_indent(indent: usize, depth: usize, out: &mut String) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(indent * depth));
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_value(self, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_array(self, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_object(self, &mut out);
        f.write_str(&out)
    }
}
