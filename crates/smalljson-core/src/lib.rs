//! # smalljson-core
//!
//! A small in-memory JSON value model with a recursive-descent parser and a
//! canonical serializer.
//!
//! Scalars keep their text: numbers are stored as the exact literal that was
//! parsed (never evaluated), and `\u` escapes are accepted but not decoded.
//! Documents must have an object or array at the root.
//!
//! ## Quick start
//!
//! ```rust
//! use smalljson_core::{parse, Value};
//!
//! // text → tree
//! let mut doc = parse(r#"{ "name": "Alice", "scores": [95, 8.7e1] }"#).unwrap();
//! assert!(doc.at("scores").unwrap().is_array());
//!
//! // edit in place
//! *doc.at_mut("name").unwrap() = Value::from("Bob");
//! doc["active"] = Value::from(true);
//!
//! // tree → canonical text (keys in order, no whitespace)
//! assert_eq!(
//!     doc.to_string(),
//!     r#"{"active":true,"name":"Bob","scores":[95,8.7e1]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — JSON text → [`Value`] (`parse`, `parse_with`)
//! - [`encoder`] — [`Value`] → JSON text (`encode`, `encode_pretty`, `Display`)
//! - [`escape`] — the string escape codec shared by both directions
//! - [`types`] — [`Value`], [`Number`], [`ValueType`]
//! - [`containers`] — [`Array`] and [`Object`]
//! - [`error`] — [`ErrorKind`] taxonomy and [`JsonError`]
//! - `interop` — conversions to and from `serde_json::Value`

pub mod containers;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
mod interop;
pub mod types;

pub use containers::{Array, Object};
pub use decoder::{parse, parse_with, ParseOptions, DEFAULT_MAX_DEPTH};
pub use encoder::{encode, encode_pretty};
pub use error::{ErrorKind, JsonError, Result};
pub use escape::{escape, unescape};
pub use types::{Number, Value, ValueIndex, ValueType};
