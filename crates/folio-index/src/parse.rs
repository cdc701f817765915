//! Catalog input decoding.
//!
//! A catalog is a JSON array of descriptors:
//!
//! ```json
//! [
//!   {"url": "vol1/", "title": "Volume 1", "children": [
//!     {"url": "vol1/ch1.html", "title": "Chapter 1"}
//!   ]}
//! ]
//! ```
//!
//! It may arrive already decoded or as an encoded string.

use std::borrow::Cow;

use serde_json::Value;

use crate::IndexError;

/// Raw catalog input accepted by [`Index::parse`](crate::Index::parse).
#[derive(Debug, Clone, Copy)]
pub enum CatalogInput<'a> {
    /// JSON text still to be decoded.
    Encoded(&'a str),
    /// An already-decoded value.
    Decoded(&'a Value),
}

impl<'a> From<&'a str> for CatalogInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Encoded(text)
    }
}

impl<'a> From<&'a String> for CatalogInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Encoded(text)
    }
}

impl<'a> From<&'a Value> for CatalogInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Self::Encoded(text),
            other => Self::Decoded(other),
        }
    }
}

impl<'a> CatalogInput<'a> {
    /// Returns true for input that carries nothing to parse.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Encoded(text) => text.is_empty(),
            Self::Decoded(value) => !is_truthy(value),
        }
    }

    /// Decodes the input into the top-level entry list.
    ///
    /// Decoded input is borrowed as is; only encoded text produces owned entries.
    pub(crate) fn into_entries(self) -> Result<Cow<'a, [Value]>, IndexError> {
        match self {
            Self::Encoded(text) => match serde_json::from_str::<Value>(text)? {
                Value::Array(entries) => Ok(Cow::Owned(entries)),
                other => Err(not_an_array(&other)),
            },
            Self::Decoded(Value::Array(entries)) => Ok(Cow::Borrowed(entries.as_slice())),
            Self::Decoded(other) => Err(not_an_array(other)),
        }
    }
}

/// Builds the error for a catalog whose top level is not an array.
fn not_an_array(value: &Value) -> IndexError {
    IndexError::NotAnArray {
        found: type_name(value),
    }
}

/// Returns false for `null`, `false`, zero, and the empty string.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns a short name for a JSON value's type.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
