//! Document value model
//!
//! [`DocumentValue`] is the JSON-like tree used at the application boundary.
//! It wraps `serde_json::Value`, which is a closed sum type over Null, Bool,
//! Number, String, Array and Object, so every conversion over it is an
//! exhaustive match.
//!
//! # Numeric domain
//!
//! Numbers are `serde_json::Number`, built with `arbitrary_precision` so a
//! parsed number keeps its JSON text. The codec accepts a signed 64-bit
//! integer, an unsigned 64-bit integer, or a finite 64-bit float, and
//! rejects any other literal instead of rounding it. NaN and infinities
//! cannot be represented; `From<f64>` maps them to null.
//!
//! # Key order
//!
//! Object keys keep insertion order (`serde_json` is built with
//! `preserve_order`). Equality between objects ignores key order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A JSON-like document tree
///
/// # Examples
///
/// ```
/// use attrstore_core::DocumentValue;
///
/// let doc: DocumentValue = r#"{"name": "widget", "tags": ["a", "b"]}"#.parse().unwrap();
/// assert!(doc.is_object());
/// assert_eq!(doc.type_name(), "object");
/// assert_eq!(doc.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DocumentValue(serde_json::Value);

impl DocumentValue {
    /// Create a null document
    pub fn null() -> Self {
        DocumentValue(serde_json::Value::Null)
    }

    /// Create an empty object
    pub fn object() -> Self {
        DocumentValue(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Create an empty array
    pub fn array() -> Self {
        DocumentValue(serde_json::Value::Array(Vec::new()))
    }

    /// Create from a serde_json::Value
    pub fn from_value(value: serde_json::Value) -> Self {
        DocumentValue(value)
    }

    /// Get the underlying serde_json::Value
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Get a reference to the underlying serde_json::Value
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }

    /// Serialize to compact JSON string
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    /// Lowercase name of the top-level variant
    pub fn type_name(&self) -> &'static str {
        type_name_of(&self.0)
    }

    /// Depth of the deepest node, counting the root as 0
    ///
    /// Scalars and empty containers have depth 0; `[[1]]` has depth 2.
    /// This is the quantity bounded by
    /// [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH). Walks the tree with
    /// an explicit stack, so it is safe on values of any depth.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.0, 0usize)];
        while let Some((value, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            match value {
                serde_json::Value::Array(items) => {
                    stack.extend(items.iter().map(|v| (v, depth + 1)));
                }
                serde_json::Value::Object(fields) => {
                    stack.extend(fields.values().map(|v| (v, depth + 1)));
                }
                _ => {}
            }
        }
        deepest
    }
}

/// Lowercase variant name of a raw serde_json value
pub(crate) fn type_name_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl FromStr for DocumentValue {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(DocumentValue)
    }
}

impl Deref for DocumentValue {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for DocumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<serde_json::Value> for DocumentValue {
    fn from(v: serde_json::Value) -> Self {
        DocumentValue(v)
    }
}

impl From<DocumentValue> for serde_json::Value {
    fn from(v: DocumentValue) -> Self {
        v.0
    }
}

impl From<f64> for DocumentValue {
    fn from(v: f64) -> Self {
        DocumentValue(
            serde_json::Number::from_f64(v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
        )
    }
}
