//! Item value model
//!
//! [`ItemValue`] is the attribute-value tree a key-value document store
//! persists. Every scalar carries an explicit type tag, and numbers always
//! travel as decimal text so that no precision is lost to native floats.
//!
//! ## Wire form
//!
//! On the wire each value is a single-key object keyed by its tag:
//!
//! | Variant | Wire form |
//! |---------|-----------|
//! | `Null` | `{"NULL": true}` |
//! | `Bool(b)` | `{"BOOL": b}` |
//! | `Number(text)` | `{"N": "text"}` |
//! | `String(s)` | `{"S": "s"}` |
//! | `List(items)` | `{"L": [...]}` |
//! | `Map(fields)` | `{"M": {...}}` |
//!
//! Tags the store knows but this model does not carry (binary and set
//! types such as `B`, `SS`, `NS`, `BS`) are rejected with
//! [`CodecError::UnsupportedVariant`]. Parsing and rendering are both
//! depth-guarded like the codec itself.

use crate::document::type_name_of;
use crate::error::{CodecError, CodecResult};
use crate::limits::assert_depth;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A stored item: attribute name to value
///
/// `BTreeMap` keeps iteration, serialization and comparison deterministic.
pub type Item = BTreeMap<String, ItemValue>;

/// Wire tags for each supported attribute type
pub mod tag {
    /// Null attribute
    pub const NULL: &str = "NULL";
    /// Boolean attribute
    pub const BOOL: &str = "BOOL";
    /// Number attribute (decimal text)
    pub const NUMBER: &str = "N";
    /// String attribute
    pub const STRING: &str = "S";
    /// List attribute
    pub const LIST: &str = "L";
    /// Map attribute
    pub const MAP: &str = "M";
}

/// A typed attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValue {
    /// Null attribute
    Null,
    /// Boolean attribute
    Bool(bool),
    /// Number carried as decimal text
    Number(String),
    /// UTF-8 string attribute
    String(String),
    /// Ordered list of attributes
    List(Vec<ItemValue>),
    /// Nested map of attributes
    Map(Item),
}

impl ItemValue {
    /// Create a number attribute from anything that displays as decimal text
    pub fn number(n: impl fmt::Display) -> Self {
        ItemValue::Number(n.to_string())
    }

    /// Create a string attribute
    pub fn string(s: impl Into<String>) -> Self {
        ItemValue::String(s.into())
    }

    /// Wire tag of this value
    pub fn tag(&self) -> &'static str {
        match self {
            ItemValue::Null => tag::NULL,
            ItemValue::Bool(_) => tag::BOOL,
            ItemValue::Number(_) => tag::NUMBER,
            ItemValue::String(_) => tag::STRING,
            ItemValue::List(_) => tag::LIST,
            ItemValue::Map(_) => tag::MAP,
        }
    }

    /// Check if this is a null attribute
    pub fn is_null(&self) -> bool {
        matches!(self, ItemValue::Null)
    }

    /// Get the string payload, if this is a string attribute
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ItemValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the number text, if this is a number attribute
    pub fn as_number_text(&self) -> Option<&str> {
        match self {
            ItemValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get the list payload, if this is a list attribute
    pub fn as_list(&self) -> Option<&[ItemValue]> {
        match self {
            ItemValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the map payload, if this is a map attribute
    pub fn as_map(&self) -> Option<&Item> {
        match self {
            ItemValue::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// Render this value in wire form
    ///
    /// # Errors
    ///
    /// `DepthExceeded` when the value nests past the ceiling.
    pub fn to_wire(&self) -> CodecResult<serde_json::Value> {
        to_wire_at(self, 0)
    }

    /// Parse a value from wire form
    ///
    /// # Errors
    ///
    /// - `UnsupportedVariant` for tags outside the six supported types
    /// - `ShapeMismatch` for anything that is not a single-tag object with a
    ///   payload of the right type
    /// - `DepthExceeded` when the value nests past the ceiling
    pub fn from_wire(value: &serde_json::Value) -> CodecResult<ItemValue> {
        from_wire_at(value, 0)
    }
}

/// Render a whole item in wire form
///
/// Attributes start at depth 1, as in [`item_from_wire`].
pub fn item_to_wire(item: &Item) -> CodecResult<serde_json::Value> {
    fields_to_wire(item, 0).map(serde_json::Value::Object)
}

fn fields_to_wire(
    fields: &Item,
    depth: usize,
) -> CodecResult<serde_json::Map<String, serde_json::Value>> {
    assert_depth(depth)?;
    fields
        .iter()
        .map(|(name, value)| Ok((name.clone(), to_wire_at(value, depth + 1)?)))
        .collect()
}

fn to_wire_at(value: &ItemValue, depth: usize) -> CodecResult<serde_json::Value> {
    assert_depth(depth)?;
    let payload = match value {
        ItemValue::Null => serde_json::Value::Bool(true),
        ItemValue::Bool(b) => serde_json::Value::Bool(*b),
        ItemValue::Number(n) => serde_json::Value::String(n.clone()),
        ItemValue::String(s) => serde_json::Value::String(s.clone()),
        ItemValue::List(items) => serde_json::Value::Array(
            items
                .iter()
                .map(|item| to_wire_at(item, depth + 1))
                .collect::<CodecResult<Vec<_>>>()?,
        ),
        ItemValue::Map(fields) => serde_json::Value::Object(fields_to_wire(fields, depth)?),
    };
    let mut wire = serde_json::Map::with_capacity(1);
    wire.insert(value.tag().to_string(), payload);
    Ok(serde_json::Value::Object(wire))
}

/// Parse a whole item from wire form
///
/// The item itself counts as depth 0, so its attributes start at depth 1.
pub fn item_from_wire(value: &serde_json::Value) -> CodecResult<Item> {
    assert_depth(0)?;
    let fields = value
        .as_object()
        .ok_or_else(|| CodecError::shape_mismatch("item object", type_name_of(value)))?;
    fields
        .iter()
        .map(|(name, attr)| Ok((name.clone(), from_wire_at(attr, 1)?)))
        .collect()
}

fn from_wire_at(value: &serde_json::Value, depth: usize) -> CodecResult<ItemValue> {
    assert_depth(depth)?;

    let fields = value
        .as_object()
        .ok_or_else(|| CodecError::shape_mismatch("attribute value object", type_name_of(value)))?;
    let mut entries = fields.iter();
    let (tag, payload) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(CodecError::shape_mismatch(
                "attribute value with exactly one type tag",
                format!("object with {} keys", fields.len()),
            ))
        }
    };

    match tag.as_str() {
        tag::NULL => match payload {
            serde_json::Value::Bool(true) => Ok(ItemValue::Null),
            other => Err(CodecError::shape_mismatch("NULL flag set to true", other.to_string())),
        },
        tag::BOOL => payload
            .as_bool()
            .map(ItemValue::Bool)
            .ok_or_else(|| CodecError::shape_mismatch("BOOL payload", type_name_of(payload))),
        tag::NUMBER => payload
            .as_str()
            .map(|n| ItemValue::Number(n.to_string()))
            .ok_or_else(|| CodecError::shape_mismatch("N payload as text", type_name_of(payload))),
        tag::STRING => payload
            .as_str()
            .map(|s| ItemValue::String(s.to_string()))
            .ok_or_else(|| CodecError::shape_mismatch("S payload", type_name_of(payload))),
        tag::LIST => {
            let items = payload
                .as_array()
                .ok_or_else(|| CodecError::shape_mismatch("L payload", type_name_of(payload)))?;
            items
                .iter()
                .map(|item| from_wire_at(item, depth + 1))
                .collect::<CodecResult<Vec<_>>>()
                .map(ItemValue::List)
        }
        tag::MAP => {
            let fields = payload
                .as_object()
                .ok_or_else(|| CodecError::shape_mismatch("M payload", type_name_of(payload)))?;
            fields
                .iter()
                .map(|(name, attr)| Ok((name.clone(), from_wire_at(attr, depth + 1)?)))
                .collect::<CodecResult<Item>>()
                .map(ItemValue::Map)
        }
        other => Err(CodecError::unsupported(other)),
    }
}

impl Serialize for ItemValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        ItemValue::from_wire(&raw).map_err(serde::de::Error::custom)
    }
}
