//! Document <-> item codec
//!
//! Converts [`DocumentValue`] trees to [`ItemValue`] trees ("encode") and
//! back ("decode"). Both directions are exhaustive matches over closed
//! enums and thread an explicit depth through every recursive call, so the
//! functions here hold no state and may run on any number of threads.
//!
//! | DocumentValue | ItemValue |
//! |---------------|-----------|
//! | Null | Null |
//! | Bool(b) | Bool(b) |
//! | Number(n) | Number(decimal text of n) |
//! | String(s) | String(s) |
//! | Array(items) | List(each item at depth + 1) |
//! | Object(fields) | Map(each value at depth + 1, keys verbatim) |
//!
//! # Numbers
//!
//! Document numbers keep the text they were parsed from, so a literal too
//! large for 64 bits reaches the codec intact instead of as a rounded float.
//! Both directions run the text through [`parse_number`]: an integer
//! outside the `i64`/`u64` range fails with `NumericParse` on encode just as
//! it does on decode. Numbers built from `f64` always carry a fraction or an
//! exponent (`3.0`, `1e+300`), so the integer/float distinction survives a
//! round trip.
//!
//! Decoding tries a signed 64-bit integer, then an unsigned 64-bit integer,
//! then a finite 64-bit float.

use crate::document::DocumentValue;
use crate::error::{CodecError, CodecResult};
use crate::item::{Item, ItemValue};
use crate::limits::assert_depth;

type JsonMap = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Entry points
// =============================================================================

/// Encode any document into an item value
pub fn encode(document: &DocumentValue) -> CodecResult<ItemValue> {
    encode_at(document.as_inner(), 0)
}

/// Decode any item value into a document
pub fn decode(value: &ItemValue) -> CodecResult<DocumentValue> {
    decode_at(value, 0).map(DocumentValue::from_value)
}

/// Encode an object document into a top-level item
///
/// # Errors
///
/// `ShapeMismatch` when the document is not an object (null included).
pub fn json_object_to_map(document: &DocumentValue) -> CodecResult<Item> {
    let fields = document
        .as_object()
        .ok_or_else(|| CodecError::shape_mismatch("object", document.type_name()))?;
    encode_fields(fields, 0)
}

/// Encode an array document into a list of item values
///
/// # Errors
///
/// `ShapeMismatch` when the document is not an array.
pub fn json_array_to_list(document: &DocumentValue) -> CodecResult<Vec<ItemValue>> {
    let items = document
        .as_array()
        .ok_or_else(|| CodecError::shape_mismatch("array", document.type_name()))?;
    encode_elements(items, 0)
}

/// Decode a top-level item into an object document
pub fn map_to_json_object(item: &Item) -> CodecResult<DocumentValue> {
    decode_fields(item, 0).map(|fields| DocumentValue::from_value(serde_json::Value::Object(fields)))
}

/// Decode a list value into an array document
///
/// # Errors
///
/// `ShapeMismatch` when the value is not a list.
pub fn list_to_json_array(value: &ItemValue) -> CodecResult<DocumentValue> {
    let items = value
        .as_list()
        .ok_or_else(|| CodecError::shape_mismatch("list", value.tag()))?;
    decode_elements(items, 0).map(|items| DocumentValue::from_value(serde_json::Value::Array(items)))
}

/// Decode a sequence of stored items into an array of object documents
///
/// Each item is decoded as its own root, exactly as
/// [`map_to_json_object`] would. The surrounding array only exists for
/// presentation.
pub fn item_list_to_json_array(items: &[Item]) -> CodecResult<DocumentValue> {
    let objects = items
        .iter()
        .map(|item| decode_fields(item, 0).map(serde_json::Value::Object))
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(DocumentValue::from_value(serde_json::Value::Array(objects)))
}

// =============================================================================
// Encoding
// =============================================================================

fn encode_at(value: &serde_json::Value, depth: usize) -> CodecResult<ItemValue> {
    assert_depth(depth)?;
    let encoded = match value {
        serde_json::Value::Null => ItemValue::Null,
        serde_json::Value::Bool(b) => ItemValue::Bool(*b),
        serde_json::Value::Number(n) => {
            let text = n.to_string();
            parse_number(&text)?;
            ItemValue::Number(text)
        }
        serde_json::Value::String(s) => ItemValue::String(s.clone()),
        serde_json::Value::Array(items) => ItemValue::List(encode_elements(items, depth)?),
        serde_json::Value::Object(fields) => ItemValue::Map(encode_fields(fields, depth)?),
    };
    Ok(encoded)
}

fn encode_elements(items: &[serde_json::Value], depth: usize) -> CodecResult<Vec<ItemValue>> {
    assert_depth(depth)?;
    items.iter().map(|item| encode_at(item, depth + 1)).collect()
}

fn encode_fields(fields: &JsonMap, depth: usize) -> CodecResult<Item> {
    assert_depth(depth)?;
    fields
        .iter()
        .map(|(key, value)| Ok((key.clone(), encode_at(value, depth + 1)?)))
        .collect()
}

// =============================================================================
// Decoding
// =============================================================================

fn decode_at(value: &ItemValue, depth: usize) -> CodecResult<serde_json::Value> {
    assert_depth(depth)?;
    let decoded = match value {
        ItemValue::Null => serde_json::Value::Null,
        ItemValue::Bool(b) => serde_json::Value::Bool(*b),
        ItemValue::Number(text) => serde_json::Value::Number(parse_number(text)?),
        ItemValue::String(s) => serde_json::Value::String(s.clone()),
        ItemValue::List(items) => serde_json::Value::Array(decode_elements(items, depth)?),
        ItemValue::Map(fields) => serde_json::Value::Object(decode_fields(fields, depth)?),
    };
    Ok(decoded)
}

fn decode_elements(items: &[ItemValue], depth: usize) -> CodecResult<Vec<serde_json::Value>> {
    assert_depth(depth)?;
    items.iter().map(|item| decode_at(item, depth + 1)).collect()
}

fn decode_fields(fields: &Item, depth: usize) -> CodecResult<JsonMap> {
    assert_depth(depth)?;
    fields
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode_at(value, depth + 1)?)))
        .collect()
}

/// Parse number text into the document numeric domain
///
/// Tries `i64`, then `u64`, then a finite `f64`. Text that is already a
/// valid JSON number keeps its JSON form (`-0`, `1.50`); anything else the
/// domain accepts (`+5`) is rewritten in canonical form.
pub fn parse_number(text: &str) -> CodecResult<serde_json::Number> {
    let canonical = if let Ok(i) = text.parse::<i64>() {
        serde_json::Number::from(i)
    } else if let Ok(u) = text.parse::<u64>() {
        serde_json::Number::from(u)
    } else if is_integer_text(text) {
        return Err(CodecError::numeric(text, "integer out of 64-bit range"));
    } else {
        let f: f64 = text
            .parse()
            .map_err(|_| CodecError::numeric(text, "not a number"))?;
        serde_json::Number::from_f64(f)
            .ok_or_else(|| CodecError::numeric(text, "not a finite number"))?
    };
    Ok(text.parse().unwrap_or(canonical))
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
