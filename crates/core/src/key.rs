//! Partition key derivation
//!
//! A resource's storage location is `"{resource_id}-{resource_type}"`,
//! written under [`PARTITION_KEY_ATTRIBUTE`] in the persisted item.

use crate::item::{Item, ItemValue};

/// Attribute name holding the partition key in every stored item
pub const PARTITION_KEY_ATTRIBUTE: &str = "PartitionKey";

/// Derive the partition key for a resource
///
/// ```
/// use attrstore_core::partition_key;
///
/// assert_eq!(partition_key("r1", "widget"), "r1-widget");
/// ```
pub fn partition_key(resource_id: &str, resource_type: &str) -> String {
    format!("{}-{}", resource_id, resource_type)
}

/// Write the partition key attribute into an item, replacing any previous
/// value under that name
pub fn insert_partition_key(item: &mut Item, key: impl Into<String>) {
    item.insert(
        PARTITION_KEY_ATTRIBUTE.to_string(),
        ItemValue::String(key.into()),
    );
}

/// Read the partition key attribute of an item, if it is a string
pub fn partition_key_of(item: &Item) -> Option<&str> {
    item.get(PARTITION_KEY_ATTRIBUTE).and_then(ItemValue::as_str)
}
