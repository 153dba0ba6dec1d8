//! Item storage collaborators
//!
//! The service writes through [`ItemWriter`] and reads through
//! [`ItemReader`]. Both are `Send + Sync` so one store can back many
//! concurrent callers.
//!
//! [`InMemoryItemStore`] keeps items in a `DashMap` keyed by partition key.
//! Saving an item whose key already exists replaces it.

use crate::config::StoreConfig;
use crate::error::StorageError;
use attrstore_core::metadata::RESOURCE_TYPE;
use attrstore_core::{Item, ItemValue, PARTITION_KEY_ATTRIBUTE};
use dashmap::DashMap;

/// Persists encoded items
pub trait ItemWriter: Send + Sync {
    /// Save one item. The item must carry a string partition key attribute.
    fn save(&self, item: Item) -> Result<(), StorageError>;
}

/// Reads encoded items back
pub trait ItemReader: Send + Sync {
    /// Fetch the item stored under a partition key
    fn get(&self, partition_key: &str) -> Result<Option<Item>, StorageError>;

    /// Fetch every item whose `ResourceType` attribute equals `resource_type`
    fn find_by_type(&self, resource_type: &str) -> Result<Vec<Item>, StorageError>;
}

/// Extract the partition key a store should file an item under
pub fn require_partition_key(item: &Item) -> Result<&str, StorageError> {
    match item.get(PARTITION_KEY_ATTRIBUTE) {
        None => Err(StorageError::MissingPartitionKey),
        Some(ItemValue::String(key)) => Ok(key),
        Some(other) => Err(StorageError::InvalidPartitionKey { tag: other.tag() }),
    }
}

/// Concurrent in-memory table of items
#[derive(Debug)]
pub struct InMemoryItemStore {
    table_name: String,
    items: DashMap<String, Item>,
}

impl InMemoryItemStore {
    /// Create an empty table
    pub fn new(table_name: impl Into<String>) -> Self {
        InMemoryItemStore {
            table_name: table_name.into(),
            items: DashMap::new(),
        }
    }

    /// Create an empty table named by the config
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.table_name.clone())
    }

    /// Table name
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing has been saved
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl ItemWriter for InMemoryItemStore {
    fn save(&self, item: Item) -> Result<(), StorageError> {
        let key = require_partition_key(&item)?.to_string();
        self.items.insert(key, item);
        Ok(())
    }
}

impl ItemReader for InMemoryItemStore {
    fn get(&self, partition_key: &str) -> Result<Option<Item>, StorageError> {
        Ok(self
            .items
            .get(partition_key)
            .map(|entry| entry.value().clone()))
    }

    /// Results are ordered by partition key.
    fn find_by_type(&self, resource_type: &str) -> Result<Vec<Item>, StorageError> {
        let mut matches: Vec<(String, Item)> = self
            .items
            .iter()
            .filter(|entry| {
                entry.value().get(RESOURCE_TYPE).and_then(ItemValue::as_str) == Some(resource_type)
            })
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(matches.into_iter().map(|(_, item)| item).collect())
    }
}
