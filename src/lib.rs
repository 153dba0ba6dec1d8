//! attrstore - typed attribute-value storage for JSON resources
//!
//! attrstore converts JSON-like documents into the typed attribute-value
//! items a key-value table stores, and back again, with a hard nesting
//! ceiling of [`MAX_NESTING_DEPTH`] levels.
//!
//! # Quick Start
//!
//! ```
//! use attrstore::{ResourceService, StoreConfig};
//!
//! let service = ResourceService::from_config(&StoreConfig::default())?;
//! let created = service.create(r#"{"name":"widget"}"#, "widget")?;
//!
//! let id = created["ResourceId"].as_str().unwrap_or_default();
//! let fetched = service.get(id, "widget")?;
//! assert_eq!(fetched, Some(created));
//! # Ok::<(), attrstore::Error>(())
//! ```
//!
//! # Architecture
//!
//! The pure codec, stamper and key derivation live in `attrstore-core`.
//! `attrstore-engine` adds configuration, storage collaborators and the
//! [`ResourceService`] that ties them together.

pub use attrstore_core::*;
pub use attrstore_engine::{
    require_partition_key, Clock, Error, FixedClock, IdGenerator, InMemoryItemStore, ItemReader,
    ItemWriter, ResourceService, Result, SequentialIdGenerator, StorageError, StoreConfig,
    SystemClock, UuidGenerator, CONFIG_FILE_NAME, DEFAULT_TABLE_NAME,
};
