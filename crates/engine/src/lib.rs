//! Resource engine for attrstore
//!
//! This crate wires the core codec to storage:
//! - ResourceService: create, get and list resources
//! - Storage collaborators (ItemWriter / ItemReader) and an in-memory table
//! - Id and clock sources
//! - StoreConfig loaded from `attrstore.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod ids;
pub mod service;
pub mod storage;

pub use config::{StoreConfig, CONFIG_FILE_NAME, DEFAULT_TABLE_NAME};
pub use error::{Error, Result, StorageError};
pub use ids::{Clock, FixedClock, IdGenerator, SequentialIdGenerator, SystemClock, UuidGenerator};
pub use service::ResourceService;
pub use storage::{require_partition_key, InMemoryItemStore, ItemReader, ItemWriter};
