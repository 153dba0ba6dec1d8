//! ResourceService: create and read typed resources
//!
//! ## Write path
//!
//! `create` parses the resource text, assigns a fresh id and timestamp,
//! stamps version-1 metadata into the document, encodes it into an item,
//! adds the partition key and saves. A failure at any step returns before
//! the writer is called, so a rejected resource leaves no trace in storage.
//!
//! ## Read path
//!
//! `get` and `list` fetch items and decode them back into documents. The
//! partition key attribute is storage bookkeeping and is removed first.
//!
//! ## Thread Safety
//!
//! ResourceService holds only `Arc`s to `Send + Sync` collaborators and can
//! be shared across threads.

use crate::config::{StoreConfig, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use crate::ids::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::storage::{InMemoryItemStore, ItemReader, ItemWriter};
use attrstore_core::{
    insert_partition_key, item_list_to_json_array, json_object_to_map, map_to_json_object,
    partition_key, stamp, DocumentValue, Item, ResourceMetadata, PARTITION_KEY_ATTRIBUTE,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Creates and reads resources through pluggable storage
#[derive(Clone)]
pub struct ResourceService {
    writer: Arc<dyn ItemWriter>,
    reader: Arc<dyn ItemReader>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ResourceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService").finish_non_exhaustive()
    }
}

impl ResourceService {
    /// Create a service over separate writer and reader, with UUID ids and
    /// the system clock
    pub fn new(writer: Arc<dyn ItemWriter>, reader: Arc<dyn ItemReader>) -> Self {
        ResourceService {
            writer,
            reader,
            ids: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a service over one store that both reads and writes
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: ItemWriter + ItemReader + 'static,
    {
        let writer: Arc<dyn ItemWriter> = store.clone();
        let reader: Arc<dyn ItemReader> = store;
        Self::new(writer, reader)
    }

    /// Create a service over a fresh in-memory table named by the config
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        info!(target: "attrstore::service", table = %config.table_name, "Opening in-memory store");
        Ok(Self::with_store(Arc::new(InMemoryItemStore::from_config(
            config,
        ))))
    }

    /// Open the store described by `attrstore.toml` in `dir`
    ///
    /// Writes the default config first if the directory has none, so a fresh
    /// directory opens with the default table.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        StoreConfig::write_default_if_missing(&path)?;
        let config = StoreConfig::from_file(&path)?;
        Self::from_config(&config)
    }

    /// Replace the id source
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Create a resource from JSON text
    ///
    /// Returns the stamped document that was persisted.
    ///
    /// # Errors
    ///
    /// - `InvalidDocument` if the text is not JSON
    /// - `InvalidInput` if `resource_type` is empty or the document carries
    ///   its own `PartitionKey` field
    /// - `Codec` if the document is not an object, nests too deeply or holds
    ///   an integer outside the 64-bit range
    /// - `Storage` if the writer rejects the item
    pub fn create(&self, resource_text: &str, resource_type: &str) -> Result<DocumentValue> {
        let document: DocumentValue = resource_text.parse().map_err(|e| {
            warn!(target: "attrstore::service", error = %e, "Rejected unparsable resource");
            Error::InvalidDocument(e)
        })?;
        self.create_document(document, resource_type)
    }

    /// Create a resource from an already parsed document
    pub fn create_document(
        &self,
        document: DocumentValue,
        resource_type: &str,
    ) -> Result<DocumentValue> {
        if resource_type.is_empty() {
            return Err(Error::invalid_input("resource type must not be empty"));
        }
        if document.get(PARTITION_KEY_ATTRIBUTE).is_some() {
            warn!(target: "attrstore::service", resource_type, "Rejected resource carrying a partition key");
            return Err(Error::invalid_input(format!(
                "'{}' is reserved for storage and may not appear in a resource",
                PARTITION_KEY_ATTRIBUTE
            )));
        }

        let resource_id = self.ids.next_id();
        let metadata = ResourceMetadata::for_creation(resource_id, resource_type, self.clock.now());
        let stamped = stamp(document, &metadata).map_err(|e| self.codec_failure(e))?;
        let mut item = json_object_to_map(&stamped).map_err(|e| self.codec_failure(e))?;

        let key = partition_key(metadata.resource_id(), metadata.resource_type());
        insert_partition_key(&mut item, key.clone());
        debug!(target: "attrstore::service", partition_key = %key, attributes = item.len(), "Encoded resource");

        self.writer.save(item).map_err(|e| {
            warn!(target: "attrstore::service", partition_key = %key, error = %e, "Storage rejected resource");
            Error::Storage(e)
        })?;

        info!(
            target: "attrstore::service",
            resource_id = metadata.resource_id(),
            resource_type = metadata.resource_type(),
            partition_key = %key,
            "Resource created"
        );
        Ok(stamped)
    }

    /// Fetch one resource
    ///
    /// Returns `None` if nothing is stored under the derived partition key.
    pub fn get(&self, resource_id: &str, resource_type: &str) -> Result<Option<DocumentValue>> {
        let key = partition_key(resource_id, resource_type);
        let Some(mut item) = self.reader.get(&key)? else {
            debug!(target: "attrstore::service", partition_key = %key, "Resource not found");
            return Ok(None);
        };
        strip_partition_key(&mut item);
        let document = map_to_json_object(&item).map_err(|e| self.codec_failure(e))?;
        Ok(Some(document))
    }

    /// Fetch every resource of a type as one array document
    pub fn list(&self, resource_type: &str) -> Result<DocumentValue> {
        let mut items = self.reader.find_by_type(resource_type)?;
        items.iter_mut().for_each(strip_partition_key);
        debug!(target: "attrstore::service", resource_type, count = items.len(), "Decoding resources");
        item_list_to_json_array(&items).map_err(|e| self.codec_failure(e))
    }

    fn codec_failure(&self, err: attrstore_core::CodecError) -> Error {
        warn!(target: "attrstore::service", reason = err.reason_code(), error = %err, "Codec error aborted request");
        Error::Codec(err)
    }
}

fn strip_partition_key(item: &mut Item) {
    item.remove(PARTITION_KEY_ATTRIBUTE);
}
