//! Resource bookkeeping metadata and document stamping
//!
//! Before a document is persisted, [`stamp`] writes four reserved keys into
//! it: [`RESOURCE_ID`], [`RESOURCE_TYPE`], [`VERSION`] and
//! [`LAST_UPDATED_TIME`]. Keys already present keep their position and take
//! the metadata's value; missing keys are appended in that order.

use crate::document::{type_name_of, DocumentValue};
use crate::error::{CodecError, CodecResult};
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// Reserved key holding the resource identifier
pub const RESOURCE_ID: &str = "ResourceId";
/// Reserved key holding the resource type
pub const RESOURCE_TYPE: &str = "ResourceType";
/// Reserved key holding the resource version
pub const VERSION: &str = "Version";
/// Reserved key holding the last update time (epoch milliseconds)
pub const LAST_UPDATED_TIME: &str = "LastUpdatedTime";

/// All keys written by [`stamp`], in insertion order
pub const RESERVED_KEYS: [&str; 4] = [RESOURCE_ID, RESOURCE_TYPE, VERSION, LAST_UPDATED_TIME];

/// Bookkeeping for one persisted resource
///
/// Built once per write and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    resource_id: String,
    resource_type: String,
    version: NonZeroU64,
    last_created_time: Timestamp,
    last_updated_time: Timestamp,
}

impl ResourceMetadata {
    /// Create metadata with every field given explicitly
    pub fn new(
        resource_id: impl Into<String>,
        resource_type: impl Into<String>,
        version: NonZeroU64,
        last_created_time: Timestamp,
        last_updated_time: Timestamp,
    ) -> Self {
        ResourceMetadata {
            resource_id: resource_id.into(),
            resource_type: resource_type.into(),
            version,
            last_created_time,
            last_updated_time,
        }
    }

    /// Metadata for a freshly created resource: version 1, created and
    /// updated at `now`
    pub fn for_creation(
        resource_id: impl Into<String>,
        resource_type: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self::new(resource_id, resource_type, NonZeroU64::MIN, now, now)
    }

    /// Resource identifier
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Resource type
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Resource version (always at least 1)
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    /// Creation time
    pub fn last_created_time(&self) -> Timestamp {
        self.last_created_time
    }

    /// Last update time
    pub fn last_updated_time(&self) -> Timestamp {
        self.last_updated_time
    }
}

/// Merge the reserved bookkeeping keys into an object document
///
/// Consumes the document and returns the stamped object. Stamping an
/// already stamped document replaces the four reserved values in place.
///
/// # Errors
///
/// `NotAnObject` when the document is not an object. Nothing is returned
/// in that case.
///
/// # Examples
///
/// ```
/// use attrstore_core::{stamp, DocumentValue, ResourceMetadata, Timestamp};
///
/// let doc: DocumentValue = r#"{"name":"widget"}"#.parse().unwrap();
/// let meta = ResourceMetadata::for_creation("r1", "widget", Timestamp::from_millis(1000));
/// let stamped = stamp(doc, &meta).unwrap();
/// assert_eq!(
///     stamped.to_json_string(),
///     r#"{"name":"widget","ResourceId":"r1","ResourceType":"widget","Version":1,"LastUpdatedTime":1000}"#
/// );
/// ```
pub fn stamp(document: DocumentValue, metadata: &ResourceMetadata) -> CodecResult<DocumentValue> {
    let mut fields = match document.into_inner() {
        serde_json::Value::Object(fields) => fields,
        other => {
            return Err(CodecError::NotAnObject {
                found: type_name_of(&other),
            })
        }
    };

    fields.insert(
        RESOURCE_ID.to_string(),
        serde_json::Value::String(metadata.resource_id.clone()),
    );
    fields.insert(
        RESOURCE_TYPE.to_string(),
        serde_json::Value::String(metadata.resource_type.clone()),
    );
    fields.insert(
        VERSION.to_string(),
        serde_json::Value::Number(metadata.version().into()),
    );
    fields.insert(
        LAST_UPDATED_TIME.to_string(),
        serde_json::Value::Number(metadata.last_updated_time.as_millis().into()),
    );

    Ok(DocumentValue::from_value(serde_json::Value::Object(fields)))
}
