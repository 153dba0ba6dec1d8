//! Core types for attrstore
//!
//! This crate defines the two value models and the transforms between them:
//! - DocumentValue: JSON-like document tree used at the application boundary
//! - ItemValue / Item: typed attribute-value tree persisted by the store
//! - codec: depth-bounded encode/decode between the two models
//! - limits: the nesting ceiling and its guard
//! - metadata: ResourceMetadata and document stamping
//! - key: partition key derivation
//! - CodecError: error taxonomy for all of the above

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod document;
pub mod error;
pub mod item;
pub mod key;
pub mod limits;
pub mod metadata;
pub mod timestamp;

pub use codec::{
    decode, encode, item_list_to_json_array, json_array_to_list, json_object_to_map,
    list_to_json_array, map_to_json_object, parse_number,
};
pub use document::DocumentValue;
pub use error::{CodecError, CodecResult};
pub use item::{item_from_wire, item_to_wire, Item, ItemValue};
pub use key::{insert_partition_key, partition_key, partition_key_of, PARTITION_KEY_ATTRIBUTE};
pub use limits::{assert_depth, MAX_NESTING_DEPTH};
pub use metadata::{stamp, ResourceMetadata, RESERVED_KEYS};
pub use timestamp::Timestamp;
