//! Error types for the resource engine
//!
//! Codec failures are carried through unchanged inside [`Error::Codec`];
//! storage collaborators report through [`StorageError`].

use attrstore_core::CodecError;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the resource engine
#[derive(Debug, Error)]
pub enum Error {
    /// Resource text is not valid JSON
    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// Caller supplied an unusable argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Conversion or stamping failed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// The storage collaborator rejected the request
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be read, parsed or written
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Build an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Build a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True if the failure came from the codec
    pub fn is_codec(&self) -> bool {
        matches!(self, Error::Codec(_))
    }
}

/// Errors raised by item storage
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Item has no partition key attribute
    #[error("item has no partition key attribute")]
    MissingPartitionKey,

    /// Partition key attribute is not a string
    #[error("partition key must be a string attribute, found {tag}")]
    InvalidPartitionKey {
        /// Type tag of the stored attribute
        tag: &'static str,
    },

    /// Backend-specific failure
    #[error("{0}")]
    Backend(String),
}
