//! Error types for the item codec
//!
//! Every failure in this crate is structural: the same input always fails
//! the same way. We use `thiserror` for `Display` and `Error` implementations.

use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors raised while converting, parsing or stamping values
///
/// Each error is terminal for the conversion that raised it: no partial
/// output is ever returned alongside an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Recursion went past the nesting ceiling
    #[error("nesting depth {depth} exceeds maximum of {max} levels")]
    DepthExceeded {
        /// Depth at which the violation was detected
        depth: usize,
        /// Maximum allowed depth
        max: usize,
    },

    /// A value carries a type tag outside the supported set
    #[error("unsupported attribute type '{tag}'")]
    UnsupportedVariant {
        /// The offending tag
        tag: String,
    },

    /// An entry point was handed a value of the wrong shape
    #[error("expected {expected}, found {found}")]
    ShapeMismatch {
        /// What the entry point accepts
        expected: &'static str,
        /// What it received
        found: String,
    },

    /// Stored number text is not a number in the supported domain
    #[error("'{text}' is not a valid number: {reason}")]
    NumericParse {
        /// The stored text
        text: String,
        /// Why parsing failed
        reason: &'static str,
    },

    /// Stamping was attempted on something other than an object
    #[error("metadata can only be stamped onto an object, found {found}")]
    NotAnObject {
        /// Type name of the rejected document
        found: &'static str,
    },
}

impl CodecError {
    /// Build a shape mismatch error
    pub fn shape_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        CodecError::ShapeMismatch {
            expected,
            found: found.into(),
        }
    }

    /// Build an unsupported variant error
    pub fn unsupported(tag: impl Into<String>) -> Self {
        CodecError::UnsupportedVariant { tag: tag.into() }
    }

    /// Build a numeric parse error
    pub fn numeric(text: impl Into<String>, reason: &'static str) -> Self {
        CodecError::NumericParse {
            text: text.into(),
            reason,
        }
    }

    /// Short reason code, stable across releases
    pub fn reason_code(&self) -> &'static str {
        match self {
            CodecError::DepthExceeded { .. } => "depth_exceeded",
            CodecError::UnsupportedVariant { .. } => "unsupported_variant",
            CodecError::ShapeMismatch { .. } => "shape_mismatch",
            CodecError::NumericParse { .. } => "numeric_parse",
            CodecError::NotAnObject { .. } => "not_an_object",
        }
    }

    /// Whether repeating the call could succeed
    ///
    /// Always false: the same input fails the same way.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
