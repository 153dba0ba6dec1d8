//! Nesting limit for recursive conversions
//!
//! Every recursive step of the codec and of the wire parser calls
//! [`assert_depth`] before doing any work, so a value can never drive the
//! recursion deeper than [`MAX_NESTING_DEPTH`] frames.
//!
//! ## Counting
//!
//! The root value sits at depth 0 and each child sits one level below its
//! container. A value whose deepest node is at depth 50 converts; one node
//! deeper fails with [`CodecError::DepthExceeded`].
//!
//! The ceiling is fixed. Callers that want a tighter bound check
//! [`DocumentValue::depth`](crate::DocumentValue::depth) before converting.

use crate::error::{CodecError, CodecResult};

/// Maximum nesting depth of a document or item (50 levels)
pub const MAX_NESTING_DEPTH: usize = 50;

/// Fail with [`CodecError::DepthExceeded`] when `depth` is past the ceiling
#[inline]
pub fn assert_depth(depth: usize) -> CodecResult<()> {
    if depth > MAX_NESTING_DEPTH {
        tracing::debug!(depth, max = MAX_NESTING_DEPTH, "nesting ceiling reached");
        return Err(CodecError::DepthExceeded {
            depth,
            max: MAX_NESTING_DEPTH,
        });
    }
    Ok(())
}
