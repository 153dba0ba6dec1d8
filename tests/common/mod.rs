//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use attrstore::{
    DocumentValue, FixedClock, InMemoryItemStore, ResourceService, SequentialIdGenerator,
    Timestamp,
};
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// Initialization
// ============================================================================

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Services
// ============================================================================

/// Service over a fresh in-memory table with ids `r1, r2, ...` and a clock
/// frozen at 1000ms.
pub fn fixed_service() -> (ResourceService, Arc<InMemoryItemStore>) {
    init_tracing();
    let store = Arc::new(InMemoryItemStore::default());
    let service = ResourceService::with_store(Arc::clone(&store))
        .with_id_generator(Arc::new(SequentialIdGenerator::new("r")))
        .with_clock(Arc::new(FixedClock(Timestamp::from_millis(1000))));
    (service, store)
}

// ============================================================================
// Document builders
// ============================================================================

/// Wrap a serde_json value
pub fn doc(value: Value) -> DocumentValue {
    DocumentValue::from_value(value)
}

/// Object chain whose deepest node sits at `depth` (root at 0).
pub fn nested_objects(depth: usize) -> DocumentValue {
    let mut value = json!("leaf");
    for _ in 0..depth {
        value = json!({ "child": value });
    }
    doc(value)
}

/// Array chain whose deepest node sits at `depth` (root at 0).
pub fn nested_arrays(depth: usize) -> DocumentValue {
    let mut value = json!(0);
    for _ in 0..depth {
        value = json!([value]);
    }
    doc(value)
}
