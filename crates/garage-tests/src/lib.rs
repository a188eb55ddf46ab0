//! Integration tests for garage vehicle info decoding
//!
//! This crate holds recorded `garage/vehicles/{vin}` responses under
//! `fixtures/` and tests that run them through the public `garage-core` API.
//!
//! # Test Structure
//!
//! - `snapshot_test.rs` - decoding recorded responses end to end
//! - `capability_test.rs` - availability rules and unknown capability handling

use std::path::PathBuf;

use serde_json::Value;

/// Path of a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Raw bytes of a fixture file
pub fn fixture_bytes(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

/// A fixture parsed as untyped JSON, for tests that edit the document
pub fn fixture_json(name: &str) -> Value {
    serde_json::from_slice(&fixture_bytes(name))
        .unwrap_or_else(|e| panic!("fixture {name} is not valid JSON: {e}"))
}

/// Replace the raw capability list of a vehicle info document
pub fn with_capabilities(mut document: Value, capabilities: Value) -> Value {
    document["capabilities"]["capabilities"] = capabilities;
    document
}
