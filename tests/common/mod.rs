//! Shared test utilities for integration tests

#![allow(dead_code)]

use dataproducts_queries::{parser, SelectQuery};
use serde_json::Value;

/// Path of a fixture in the tests/test_data directory
pub fn fixture_path(name: &str) -> String {
    format!("tests/test_data/{}", name)
}

/// Raw text of a fixture
pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test data {}: {}", name, e))
}

/// Load a fixture as a typed query
pub fn load_fixture(name: &str) -> SelectQuery {
    parser::parse_file(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Parse text into a JSON object, panicking with context otherwise
pub fn as_object(text: &str) -> serde_json::Map<String, Value> {
    match parser::parse_value(text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => panic!("Expected a JSON object, got {}", other),
        Err(e) => panic!("Document does not parse: {}", e),
    }
}

/// Build an event row from (dimension, value) pairs
pub fn row(pairs: &[(&str, &str)]) -> serde_json::Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}
