//! Shared test utilities for integration tests.
//!
//! These helpers build expected selections. They mirror a subset of the
//! `selectq::test_util` module without requiring the `test-support` feature,
//! enabling integration tests to compile against the published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use selectq::{
    FieldSelection, FieldsParseOptions, FieldsParseOutput, QueryInput, RelationSelection,
    RelationsParseOptions, RelationsParseOutput, parse_query_fields, parse_query_relations,
};

/// A field of the implicit domain.
#[must_use]
pub fn field(key: &str) -> FieldSelection {
    FieldSelection::new(key)
}

/// A field of the named domain.
#[must_use]
pub fn aliased(alias: &str, key: &str) -> FieldSelection {
    FieldSelection::aliased(alias, key)
}

/// A relation with the given key and value.
#[must_use]
pub fn relation(key: &str, value: &str) -> RelationSelection {
    RelationSelection {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Parse `fields` given as JSON.
#[must_use]
pub fn fields(input: serde_json::Value, options: &FieldsParseOptions) -> FieldsParseOutput {
    parse_query_fields(&QueryInput::from(input), options)
}

/// Parse `include` given as JSON, panicking on configuration errors.
#[must_use]
pub fn relations(input: serde_json::Value, options: &RelationsParseOptions) -> RelationsParseOutput {
    parse_query_relations(&QueryInput::from(input), options)
        .unwrap_or_else(|e| panic!("unexpected configuration error: {e}"))
}
