//! Helpers for building expected selections in tests.
//!
//! These functions reduce boilerplate when comparing parser output against
//! literal expectations.

use crate::{ConfigError, FieldSelection, RelationSelection, RelationsParseOutput};

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

/// Keys of `relations`, in order.
#[must_use]
pub fn relation_keys(relations: &[RelationSelection]) -> Vec<&str> {
    relations.iter().map(|r| r.key.as_str()).collect()
}

/// Unwrap a relation parse that is expected to accept the policy.
///
/// # Panics
///
/// Panics with the configuration error if `result` is an error.
#[must_use]
pub fn expect_relations(result: Result<RelationsParseOutput, ConfigError>) -> RelationsParseOutput {
    result.unwrap_or_else(|e| panic!("unexpected configuration error: {e}"))
}
