//! Shared helpers for parser tests.
//!
//! Utilities here support concise feature-focused parser tests.

use crate::parser::{
    FieldsParseOptions, FieldsParseOutput, QueryInput, RelationsParseOptions,
    RelationsParseOutput, parse_query_fields, parse_query_relations,
};
use crate::test_util::expect_relations;

/// Parse `fields` given as JSON.
pub(super) fn fields(input: serde_json::Value, options: &FieldsParseOptions) -> FieldsParseOutput {
    parse_query_fields(&QueryInput::from(input), options)
}

/// Parse `include` given as JSON, failing the test on configuration errors.
pub(super) fn relations(
    input: serde_json::Value,
    options: &RelationsParseOptions,
) -> RelationsParseOutput {
    expect_relations(parse_query_relations(&QueryInput::from(input), options))
}
