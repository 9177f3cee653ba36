//! Parsers for the `fields` and `include` query parameters.
//!
//! Both parsers take a [`QueryInput`] describing the raw parameter and a
//! policy describing what may be requested, and return a fresh,
//! deduplicated selection. They are pure functions: options are borrowed
//! immutably and normalised into a private per-call policy.
//!
//! Field selection may depend on the outcome of relation parsing: passing
//! the parsed relations as [`FieldsParseOptions::relations`] restricts field
//! selection to the domains of included relations.

mod input;
pub use input::QueryInput;

pub mod fields;
pub mod relations;
pub mod selector;

pub use fields::{
    DEFAULT_ALIAS_ID, DomainFields, DomainFieldsInput, FieldSelection, FieldsParseOptions,
    FieldsParseOutput, build_field_domain_records, is_domain_included, parse_query_fields,
};
pub use relations::{
    IncludeParents, RelationSelection, RelationsParseOptions, RelationsParseOutput,
    parse_query_relations, parse_query_relations_with,
};

#[cfg(test)]
mod tests;
