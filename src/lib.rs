//! Library crate for selectq.
//!
//! Normalises client-supplied `fields` and `include` query parameters into
//! canonical, allow-listed and alias-resolved selections that a data-access
//! layer can consume safely.

#![forbid(unsafe_code)]

pub mod alias;
pub mod error;
pub mod language;
pub mod matcher;
pub mod parser;
pub mod syntax_utils;
pub mod tokenizer;
pub mod url;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::ConfigError;
pub use language::SyntaxKind;
pub use matcher::{GlobMatcher, Matcher};
pub use parser::{
    DEFAULT_ALIAS_ID, DomainFieldsInput, FieldSelection, FieldsParseOptions, FieldsParseOutput,
    IncludeParents, QueryInput, RelationSelection, RelationsParseOptions, RelationsParseOutput,
    build_field_domain_records, parse_query_fields, parse_query_relations,
    parse_query_relations_with,
};
pub use tokenizer::{Span, tokenize, tokenize_with_trivia, tokenize_without_trivia};
pub use url::build_url_query_string;
