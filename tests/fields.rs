//! Integration tests for field selection through the public API.

mod test_util;

use rstest::rstest;
use selectq::{
    DEFAULT_ALIAS_ID, DomainFieldsInput, FieldsParseOptions, QueryInput, RelationsParseOptions,
    build_field_domain_records, parse_query_fields,
};
use serde_json::json;
use test_util::{aliased, field, fields, relations};

#[rstest]
fn transforms_allowed_domain_fields() {
    let records = build_field_domain_records(Some(&DomainFieldsInput::from(vec!["id", "name"])));
    assert_eq!(
        records.get(DEFAULT_ALIAS_ID),
        Some(&vec!["id".to_string(), "name".to_string()])
    );
    assert_eq!(records.len(), 1);
}

#[rstest]
fn transforms_fields_with_default_alias() {
    let options = FieldsParseOptions::default()
        .with_allowed([
            ("user", vec!["id", "name", "email"]),
            ("domain", vec!["extra"]),
        ])
        .with_default_alias("user");

    assert_eq!(
        fields(json!("+email"), &options),
        vec![aliased("user", "email"), aliased("domain", "extra")]
    );
    assert_eq!(
        fields(json!({ "domain": "+extra" }), &options),
        vec![
            aliased("user", "id"),
            aliased("user", "name"),
            aliased("user", "email"),
            aliased("domain", "extra"),
        ]
    );
}

#[rstest]
fn absent_fields_use_allowed_then_default() {
    let options = FieldsParseOptions::default().with_allowed(vec!["id", "name"]);
    assert_eq!(
        parse_query_fields(&QueryInput::Absent, &options),
        vec![field("id"), field("name")]
    );
    let options = options.with_default(vec!["id"]);
    assert_eq!(
        parse_query_fields(&QueryInput::from(None::<&str>), &options),
        vec![field("id")]
    );
}

#[rstest]
fn fields_restricted_to_included_relations() {
    let includes = relations(
        json!(["profile", "roles"]),
        &RelationsParseOptions::default().with_allowed(["user", "profile"]),
    );
    let options = FieldsParseOptions::default()
        .with_allowed([("profile", vec!["id"]), ("permissions", vec!["id"])])
        .with_relations(includes);
    assert_eq!(
        fields(json!({ "profile": ["id"], "permissions": ["id"] }), &options),
        vec![aliased("profile", "id")]
    );
}

#[rstest]
fn output_serialises_without_empty_alias() {
    let options = FieldsParseOptions::default().with_allowed(vec!["id"]);
    let parsed = fields(json!("id"), &options);
    let encoded = serde_json::to_value(&parsed).unwrap_or_else(|e| panic!("encode: {e}"));
    assert_eq!(encoded, json!([{ "key": "id" }]));
}
