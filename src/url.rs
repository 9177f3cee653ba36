//! Query string serialisation.
//!
//! The inverse of the parsers: clients build `fields` and `include`
//! parameters from structured data, e.g.
//! `{ "fields": { "user": ["id", "name"] }, "include": ["profile"] }`
//! becomes `?fields%5Buser%5D=id%2Cname&include=profile`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

/// Characters escaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Text of a value as it appears in a list or parameter.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Serialise `data` into a URL query string.
///
/// `null` yields an empty string and a JSON string is returned verbatim.
/// Objects become `key=value` pairs: arrays are joined with `,` and nested
/// objects expand into `key[sub]=value` pairs. Other shapes yield an empty
/// string.
///
/// # Examples
///
/// ```
/// use selectq::build_url_query_string;
/// use serde_json::json;
///
/// let query = build_url_query_string(&json!({ "include": ["profile", "roles"] }), true);
/// assert_eq!(query, "?include=profile%2Croles");
/// ```
#[must_use]
pub fn build_url_query_string(data: &Value, with_question_mark: bool) -> String {
    let map = match data {
        Value::String(s) => return s.clone(),
        Value::Object(map) => map,
        _ => return String::new(),
    };

    let mut query = Vec::with_capacity(map.len());
    for (key, value) in map {
        if let Value::Object(nested) = value {
            query.extend(nested.iter().map(|(sub, v)| {
                format!("{}={}", encode(&format!("{key}[{sub}]")), encode(&value_text(v)))
            }));
            continue;
        }
        query.push(format!("{}={}", encode(key), encode(&value_text(value))));
    }

    let prefix = if with_question_mark { "?" } else { "" };
    format!("{prefix}{}", query.join("&"))
}
