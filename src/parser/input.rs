//! Raw request values.
//!
//! Query parameters arrive in several shapes depending on how the request
//! was decoded: `fields=id,name`, `fields[]=id&fields[]=name` or
//! `fields[user]=id`. [`QueryInput`] captures those shapes once at the entry
//! point so the parsers can match on them instead of sniffing types.

use indexmap::IndexMap;
use serde_json::Value;

/// A decoded query parameter value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryInput {
    /// The parameter was not sent.
    #[default]
    Absent,
    /// A comma separated list, e.g. `id,+name`.
    String(String),
    /// A list of entries. Non-string elements are dropped on conversion.
    Array(Vec<String>),
    /// Entries grouped by domain, e.g. `{ "user": "id,name" }`.
    Object(IndexMap<String, QueryInput>),
    /// Any other shape (numbers, booleans, `null`).
    Unsupported,
}

impl QueryInput {
    /// Comma separated strings held by this value.
    ///
    /// Strings yield one entry, arrays one entry per element. Every other
    /// shape yields nothing.
    #[must_use]
    pub fn strings(&self) -> Vec<&str> {
        match self {
            Self::String(s) => vec![s.as_str()],
            Self::Array(items) => items.iter().map(String::as_str).collect(),
            Self::Absent | Self::Object(_) | Self::Unsupported => Vec::new(),
        }
    }
}

impl From<&Value> for QueryInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::Array(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            Value::Object(map) => Self::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => Self::Unsupported,
        }
    }
}

impl From<Value> for QueryInput {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&str> for QueryInput {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<&str>> for QueryInput {
    fn from(items: Vec<&str>) -> Self {
        Self::Array(items.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for QueryInput {
    fn from(items: Vec<String>) -> Self {
        Self::Array(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for QueryInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
