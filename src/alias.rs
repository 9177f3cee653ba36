//! Alias mappings between requested and canonical names.
//!
//! Clients may refer to fields, domains and relations by public aliases.
//! Both parsers turn the configured [`AliasMappingInput`] into an
//! [`AliasMapping`] once per call and resolve every requested name through
//! it before checking the allow-list.

use indexmap::IndexMap;
use serde::Deserialize;

/// Requested name to canonical name.
pub type AliasMapping = IndexMap<String, String>;

/// Alias configuration as supplied by the server policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AliasMappingInput {
    /// Canonical names which map to themselves.
    List(Vec<String>),
    /// Explicit alias to canonical name pairs.
    Map(IndexMap<String, String>),
}

impl From<Vec<&str>> for AliasMappingInput {
    fn from(names: Vec<&str>) -> Self {
        Self::List(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for AliasMappingInput {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Map(
            pairs
                .into_iter()
                .map(|(alias, name)| (alias.to_string(), name.to_string()))
                .collect(),
        )
    }
}

/// Build an [`AliasMapping`] from the configured input.
///
/// A flat list yields the identity mapping; an explicit map is copied as is.
///
/// # Examples
///
/// ```
/// use selectq::alias::{build_alias_mapping, AliasMappingInput};
///
/// let mapping = build_alias_mapping(&AliasMappingInput::from(vec!["id"]));
/// assert_eq!(mapping.get("id").map(String::as_str), Some("id"));
///
/// let mapping = build_alias_mapping(&AliasMappingInput::from([("idAlias", "id")]));
/// assert_eq!(mapping.get("idAlias").map(String::as_str), Some("id"));
/// ```
#[must_use]
pub fn build_alias_mapping(input: &AliasMappingInput) -> AliasMapping {
    match input {
        AliasMappingInput::List(names) => names
            .iter()
            .map(|name| (name.clone(), name.clone()))
            .collect(),
        AliasMappingInput::Map(map) => map.clone(),
    }
}

/// Like [`build_alias_mapping`], treating an absent input as the empty mapping.
#[must_use]
pub fn build_optional_alias_mapping(input: Option<&AliasMappingInput>) -> AliasMapping {
    input.map(build_alias_mapping).unwrap_or_default()
}

/// Resolve `name` through `mapping`, passing unknown names through unchanged.
#[must_use]
pub fn name_by_alias_mapping<'a>(name: &'a str, mapping: &'a AliasMapping) -> &'a str {
    mapping.get(name).map_or(name, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_mapping_from_list() {
        let mapping = build_alias_mapping(&AliasMappingInput::from(vec!["id", "name"]));
        let pairs: Vec<(&str, &str)> = mapping
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("id", "id"), ("name", "name")]);
    }

    #[rstest]
    fn explicit_mapping_is_kept() {
        let mapping = build_alias_mapping(&AliasMappingInput::from([("idAlias", "id")]));
        assert_eq!(mapping.len(), 1);
        assert_eq!(name_by_alias_mapping("idAlias", &mapping), "id");
    }

    #[rstest]
    #[case("id", "id")]
    #[case("alias", "id")]
    #[case("unknown", "unknown")]
    #[case("", "")]
    fn resolves_or_passes_through(#[case] name: &str, #[case] expected: &str) {
        let mapping = build_alias_mapping(&AliasMappingInput::from([("alias", "id")]));
        assert_eq!(name_by_alias_mapping(name, &mapping), expected);
    }

    #[rstest]
    fn absent_input_is_empty() {
        assert!(build_optional_alias_mapping(None).is_empty());
    }
}
