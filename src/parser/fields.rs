//! Field selection parsing.
//!
//! Resolves the `fields` query parameter into the output fields a client may
//! receive, grouped by domain. A domain is a named scope such as the root
//! resource (`user`) or an included relation (`profile`). Each domain has an
//! allow-list and optionally a default selection; clients replace the
//! selection with plain names, extend it with `+name` and shrink it with
//! `-name`.
//!
//! A flat allow-list or default list belongs to the implicit domain
//! [`DEFAULT_ALIAS_ID`], which is reported under `default_alias` (or without
//! alias when none is configured).
//!
//! # Examples
//!
//! ```rust
//! use selectq::{parse_query_fields, FieldSelection, FieldsParseOptions, QueryInput};
//!
//! let options = FieldsParseOptions::default()
//!     .with_allowed(vec!["id", "name", "email"])
//!     .with_default(vec!["id", "name"]);
//!
//! let fields = parse_query_fields(&QueryInput::from("+email"), &options);
//! assert_eq!(
//!     fields,
//!     vec![
//!         FieldSelection::new("id"),
//!         FieldSelection::new("name"),
//!         FieldSelection::new("email"),
//!     ]
//! );
//! ```

use indexmap::{IndexMap, IndexSet};
use log::debug;
use serde::{Deserialize, Serialize};

use super::QueryInput;
use super::relations::{RelationSelection, RelationsParseOutput};
use super::selector::{FieldOperator, FieldSelector};
use crate::ConfigError;
use crate::alias::{
    AliasMapping, AliasMappingInput, build_optional_alias_mapping, name_by_alias_mapping,
};
use crate::syntax_utils::split_top_level;

/// Domain key of flat allow-lists and default lists.
pub const DEFAULT_ALIAS_ID: &str = "__DEFAULT__";

/// Field names per domain, in declaration order.
pub type DomainFields = IndexMap<String, Vec<String>>;

/// Allowed or default fields as supplied by the server policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DomainFieldsInput {
    /// Fields of the implicit domain.
    List(Vec<String>),
    /// Fields per named domain.
    Domains(DomainFields),
}

impl From<Vec<&str>> for DomainFieldsInput {
    fn from(fields: Vec<&str>) -> Self {
        Self::List(fields.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[(&str, Vec<&str>); N]> for DomainFieldsInput {
    fn from(domains: [(&str, Vec<&str>); N]) -> Self {
        Self::Domains(
            domains
                .into_iter()
                .map(|(domain, fields)| {
                    (
                        domain.to_string(),
                        fields.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Group `input` by domain.
///
/// A flat list is placed under [`DEFAULT_ALIAS_ID`]; a mapping is copied as
/// is; an absent input yields no domains.
///
/// # Examples
///
/// ```
/// use selectq::{build_field_domain_records, DomainFieldsInput, DEFAULT_ALIAS_ID};
///
/// let records = build_field_domain_records(Some(&DomainFieldsInput::from(vec!["id"])));
/// assert_eq!(records.get(DEFAULT_ALIAS_ID), Some(&vec!["id".to_string()]));
/// assert!(build_field_domain_records(None).is_empty());
/// ```
#[must_use]
pub fn build_field_domain_records(input: Option<&DomainFieldsInput>) -> DomainFields {
    match input {
        Some(DomainFieldsInput::List(fields)) => {
            IndexMap::from([(DEFAULT_ALIAS_ID.to_string(), fields.clone())])
        }
        Some(DomainFieldsInput::Domains(domains)) => domains.clone(),
        None => IndexMap::new(),
    }
}

/// Policy for [`parse_query_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldsParseOptions {
    /// Fields a client may request. Nothing is allowed when absent, unless
    /// `default` names the domain.
    pub allowed: Option<DomainFieldsInput>,
    /// Fields selected when a domain is not narrowed by the request.
    pub default: Option<DomainFieldsInput>,
    /// Domain assumed for unscoped requests and reported for the implicit domain.
    pub default_alias: Option<String>,
    /// Public field and domain names and the names they stand for.
    pub alias_mapping: Option<AliasMappingInput>,
    /// Included relations; when present only their domains may be selected.
    pub relations: Option<RelationsParseOutput>,
}

impl FieldsParseOptions {
    /// Deserialise options from a JSON policy document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Options`] if `json` does not describe valid options.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_allowed(mut self, allowed: impl Into<DomainFieldsInput>) -> Self {
        self.allowed = Some(allowed.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<DomainFieldsInput>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn with_default_alias(mut self, alias: impl Into<String>) -> Self {
        self.default_alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_alias_mapping(mut self, mapping: impl Into<AliasMappingInput>) -> Self {
        self.alias_mapping = Some(mapping.into());
        self
    }

    #[must_use]
    pub fn with_relations(mut self, relations: RelationsParseOutput) -> Self {
        self.relations = Some(relations);
        self
    }
}

/// A field the data-access layer should select.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSelection {
    /// Canonical field name within its domain.
    pub key: String,
    /// Domain of the field; `None` for the implicit domain without a default alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl FieldSelection {
    /// A field of the implicit domain.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alias: None,
        }
    }

    /// A field of the named domain.
    #[must_use]
    pub fn aliased(alias: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alias: Some(alias.into()),
        }
    }
}

/// Result of [`parse_query_fields`].
pub type FieldsParseOutput = Vec<FieldSelection>;

/// Options normalised for a single call.
struct FieldsPolicy<'a> {
    allowed: DomainFields,
    defaults: DomainFields,
    /// Eligible domains: allowed ones first, then default-only ones.
    domains: Vec<String>,
    aliases: AliasMapping,
    default_alias: Option<&'a str>,
}

impl<'a> FieldsPolicy<'a> {
    fn new(options: &'a FieldsParseOptions) -> Option<Self> {
        let allowed = build_field_domain_records(options.allowed.as_ref());
        let defaults = build_field_domain_records(options.default.as_ref());
        if allowed.is_empty() && defaults.is_empty() {
            return None;
        }

        let default_alias = options.default_alias.as_deref();
        let domains = allowed
            .keys()
            .chain(defaults.keys())
            .collect::<IndexSet<_>>()
            .into_iter()
            .filter(|domain| {
                is_domain_included(domain, options.relations.as_deref(), default_alias)
            })
            .cloned()
            .collect();

        Some(Self {
            allowed,
            defaults,
            domains,
            aliases: build_optional_alias_mapping(options.alias_mapping.as_ref()),
            default_alias,
        })
    }

    /// The eligible domain addressed by `name`.
    ///
    /// The default alias addresses the implicit domain when the policy has no
    /// domain of that name.
    fn resolve_domain(&self, name: &str) -> Option<&str> {
        if let Some(domain) = self.domains.iter().find(|d| *d == name) {
            return Some(domain.as_str());
        }
        if self.default_alias == Some(name) && self.has_domain(DEFAULT_ALIAS_ID) {
            return Some(DEFAULT_ALIAS_ID);
        }
        None
    }

    /// The domain receiving selectors that name no domain.
    fn unscoped_domain(&self) -> Option<&str> {
        if self.has_domain(DEFAULT_ALIAS_ID) {
            return Some(DEFAULT_ALIAS_ID);
        }
        if let Some(domain) = self.default_alias.and_then(|alias| self.resolve_domain(alias)) {
            return Some(domain);
        }
        match self.domains.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    fn has_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }

    /// Field names a client may request within `domain`.
    fn permitted(&self, domain: &str) -> &[String] {
        self.allowed
            .get(domain)
            .or_else(|| self.defaults.get(domain))
            .map_or(&[], Vec::as_slice)
    }

    fn output_alias(&self, domain: &str) -> Option<String> {
        if domain == DEFAULT_ALIAS_ID {
            self.default_alias.map(str::to_string)
        } else {
            Some(domain.to_string())
        }
    }
}

/// Returns `true` if fields of `domain` may be selected given the included
/// `relations`.
///
/// Without relations every domain qualifies. The implicit domain and the
/// default alias always qualify since they denote the root resource.
#[must_use]
pub fn is_domain_included(
    domain: &str,
    relations: Option<&[RelationSelection]>,
    default_alias: Option<&str>,
) -> bool {
    let Some(relations) = relations else {
        return true;
    };
    domain == DEFAULT_ALIAS_ID
        || default_alias == Some(domain)
        || relations.iter().any(|relation| relation.value == domain)
}

/// Selectors requested for one domain, split by operator.
#[derive(Debug, Default)]
struct DomainRequest {
    explicit: Vec<String>,
    appended: Vec<String>,
    excluded: Vec<String>,
}

impl DomainRequest {
    fn push(&mut self, operator: Option<FieldOperator>, name: String) {
        match operator {
            None => self.explicit.push(name),
            Some(FieldOperator::Append) => self.appended.push(name),
            Some(FieldOperator::Exclude) => self.excluded.push(name),
        }
    }

    /// Field names selected for a domain with the given defaults and allow-list.
    ///
    /// Plain selectors replace the base selection. Otherwise the defaults
    /// form the base, or the whole allow-list when nothing was appended.
    fn select(&self, defaults: Option<&Vec<String>>, allowed: Option<&Vec<String>>) -> Vec<String> {
        let base = if self.explicit.is_empty() {
            let fallback = if self.appended.is_empty() { allowed } else { None };
            defaults.or(fallback).cloned().unwrap_or_default()
        } else {
            self.explicit.clone()
        };
        base.into_iter()
            .chain(self.appended.iter().cloned())
            .filter(|name| !self.excluded.contains(name))
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Parse the `fields` parameter.
///
/// Malformed or disallowed selectors are dropped; a domain left without
/// usable selectors falls back to its defaults, or to its allow-list.
#[must_use]
pub fn parse_query_fields(input: &QueryInput, options: &FieldsParseOptions) -> FieldsParseOutput {
    let Some(policy) = FieldsPolicy::new(options) else {
        return Vec::new();
    };

    let requests = collect_requests(input, &policy);
    let empty = DomainRequest::default();

    let mut output = IndexSet::new();
    for domain in &policy.domains {
        let request = requests.get(domain.as_str()).unwrap_or(&empty);
        let alias = policy.output_alias(domain);
        let names = request.select(policy.defaults.get(domain), policy.allowed.get(domain));
        output.extend(names.into_iter().map(|key| FieldSelection {
            key,
            alias: alias.clone(),
        }));
    }
    output.into_iter().collect()
}

/// Group the permitted selectors of `input` by the domain they address.
fn collect_requests<'p>(
    input: &QueryInput,
    policy: &'p FieldsPolicy<'_>,
) -> IndexMap<&'p str, DomainRequest> {
    let entries: Vec<(Option<&str>, &QueryInput)> = match input {
        QueryInput::Object(map) => map
            .iter()
            .map(|(scope, value)| {
                let scope = name_by_alias_mapping(scope, &policy.aliases);
                (policy.resolve_domain(scope), value)
            })
            .collect(),
        other => {
            let domain = policy.unscoped_domain();
            if domain.is_none() && !other.strings().is_empty() {
                debug!("unscoped fields are ambiguous across domains {:?}", policy.domains);
            }
            vec![(domain, other)]
        }
    };

    let mut requests: IndexMap<&'p str, DomainRequest> = IndexMap::new();
    for (scope, value) in entries {
        for raw in value.strings() {
            for segment in split_top_level(raw) {
                let Some(selector) = FieldSelector::from_segment(&segment, &policy.aliases) else {
                    debug!("ignoring malformed field '{}'", segment.text());
                    continue;
                };
                let domain = match &selector.details.path {
                    Some(path) => policy.resolve_domain(path),
                    None => scope,
                };
                let Some(domain) = domain else {
                    debug!("no eligible domain for field '{}'", segment.text());
                    continue;
                };
                let name = selector.details.name;
                if !policy.permitted(domain).contains(&name) {
                    debug!("field '{name}' is not allowed in domain '{domain}'");
                    continue;
                }
                requests
                    .entry(domain)
                    .or_default()
                    .push(selector.operator, name);
            }
        }
    }
    requests
}
