//! Relation inclusion parsing.
//!
//! Resolves the `include` query parameter into the dotted relation paths a
//! client may load. Requested paths are alias-resolved, checked against a
//! glob allow-list and completed with their ancestor paths, so that
//! `profile.address` also loads `profile`.
//!
//! # Examples
//!
//! ```rust
//! use selectq::{parse_query_relations, QueryInput, RelationsParseOptions};
//!
//! let options = RelationsParseOptions::default().with_allowed(["profile.*"]);
//! let relations = parse_query_relations(&QueryInput::from("profile.address"), &options)
//!     .unwrap_or_default();
//!
//! let keys: Vec<&str> = relations.iter().map(|r| r.key.as_str()).collect();
//! assert_eq!(keys, vec!["profile", "profile.address"]);
//! ```

use std::collections::VecDeque;

use indexmap::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};

use super::QueryInput;
use crate::ConfigError;
use crate::alias::{
    AliasMapping, AliasMappingInput, build_optional_alias_mapping, name_by_alias_mapping,
};
use crate::matcher::{GlobMatcher, Matcher};
use crate::syntax_utils::split_top_level;

/// Whether ancestors of requested relations are loaded as well.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IncludeParents {
    /// Expand every relation (`true`) or none (`false`).
    Enabled(bool),
    /// Expand only dotted relations matching one of these globs.
    Patterns(Vec<String>),
}

impl Default for IncludeParents {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

/// Policy for [`parse_query_relations`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationsParseOptions {
    /// Glob patterns of relations a client may include. Nothing is allowed
    /// when absent or empty.
    pub allowed: Option<Vec<String>>,
    /// Public relation names and the relations they stand for.
    pub alias_mapping: Option<AliasMappingInput>,
    /// Ancestor expansion; enabled for every relation by default.
    pub include_parents: IncludeParents,
    /// Domain prefixed to the key of top-level relations.
    pub default_alias: Option<String>,
}

impl RelationsParseOptions {
    /// Deserialise options from a JSON policy document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Options`] if `json` does not describe valid options.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_allowed<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_alias_mapping(mut self, mapping: impl Into<AliasMappingInput>) -> Self {
        self.alias_mapping = Some(mapping.into());
        self
    }

    #[must_use]
    pub fn with_include_parents(mut self, include_parents: IncludeParents) -> Self {
        self.include_parents = include_parents;
        self
    }

    #[must_use]
    pub fn with_default_alias(mut self, alias: impl Into<String>) -> Self {
        self.default_alias = Some(alias.into());
        self
    }
}

/// A relation the data-access layer should load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationSelection {
    /// The relation qualified by its immediate container, e.g. `profile.address`.
    pub key: String,
    /// The relation name itself, e.g. `address`.
    pub value: String,
}

impl RelationSelection {
    fn from_path(path: &str, default_alias: Option<&str>) -> Self {
        let value = path.rsplit('.').next().unwrap_or(path).to_string();
        let key = match path.rsplit_once('.') {
            Some((parent, _)) => {
                let container = parent.rsplit('.').next().unwrap_or(parent);
                format!("{container}.{value}")
            }
            None => default_alias
                .map_or_else(|| path.to_string(), |alias| format!("{alias}.{path}")),
        };
        Self { key, value }
    }
}

/// Result of [`parse_query_relations`].
pub type RelationsParseOutput = Vec<RelationSelection>;

/// Options normalised for a single call.
struct RelationsPolicy<'a> {
    allowed: &'a [String],
    aliases: AliasMapping,
    include_parents: &'a IncludeParents,
    default_alias: Option<&'a str>,
}

impl<'a> RelationsPolicy<'a> {
    fn new(options: &'a RelationsParseOptions) -> Option<Self> {
        let allowed = options.allowed.as_deref().filter(|a| !a.is_empty())?;
        Some(Self {
            allowed,
            aliases: build_optional_alias_mapping(options.alias_mapping.as_ref()),
            include_parents: &options.include_parents,
            default_alias: options.default_alias.as_deref(),
        })
    }
}

/// Parse the `include` parameter using [`GlobMatcher`].
///
/// # Errors
///
/// Returns [`ConfigError::Pattern`] if an allow-list or parent pattern is
/// not a valid glob. Client input never causes an error.
pub fn parse_query_relations(
    input: &QueryInput,
    options: &RelationsParseOptions,
) -> Result<RelationsParseOutput, ConfigError> {
    parse_query_relations_with(input, options, &GlobMatcher)
}

/// Parse the `include` parameter, checking patterns with `matcher`.
///
/// # Errors
///
/// Propagates pattern errors reported by `matcher`.
pub fn parse_query_relations_with<M: Matcher + ?Sized>(
    input: &QueryInput,
    options: &RelationsParseOptions,
    matcher: &M,
) -> Result<RelationsParseOutput, ConfigError> {
    let Some(policy) = RelationsPolicy::new(options) else {
        return Ok(Vec::new());
    };

    let requested = requested_paths(input);
    if requested.is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::with_capacity(requested.len());
    for path in requested {
        let resolved = name_by_alias_mapping(path, &policy.aliases);
        if matcher.matches_any(resolved, policy.allowed)? {
            items.push(resolved.to_string());
        } else {
            debug!("relation '{resolved}' is not allowed");
        }
    }

    let items = match policy.include_parents {
        IncludeParents::Enabled(true) => include_parents(items),
        IncludeParents::Enabled(false) => items,
        IncludeParents::Patterns(patterns) => {
            let mut expandable = Vec::new();
            for item in &items {
                if item.contains('.') && matcher.matches_any(item, patterns)? {
                    expandable.push(item.clone());
                }
            }
            let mut expanded = include_parents(expandable);
            expanded.extend(items);
            expanded
        }
    };

    Ok(items
        .into_iter()
        .collect::<IndexSet<_>>()
        .iter()
        .map(|path| RelationSelection::from_path(path, policy.default_alias))
        .collect())
}

/// Names requested by `input`.
///
/// A string is comma split; array elements are taken whole. Entries are
/// trimmed and empty ones dropped; the allow-list decides the rest.
fn requested_paths(input: &QueryInput) -> Vec<&str> {
    match input {
        QueryInput::String(list) => split_top_level(list)
            .into_iter()
            .map(|segment| segment.text())
            .collect(),
        QueryInput::Array(items) => items
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect(),
        QueryInput::Absent | QueryInput::Object(_) | QueryInput::Unsupported => Vec::new(),
    }
}

/// Prepend every missing ancestor of every item.
///
/// Ancestors of one item are inserted immediate parent first, so the
/// outermost ancestor ends up in front of the chain.
fn include_parents(items: Vec<String>) -> Vec<String> {
    let mut out = VecDeque::from(items.clone());
    for item in &items {
        let mut parent = item.as_str();
        while let Some((ancestor, _)) = parent.rsplit_once('.') {
            if !out.iter().any(|existing| existing == ancestor) {
                out.push_front(ancestor.to_string());
            }
            parent = ancestor;
        }
    }
    out.into()
}

