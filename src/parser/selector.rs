//! Single field selectors.
//!
//! A selector is one entry of a `fields` list: an optional `+` (append) or
//! `-` (exclude) prefix followed by a field name. The name may be qualified
//! with the domain it belongs to, as in `user.email`.

use crate::SyntaxKind;
use crate::alias::{AliasMapping, name_by_alias_mapping};
use crate::syntax_utils::Segment;

/// How a selector modifies the selection of its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOperator {
    /// `+name`: add to the default selection.
    Append,
    /// `-name`: remove from the default selection.
    Exclude,
}

impl FieldOperator {
    fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::T_PLUS => Some(Self::Append),
            SyntaxKind::T_MINUS => Some(Self::Exclude),
            _ => None,
        }
    }
}

/// A field name split into its name and optional domain path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDetails {
    pub name: String,
    pub path: Option<String>,
}

impl FieldDetails {
    /// Split `raw` at its last `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use selectq::parser::selector::FieldDetails;
    ///
    /// let details = FieldDetails::parse("profile.user.id");
    /// assert_eq!(details.name, "id");
    /// assert_eq!(details.path.as_deref(), Some("profile.user"));
    /// assert_eq!(FieldDetails::parse("id").path, None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.rsplit_once('.') {
            Some((path, name)) => Self {
                name: name.to_string(),
                path: Some(path.to_string()),
            },
            None => Self {
                name: raw.to_string(),
                path: None,
            },
        }
    }

    /// Parse `raw` after resolving aliases.
    ///
    /// The whole name is resolved once. Only a qualified result has its path
    /// and name resolved again separately, so `aliasKey.alias` may map to
    /// `user.id` through two independent entries while plain aliases never
    /// chain.
    #[must_use]
    pub fn resolve(raw: &str, aliases: &AliasMapping) -> Self {
        let resolved = name_by_alias_mapping(raw, aliases);
        match resolved.rsplit_once('.') {
            Some((path, name)) => Self {
                name: name_by_alias_mapping(name, aliases).to_string(),
                path: Some(name_by_alias_mapping(path, aliases).to_string()),
            },
            None => Self {
                name: resolved.to_string(),
                path: None,
            },
        }
    }
}

/// One parsed entry of a `fields` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    pub operator: Option<FieldOperator>,
    pub details: FieldDetails,
}

impl FieldSelector {
    /// Build a selector from a list segment, resolving aliases.
    ///
    /// Returns `None` for segments that are not a single, optionally
    /// prefixed name.
    #[must_use]
    pub fn from_segment(segment: &Segment<'_>, aliases: &AliasMapping) -> Option<Self> {
        let name = segment.name()?;
        Some(Self {
            operator: segment.operator().and_then(FieldOperator::from_kind),
            details: FieldDetails::resolve(name, aliases),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::{AliasMappingInput, build_alias_mapping};
    use crate::syntax_utils::split_top_level;
    use rstest::{fixture, rstest};

    #[fixture]
    fn aliases() -> AliasMapping {
        build_alias_mapping(&AliasMappingInput::from([
            ("aliasKey", "user"),
            ("alias", "id"),
            ("mail", "profile.email"),
        ]))
    }

    fn selectors(src: &str, aliases: &AliasMapping) -> Vec<FieldSelector> {
        split_top_level(src)
            .iter()
            .filter_map(|s| FieldSelector::from_segment(s, aliases))
            .collect()
    }

    #[rstest]
    #[case("id", None, "id", None)]
    #[case("+alias", Some(FieldOperator::Append), "id", None)]
    #[case("-aliasKey.alias", Some(FieldOperator::Exclude), "id", Some("user"))]
    #[case("mail", None, "email", Some("profile"))]
    #[case("other.name", None, "name", Some("other"))]
    fn resolves_selectors(
        aliases: AliasMapping,
        #[case] src: &str,
        #[case] operator: Option<FieldOperator>,
        #[case] name: &str,
        #[case] path: Option<&str>,
    ) {
        let parsed = selectors(src, &aliases);
        assert_eq!(
            parsed,
            vec![FieldSelector {
                operator,
                details: FieldDetails {
                    name: name.to_string(),
                    path: path.map(str::to_string),
                },
            }]
        );
    }

    #[rstest]
    fn malformed_segments_are_skipped(aliases: AliasMapping) {
        let parsed = selectors("a b,--id,name", &aliases);
        assert_eq!(parsed.len(), 1);
    }
}
