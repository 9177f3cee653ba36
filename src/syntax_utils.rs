//! Utilities for splitting selector lists.
//!
//! These helpers group the token stream produced by [`crate::tokenize`] into
//! comma separated segments. The relation parser takes each segment's trimmed
//! text as is; the field parser additionally reads the `+` / `-` prefix.

use crate::{Span, SyntaxKind, tokenize_without_trivia};

/// One comma separated entry of a selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    text: &'a str,
    span: Span,
    operator: Option<SyntaxKind>,
    name: Option<&'a str>,
}

impl<'a> Segment<'a> {
    fn from_tokens(src: &'a str, tokens: &[(SyntaxKind, Span)]) -> Option<Self> {
        let start = tokens.first()?.1.start;
        let end = tokens.last()?.1.end;
        let text = src.get(start..end)?;
        let (operator, name) = match tokens {
            [(SyntaxKind::T_NAME, name)] => (None, src.get(name.clone())),
            [(op, _), (SyntaxKind::T_NAME, name)] if op.is_operator() => {
                (Some(*op), src.get(name.clone()))
            }
            _ => (None, None),
        };
        Some(Self {
            text,
            span: start..end,
            operator,
            name,
        })
    }

    /// The trimmed source text of the segment.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte range of the segment within the list.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// The `+` or `-` prefix, if the segment carries one.
    #[must_use]
    pub fn operator(&self) -> Option<SyntaxKind> {
        self.operator
    }

    /// The name following the optional prefix.
    ///
    /// `None` when the segment is not a single, optionally prefixed name,
    /// e.g. `a b` or `++a`.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }
}

/// Split `src` on top-level commas, dropping whitespace and empty segments.
///
/// # Examples
///
/// ```
/// use selectq::syntax_utils::split_top_level;
///
/// let segments = split_top_level("id, +name,,");
/// let texts: Vec<&str> = segments.iter().map(|s| s.text()).collect();
/// assert_eq!(texts, vec!["id", "+name"]);
/// ```
#[must_use]
pub fn split_top_level(src: &str) -> Vec<Segment<'_>> {
    let tokens = tokenize_without_trivia(src);
    tokens
        .split(|(kind, _)| *kind == SyntaxKind::T_COMMA)
        .filter_map(|group| Segment::from_tokens(src, group))
        .collect()
}
