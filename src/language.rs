//! Syntax kinds for selector lists.
//!
//! A selector list is the compact text clients send in `fields` and
//! `include` query parameters, e.g. `id,+email,-password` or
//! `profile.address,roles`. This module defines the `SyntaxKind` enum that
//! tags every token the lexer produces for such a list.

/// Every possible token in a selector list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[expect(non_camel_case_types, reason = "token naming follows the lexer table")]
pub enum SyntaxKind {
    // Tokens
    T_WHITESPACE,
    T_COMMA,
    T_PLUS,
    T_MINUS,
    T_NAME,
    // Special
    N_ERROR,
}

impl SyntaxKind {
    /// Returns `true` for tokens that carry no meaning for the parsers.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE)
    }

    /// Returns `true` for the `+` and `-` selector prefixes.
    #[must_use]
    pub fn is_operator(self) -> bool {
        matches!(self, Self::T_PLUS | Self::T_MINUS)
    }
}
