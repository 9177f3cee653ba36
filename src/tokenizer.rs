//! Lexical analysis for selector lists.
//!
//! This module exposes `tokenize_with_trivia` and `tokenize_without_trivia`
//! functions which convert a raw `fields` or `include` parameter into a
//! sequence of `(SyntaxKind, Span)` pairs. It uses the `logos` crate so that
//! every byte of the input is accounted for by exactly one token.

use logos::Logos;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[token(",")]
    Comma,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    // A name never starts with an operator but may contain one (`first-name`).
    #[regex(r"[^,+\- \t\r\n][^, \t\r\n]*")]
    Name,
}

#[must_use]
fn tokenize_impl(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::Whitespace => SyntaxKind::T_WHITESPACE,
            Token::Comma => SyntaxKind::T_COMMA,
            Token::Plus => SyntaxKind::T_PLUS,
            Token::Minus => SyntaxKind::T_MINUS,
            Token::Name => SyntaxKind::T_NAME,
        };
        out.push((kind, span));
    }
    out
}

/// Tokenise the source, excluding whitespace.
///
/// # Examples
///
/// ```rust
/// use selectq::{tokenize_without_trivia, SyntaxKind};
///
/// let tokens = tokenize_without_trivia("id, +name");
/// assert!(!tokens.iter().any(|(k, _)| *k == SyntaxKind::T_WHITESPACE));
/// assert_eq!(tokens.len(), 4);
/// ```
#[must_use]
pub fn tokenize_without_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
        .into_iter()
        .filter(|(k, _)| !k.is_trivia())
        .collect()
}

/// Tokenise the provided selector list.
///
/// # Examples
///
/// ```rust
/// use selectq::{tokenize_with_trivia, SyntaxKind};
///
/// let tokens = tokenize_with_trivia("+email, -id");
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].0, SyntaxKind::T_PLUS);
/// ```
///
/// This variant retains whitespace tokens.
#[must_use]
pub fn tokenize_with_trivia(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_impl(src)
}

/// Alias for [`tokenize_with_trivia`].
#[must_use]
pub fn tokenize(src: &str) -> Vec<(SyntaxKind, Span)> {
    tokenize_with_trivia(src)
}
