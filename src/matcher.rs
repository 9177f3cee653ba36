//! Pattern matching capability used by the allow-list checks.
//!
//! The relation parser never talks to a glob engine directly; it goes through
//! [`Matcher`] so the engine can be swapped out or stubbed in tests.
//! [`GlobMatcher`] is the default and uses shell-glob semantics from the
//! `glob` crate. The `.` separating relation segments is an ordinary
//! character, so `user.*` matches `user.profile` as well as
//! `user.profile.address`.

use log::warn;

use crate::ConfigError;

/// Decides whether a candidate name matches a policy pattern.
pub trait Matcher {
    /// Match `candidate` against `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when `pattern` is malformed.
    fn matches(&self, candidate: &str, pattern: &str) -> Result<bool, ConfigError>;

    /// Returns `true` if `candidate` matches at least one of `patterns`.
    ///
    /// # Errors
    ///
    /// Propagates the first pattern error encountered.
    fn matches_any(&self, candidate: &str, patterns: &[String]) -> Result<bool, ConfigError> {
        for pattern in patterns {
            if self.matches(candidate, pattern)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Shell-glob matching (`*`, `?`, `[...]`) backed by [`glob::Pattern`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobMatcher;

impl Matcher for GlobMatcher {
    fn matches(&self, candidate: &str, pattern: &str) -> Result<bool, ConfigError> {
        let compiled = glob::Pattern::new(pattern).map_err(|source| {
            warn!("rejecting malformed glob pattern '{pattern}': {source}");
            ConfigError::Pattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(compiled.matches(candidate))
    }
}
