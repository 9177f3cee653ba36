//! Configuration errors.
//!
//! Client input never fails to parse; malformed requests degrade to empty
//! output or to the configured defaults. The errors here originate from the
//! server-side policy instead and are fatal for the call that observes them.

use thiserror::Error;

/// A problem with the parse options supplied by the server.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An allow-list or parent-inclusion pattern is not a valid glob.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    /// The policy document could not be deserialised.
    #[error("failed to parse options: {0}")]
    Options(#[from] serde_json::Error),
}
