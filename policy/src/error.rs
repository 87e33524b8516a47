//! Policy error types.

use thiserror::Error;

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors that can occur while installing a policy set.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The compiled form of a pattern was rejected by the regex engine.
    ///
    /// Unreachable for anything the wildcard compiler emits, since every
    /// literal is escaped; kept as an error so the engine propagates
    /// instead of unwrapping.
    #[error("policy pattern '{pattern}' failed to compile: {source}")]
    Pattern {
        pattern: String,
        source: regex_lite::Error,
    },
}
