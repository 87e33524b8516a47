//! Graft Policy
//!
//! Fallback resolution for component names absent from the registry.
//!
//! Responsibilities:
//! - Compile wildcard patterns (`modal-*`) into anchored matchers
//! - Evaluate policy rules in declaration order
//! - First matching rule whose handler yields a constructor wins

mod error;
mod matcher;
mod rules;

pub use error::{PolicyError, PolicyResult};
pub use matcher::RuleMatcher;
pub use rules::{PolicyHandler, PolicyRule, PolicySet};
