//! Graft Registry
//!
//! The component registry: an insertion-ordered mapping from component
//! names to constructors.
//!
//! Responsibilities:
//! - Single and bulk registration with explicit names
//! - Exact-name constructor lookup
//! - Overwrite semantics (last registration for a name wins)

mod error;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::ComponentRegistry;
