//! Registry error types.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during component registration.
///
/// A failed registration is fatal to that call only; it never corrupts
/// entries already present in the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The component name was empty.
    #[error("component name must not be empty")]
    EmptyName,
}
