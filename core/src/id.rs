//! Identity types for document elements.
//!
//! Element identifiers are opaque 64-bit handles that are:
//! - Unique within the owning document
//! - Immutable once assigned
//! - Assigned by the Document collaborator, never by the engine

use std::fmt;

/// Stable identity handle for a document element.
///
/// The engine keys all per-element state (the mounted set, the instance
/// collection) on this handle, so two elements are "the same" exactly when
/// their handles are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Create a new ElementId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el{}", self.0)
    }
}
