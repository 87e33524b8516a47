//! The ComponentRegistry - exact-name constructor lookup.

use crate::{RegistryError, RegistryResult};
use graft_core::Constructor;
use indexmap::IndexMap;

/// Insertion-ordered mapping from component names to constructors.
///
/// Lookup is exact-match only; wildcard fallback lives in the policy layer.
/// Registering a name twice replaces the earlier constructor without
/// touching anything already mounted against it.
#[derive(Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, Constructor>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from an ordered name -> constructor mapping.
    pub fn from_index(index: IndexMap<String, Constructor>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        registry.register_all(index)?;
        Ok(registry)
    }

    /// Register a constructor under an explicit name.
    ///
    /// The last registration for a given name wins.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: Constructor,
    ) -> RegistryResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        self.components.insert(name, constructor);
        Ok(())
    }

    /// Register every entry of an ordered mapping, in the mapping's own
    /// key order. Later entries overwrite earlier ones sharing a name.
    pub fn register_all(&mut self, index: IndexMap<String, Constructor>) -> RegistryResult<()> {
        for (name, constructor) in index {
            self.register(name, constructor)?;
        }
        Ok(())
    }

    /// Get the constructor registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Constructor> {
        self.components.get(name)
    }

    /// Check whether `name` has an exact entry.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// All registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Get the number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}
