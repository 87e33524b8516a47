//! BinderBuilder for constructing a validated Binder.

use crate::binder::{Binder, MountHook};
use graft_core::{Constructor, Instance};
use graft_policy::{PolicyError, PolicyHandler, PolicySet};
use graft_registry::{ComponentRegistry, RegistryError};
use indexmap::IndexMap;
use thiserror::Error;

/// Result type for binder construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during binder construction.
///
/// Construction fails fast: a binder either comes up with a complete,
/// validated configuration or not at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No marker selector was specified.
    #[error("no selector was specified")]
    MissingSelector,

    /// The marker selector was empty.
    #[error("selector must not be empty")]
    EmptySelector,

    /// No component index was specified.
    #[error("no component index was specified")]
    MissingComponentIndex,

    /// A component index entry was rejected.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A policy pattern was rejected.
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Builder for a [`Binder`].
///
/// The selector and the component index are required; the index may be
/// empty, but it must be supplied. Policies, the post-mount hook and
/// logging are optional.
///
/// ```
/// use graft_binder::Binder;
/// use graft_core::{constructor, ElementId};
/// use indexmap::IndexMap;
///
/// struct Hello(ElementId);
///
/// let mut index = IndexMap::new();
/// index.insert("Hello".to_string(), constructor(Hello));
///
/// let binder = Binder::builder()
///     .selector("app")
///     .components(index)
///     .build()
///     .unwrap();
/// assert_eq!(binder.selector(), "app");
/// ```
#[derive(Default)]
pub struct BinderBuilder {
    selector: Option<String>,
    components: Option<IndexMap<String, Constructor>>,
    policies: Vec<(String, PolicyHandler)>,
    post_mount: Option<MountHook>,
    logging: bool,
}

impl BinderBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker attribute selector (required).
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Supply the component index (required, may be empty).
    pub fn components(mut self, index: IndexMap<String, Constructor>) -> Self {
        self.components = Some(index);
        self
    }

    /// Add a single component to the index.
    ///
    /// Also counts as supplying the index; an index built solely out of
    /// `component` calls satisfies the required field.
    pub fn component(mut self, name: impl Into<String>, constructor: Constructor) -> Self {
        self.components
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), constructor);
        self
    }

    /// Declare a fallback policy. Rules are evaluated in declaration order.
    pub fn policy(mut self, pattern: impl Into<String>, handler: PolicyHandler) -> Self {
        self.policies.push((pattern.into(), handler));
        self
    }

    /// Set the post-mount hook, invoked synchronously with the engine and
    /// each freshly mounted instance.
    pub fn post_mount<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Binder, &Instance) + 'static,
    {
        self.post_mount = Some(Box::new(hook));
        self
    }

    /// Enable or disable info-level notices for unresolved names.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Validate the configuration and construct the binder.
    ///
    /// Policy patterns are compiled here, once, not per lookup.
    pub fn build(self) -> ConfigResult<Binder> {
        let selector = self.selector.ok_or(ConfigError::MissingSelector)?;
        if selector.is_empty() {
            return Err(ConfigError::EmptySelector);
        }

        let index = self.components.ok_or(ConfigError::MissingComponentIndex)?;
        let registry = ComponentRegistry::from_index(index)?;
        let policies = PolicySet::install(self.policies)?;

        Ok(Binder::from_parts(
            selector,
            registry,
            policies,
            self.post_mount,
            self.logging,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::{constructor, ElementId};

    struct Stub;

    fn stub_constructor() -> Constructor {
        constructor(|_: ElementId| Stub)
    }

    #[test]
    fn test_build_requires_selector() {
        let err = BinderBuilder::new()
            .components(IndexMap::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSelector));
    }

    #[test]
    fn test_build_rejects_empty_selector() {
        let err = BinderBuilder::new()
            .selector("")
            .components(IndexMap::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptySelector));
    }

    #[test]
    fn test_build_requires_component_index() {
        let err = BinderBuilder::new().selector("app").build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingComponentIndex));
    }

    #[test]
    fn test_build_accepts_empty_component_index() {
        let binder = BinderBuilder::new()
            .selector("app")
            .components(IndexMap::new())
            .build()
            .unwrap();
        assert_eq!(binder.selector(), "app");
    }

    #[test]
    fn test_single_component_supplies_the_index() {
        let binder = BinderBuilder::new()
            .selector("app")
            .component("Hello", stub_constructor())
            .build()
            .unwrap();
        assert!(binder
            .resolve("Hello", ElementId::new(1))
            .is_some());
    }

    #[test]
    fn test_build_rejects_empty_component_name() {
        let err = BinderBuilder::new()
            .selector("app")
            .component("", stub_constructor())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Registry(RegistryError::EmptyName)
        ));
    }

    #[test]
    fn test_policies_compile_at_build_time() {
        let binder = BinderBuilder::new()
            .selector("app")
            .components(IndexMap::new())
            .policy("modal-*", Box::new(|_, _| Some(stub_constructor())))
            .build()
            .unwrap();

        assert!(binder.resolve("modal-login", ElementId::new(1)).is_some());
        assert!(binder.resolve("modal-", ElementId::new(1)).is_none());
    }
}
