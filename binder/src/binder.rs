//! The binding engine.

use crate::config::BinderBuilder;
use crate::tracker::MountTracker;
use graft_core::{Constructor, Document, ElementId, Instance};
use graft_policy::PolicySet;
use graft_registry::{ComponentRegistry, RegistryResult};
use indexmap::IndexMap;
use log::info;
use std::cell::RefCell;

/// The post-mount hook.
///
/// Runs synchronously, after the tracker update, with the engine itself
/// and the freshly mounted instance. Receiving the engine is what allows
/// hooks to re-enter: a hook may register further components or trigger
/// another scan without double-mounting the element being processed.
pub type MountHook = Box<dyn Fn(&Binder, &Instance)>;

/// The binding engine.
///
/// Owns the component registry, the compiled policy set, the mounted-
/// element tracker and the instance collection. Single-threaded by
/// contract: every operation runs to completion on the calling thread,
/// and interior mutability exists only so hooks and policy handlers can
/// re-enter through the shared `&Binder` they are handed.
///
/// Construct through [`Binder::builder`].
pub struct Binder {
    selector: String,
    registry: RefCell<ComponentRegistry>,
    policies: PolicySet,
    post_mount: Option<MountHook>,
    logging: bool,
    tracker: RefCell<MountTracker>,
    /// Instances per component name, most recently mounted first.
    instances: RefCell<IndexMap<String, Vec<Instance>>>,
}

impl Binder {
    /// Start building a binder.
    pub fn builder() -> BinderBuilder {
        BinderBuilder::new()
    }

    pub(crate) fn from_parts(
        selector: String,
        registry: ComponentRegistry,
        policies: PolicySet,
        post_mount: Option<MountHook>,
        logging: bool,
    ) -> Self {
        Self {
            selector,
            registry: RefCell::new(registry),
            policies,
            post_mount,
            logging,
            tracker: RefCell::new(MountTracker::new()),
            instances: RefCell::new(IndexMap::new()),
        }
    }

    /// The configured marker attribute selector.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Register a constructor under an explicit name.
    ///
    /// Overwrites any earlier registration for the name. Already-mounted
    /// elements are unaffected; only future resolutions see the new
    /// constructor.
    pub fn register(
        &self,
        name: impl Into<String>,
        constructor: Constructor,
    ) -> RegistryResult<&Self> {
        self.registry.borrow_mut().register(name, constructor)?;
        Ok(self)
    }

    /// Register every entry of an ordered mapping, in its own key order.
    pub fn register_all(&self, index: IndexMap<String, Constructor>) -> RegistryResult<&Self> {
        self.registry.borrow_mut().register_all(index)?;
        Ok(self)
    }

    /// Resolve a component name to a constructor.
    ///
    /// An exact registry entry wins outright; policies are never consulted
    /// when one exists. Otherwise the policy rules are walked in
    /// declaration order and the first handler yielding a constructor
    /// settles it. `None` means the caller should skip the element.
    pub fn resolve(&self, name: &str, element: ElementId) -> Option<Constructor> {
        let exact = self.registry.borrow().get(name).cloned();
        if exact.is_some() {
            return exact;
        }

        // No registry borrow is held here: handlers may re-enter and
        // register components.
        self.policies.resolve(name, element)
    }

    /// Scan the subtree under `root` and mount every resolvable, not yet
    /// mounted marked element. Returns `&self` for chaining.
    ///
    /// Scanning an unchanged tree twice mounts nothing the second time.
    pub fn scan(&self, doc: &dyn Document, root: ElementId) -> &Self {
        for element in doc.elements_with_attribute(root, &self.selector) {
            let Some(name) = doc.attribute(element, &self.selector) else {
                continue;
            };

            let Some(constructor) = self.resolve(&name, element) else {
                if self.logging {
                    info!(
                        "component '{name}' is not present in the component index; skipping {element}"
                    );
                }
                continue;
            };

            // Already-mounted elements are skipped silently, even though
            // their name resolved.
            if self.is_mounted(element) {
                continue;
            }

            self.mount(element, &name, constructor);
        }

        self
    }

    /// Instantiate `constructor` against `element` and do the bookkeeping.
    ///
    /// The tracker is updated before the hook runs, so a hook that
    /// re-triggers a scan sees this element as already mounted.
    fn mount(&self, element: ElementId, name: &str, constructor: Constructor) -> Instance {
        let instance = constructor.construct(element);

        self.tracker.borrow_mut().record(element);
        self.instances
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .insert(0, instance.clone());

        if let Some(hook) = &self.post_mount {
            // All borrows are released; the hook may re-enter.
            hook(self, &instance);
        }

        instance
    }

    /// Check whether `element` has been mounted by this binder.
    pub fn is_mounted(&self, element: ElementId) -> bool {
        self.tracker.borrow().is_mounted(element)
    }

    /// Get the number of mounted elements.
    pub fn mounted_count(&self) -> usize {
        self.tracker.borrow().len()
    }

    /// Instances mounted under `name`, most recently mounted first.
    pub fn instances_of(&self, name: &str) -> Vec<Instance> {
        self.instances
            .borrow()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Binder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("selector", &self.selector)
            .field("registry", &self.registry.borrow())
            .field("policies", &self.policies)
            .field("logging", &self.logging)
            .field("mounted", &self.tracker.borrow().len())
            .finish()
    }
}
