//! The constructor capability and its aliases.
//!
//! A component constructor is anything that can build an instance from an
//! element handle. The engine never introspects the produced instance; it
//! stores it and hands it to the post-mount hook, nothing more.

use crate::ElementId;
use std::any::Any;
use std::rc::Rc;

/// A mounted component instance, opaque to the engine.
pub type Instance = Rc<dyn Any>;

/// Capability to construct a component instance from an element.
pub trait Construct {
    /// Build an instance bound to `element`.
    fn construct(&self, element: ElementId) -> Instance;
}

/// A shared, reference-counted constructor.
///
/// Reference counting is what makes registry overwrite observable: two
/// registrations of the same constructor compare equal under
/// [`Rc::ptr_eq`], while a replacement does not.
pub type Constructor = Rc<dyn Construct>;

impl<F> Construct for F
where
    F: Fn(ElementId) -> Instance,
{
    fn construct(&self, element: ElementId) -> Instance {
        self(element)
    }
}

/// Wrap a plain `Fn(ElementId) -> T` as a [`Constructor`].
///
/// This is the ergonomic path for closures and fn items whose component
/// type is concrete:
///
/// ```
/// use graft_core::{constructor, Construct, ElementId};
///
/// struct Hello(ElementId);
/// let ctor = constructor(Hello);
/// let instance = ctor.construct(ElementId::new(1));
/// assert!(instance.downcast_ref::<Hello>().is_some());
/// ```
pub fn constructor<T, F>(f: F) -> Constructor
where
    T: Any,
    F: Fn(ElementId) -> T + 'static,
{
    Rc::new(move |element: ElementId| -> Instance { Rc::new(f(element)) })
}
