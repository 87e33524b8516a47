//! The Document collaborator.
//!
//! The engine never reaches into an ambient global document. Everything it
//! needs from the rendering surface goes through this trait: an ordered
//! element query and an attribute read. Tests drive the engine with a fake
//! implementation returning a fixed element list.

use crate::ElementId;

/// Read-only view of a document tree, as seen by the binding engine.
pub trait Document {
    /// All elements under `root` carrying `attribute`, in document order.
    /// Called once per scan.
    fn elements_with_attribute(&self, root: ElementId, attribute: &str) -> Vec<ElementId>;

    /// The value of `attribute` on `element`, if present.
    fn attribute(&self, element: ElementId, attribute: &str) -> Option<String>;
}
