//! The mounted-element tracker.

use graft_core::ElementId;
use std::collections::HashSet;

/// Identity-keyed set of elements that have been mounted.
///
/// Membership is over element identity, not component name: two elements
/// declaring the same component are tracked independently. The set only
/// grows. Components are not re-mounted by this engine, so there is no
/// removal operation; re-mounting is an external concern (destroy and
/// recreate the element).
#[derive(Debug, Default)]
pub struct MountTracker {
    mounted: HashSet<ElementId>,
}

impl MountTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `element` has already been mounted.
    pub fn is_mounted(&self, element: ElementId) -> bool {
        self.mounted.contains(&element)
    }

    /// Record `element` as mounted.
    pub fn record(&mut self, element: ElementId) {
        self.mounted.insert(element);
    }

    /// Get the number of mounted elements.
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    /// Check whether nothing has been mounted yet.
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_membership() {
        let mut tracker = MountTracker::new();
        assert!(tracker.is_empty());
        assert!(!tracker.is_mounted(ElementId::new(1)));

        tracker.record(ElementId::new(1));
        assert!(tracker.is_mounted(ElementId::new(1)));
        assert!(!tracker.is_mounted(ElementId::new(2)));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_recording_twice_keeps_one_entry() {
        let mut tracker = MountTracker::new();
        tracker.record(ElementId::new(7));
        tracker.record(ElementId::new(7));
        assert_eq!(tracker.len(), 1);
    }
}
