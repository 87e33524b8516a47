//! Ordered policy rules with first-match-wins evaluation.

use crate::{PolicyResult, RuleMatcher};
use graft_core::{Constructor, ElementId};

/// A fallback handler: given the unresolved name and the element, produce
/// a constructor, or `None` to let later rules have a go.
pub type PolicyHandler = Box<dyn Fn(&str, ElementId) -> Option<Constructor>>;

/// One declared policy: a compiled wildcard matcher plus its handler.
pub struct PolicyRule {
    matcher: RuleMatcher,
    handler: PolicyHandler,
}

impl PolicyRule {
    /// Compile `pattern` and pair it with `handler`.
    pub fn new(pattern: &str, handler: PolicyHandler) -> PolicyResult<Self> {
        Ok(Self {
            matcher: RuleMatcher::compile(pattern)?,
            handler,
        })
    }

    /// The rule's original pattern text.
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }
}

impl std::fmt::Debug for PolicyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRule")
            .field("pattern", &self.pattern())
            .finish()
    }
}

/// Policy rules in declaration order.
///
/// Resolution walks the rules front to back. The handler of a rule is only
/// invoked when its matcher accepts the name, and the walk stops at the
/// first handler that yields a constructor. A handler returning `None`
/// does not stop the walk; later matching rules are still tried.
#[derive(Debug, Default)]
pub struct PolicySet {
    rules: Vec<PolicyRule>,
}

impl PolicySet {
    /// Create an empty policy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and install an ordered sequence of (pattern, handler) pairs.
    pub fn install<I, S>(pairs: I) -> PolicyResult<Self>
    where
        I: IntoIterator<Item = (S, PolicyHandler)>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for (pattern, handler) in pairs {
            set.push(PolicyRule::new(pattern.as_ref(), handler)?);
        }
        Ok(set)
    }

    /// Append a rule after all previously declared rules.
    pub fn push(&mut self, rule: PolicyRule) {
        self.rules.push(rule);
    }

    /// Resolve `name` through the rules, first match wins.
    pub fn resolve(&self, name: &str, element: ElementId) -> Option<Constructor> {
        for rule in &self.rules {
            if rule.matcher.is_match(name) {
                if let Some(constructor) = (rule.handler)(name, element) {
                    return Some(constructor);
                }
            }
        }
        None
    }

    /// Get the number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether any rules are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::constructor;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Stub;

    fn stub_constructor() -> Constructor {
        constructor(|_| Stub)
    }

    fn counting_handler(hits: Rc<Cell<usize>>, yields: bool) -> PolicyHandler {
        Box::new(move |_name, _element| {
            hits.set(hits.get() + 1);
            yields.then(stub_constructor)
        })
    }

    #[test]
    fn test_first_match_wins_shadows_literal_rule() {
        let h1_hits = Rc::new(Cell::new(0));
        let h2_hits = Rc::new(Cell::new(0));

        let set = PolicySet::install([
            ("foo-*", counting_handler(h1_hits.clone(), true)),
            ("foo-bar", counting_handler(h2_hits.clone(), true)),
        ])
        .unwrap();

        // "foo-bar" literally matches the second rule too, but the first
        // declared rule settles it.
        let resolved = set.resolve("foo-bar", ElementId::new(1));
        assert!(resolved.is_some());
        assert_eq!(h1_hits.get(), 1);
        assert_eq!(h2_hits.get(), 0);
    }

    #[test]
    fn test_none_handler_falls_through_to_later_rules() {
        let h1_hits = Rc::new(Cell::new(0));
        let h2_hits = Rc::new(Cell::new(0));

        let set = PolicySet::install([
            ("foo-*", counting_handler(h1_hits.clone(), false)),
            ("foo-bar", counting_handler(h2_hits.clone(), true)),
        ])
        .unwrap();

        let resolved = set.resolve("foo-bar", ElementId::new(1));
        assert!(resolved.is_some());
        assert_eq!(h1_hits.get(), 1);
        assert_eq!(h2_hits.get(), 1);
    }

    #[test]
    fn test_non_matching_rules_never_invoke_handlers() {
        let hits = Rc::new(Cell::new(0));
        let set = PolicySet::install([("modal-*", counting_handler(hits.clone(), true))]).unwrap();

        assert!(set.resolve("dialog-main", ElementId::new(1)).is_none());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_handler_receives_name_and_element() {
        let seen = Rc::new(Cell::new(None));
        let seen_in_handler = seen.clone();

        let handler: PolicyHandler = Box::new(move |name, element| {
            seen_in_handler.set(Some((name.to_string(), element)));
            Some(stub_constructor())
        });

        let set = PolicySet::install([("widget-*", handler)]).unwrap();
        set.resolve("widget-card", ElementId::new(42));

        let (name, element) = seen.take().unwrap();
        assert_eq!(name, "widget-card");
        assert_eq!(element, ElementId::new(42));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let from_first = stub_constructor();
        let from_second = stub_constructor();

        let first_ctor = from_first.clone();
        let second_ctor = from_second.clone();
        let set = PolicySet::install([
            ("widget-*", fixed_handler(first_ctor)),
            ("*-card", fixed_handler(second_ctor)),
        ])
        .unwrap();

        // Repeated resolution of the same name always lands on the same
        // (first) rule.
        for _ in 0..3 {
            let resolved = set.resolve("widget-card", ElementId::new(1)).unwrap();
            assert!(Rc::ptr_eq(&resolved, &from_first));
            assert!(!Rc::ptr_eq(&resolved, &from_second));
        }
    }

    fn fixed_handler(constructor: Constructor) -> PolicyHandler {
        Box::new(move |_name, _element| Some(constructor.clone()))
    }
}
