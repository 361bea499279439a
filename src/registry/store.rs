//! Rule storage keyed by type name, merged over ancestry at lookup time.

use crate::record::TypeInfo;
use crate::registry::rule::Rule;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Stores each type's own rules and merges ancestor rules at lookup time.
///
/// Registration and lookup are total operations and are synchronized, so
/// a reader never observes a partially appended rule list.
///
/// # Example
///
/// ```rust
/// use standin::{Rule, RuleRegistry, TypeInfo};
///
/// static ANIMAL: TypeInfo = TypeInfo::new("Animal", None, &[]);
/// static DOG: TypeInfo = TypeInfo::new("Dog", Some(&ANIMAL), &[]);
///
/// let registry = RuleRegistry::new();
/// registry.register(&ANIMAL, Rule::named("validate_species"));
///
/// // Rules on an ancestor apply to descendants, ancestor rules first.
/// assert_eq!(registry.rules_for(&DOG).len(), 1);
/// assert_eq!(registry.rules_for(&ANIMAL).len(), 1);
/// ```
#[derive(Default)]
pub struct RuleRegistry {
    rules: RwLock<HashMap<&'static str, Vec<Arc<Rule>>>>,
}

impl RuleRegistry {
    /// An empty, isolated registry. Mostly useful in tests; production
    /// code usually goes through [`global`](RuleRegistry::global).
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry backing the [`Record`](crate::Record)
    /// convenience methods.
    pub fn global() -> &'static RuleRegistry {
        static GLOBAL: OnceLock<RuleRegistry> = OnceLock::new();
        GLOBAL.get_or_init(RuleRegistry::new)
    }

    /// Append `rule` to `type_info`'s own rule list. Registering the same
    /// `Arc` handle twice on one type is a no-op; rule lists only ever
    /// grow.
    pub fn register(&self, type_info: &'static TypeInfo, rule: Arc<Rule>) {
        let mut rules = self.rules.write().unwrap_or_else(PoisonError::into_inner);
        let own = rules.entry(type_info.name()).or_default();
        if !own.iter().any(|existing| Arc::ptr_eq(existing, &rule)) {
            own.push(rule);
        }
    }

    /// Every rule that applies to `type_info`: the concatenation of each
    /// ancestor's own rules, root first, ending with the type's own.
    /// Recomputed from live storage on every call; this is a view, not a
    /// snapshot.
    pub fn rules_for(&self, type_info: &'static TypeInfo) -> Vec<Arc<Rule>> {
        let rules = self.rules.read().unwrap_or_else(PoisonError::into_inner);
        type_info
            .ancestry()
            .into_iter()
            .flat_map(|ancestor| rules.get(ancestor.name()).into_iter().flatten().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The hierarchy under test:
    //
    //   A
    //   +-- B
    //   |   +-- C
    //   +-- D
    static A: TypeInfo = TypeInfo::new("StoreTestA", None, &[]);
    static B: TypeInfo = TypeInfo::new("StoreTestB", Some(&A), &[]);
    static C: TypeInfo = TypeInfo::new("StoreTestC", Some(&B), &[]);
    static D: TypeInfo = TypeInfo::new("StoreTestD", Some(&A), &[]);

    fn handles(registry: &RuleRegistry, type_info: &'static TypeInfo) -> Vec<*const Rule> {
        registry
            .rules_for(type_info)
            .iter()
            .map(|rule| Arc::as_ptr(rule))
            .collect()
    }

    #[test]
    fn empty_registry_returns_no_rules() {
        let registry = RuleRegistry::new();
        assert!(registry.rules_for(&C).is_empty());
    }

    #[test]
    fn ancestor_rules_apply_to_every_descendant() {
        let registry = RuleRegistry::new();
        let rule = Rule::named("validate_shared");
        registry.register(&A, rule.clone());

        let expected = vec![Arc::as_ptr(&rule)];
        assert_eq!(handles(&registry, &A), expected);
        assert_eq!(handles(&registry, &B), expected);
        assert_eq!(handles(&registry, &C), expected);
        assert_eq!(handles(&registry, &D), expected);
    }

    #[test]
    fn subtype_rules_never_leak_to_ancestors_or_siblings() {
        let registry = RuleRegistry::new();
        let rule = Rule::named("validate_b_only");
        registry.register(&B, rule.clone());

        assert_eq!(handles(&registry, &B), vec![Arc::as_ptr(&rule)]);
        assert_eq!(handles(&registry, &C), vec![Arc::as_ptr(&rule)]);
        assert!(registry.rules_for(&A).is_empty());
        assert!(registry.rules_for(&D).is_empty());
    }

    #[test]
    fn lookup_concatenates_ancestor_rules_first() {
        let registry = RuleRegistry::new();
        let on_a = Rule::named("validate_on_a");
        let on_b = Rule::named("validate_on_b");
        let on_c = Rule::named("validate_on_c");

        // Registration order deliberately differs from ancestry order.
        registry.register(&C, on_c.clone());
        registry.register(&A, on_a.clone());
        registry.register(&B, on_b.clone());

        assert_eq!(
            handles(&registry, &C),
            vec![Arc::as_ptr(&on_a), Arc::as_ptr(&on_b), Arc::as_ptr(&on_c)]
        );
    }

    #[test]
    fn registering_the_same_handle_twice_is_a_no_op() {
        let registry = RuleRegistry::new();
        let rule = Rule::named("validate_once");
        registry.register(&A, rule.clone());
        registry.register(&A, rule.clone());

        assert_eq!(registry.rules_for(&A).len(), 1);
    }

    #[test]
    fn distinct_handles_with_identical_behavior_are_kept() {
        let registry = RuleRegistry::new();
        registry.register(&A, Rule::named("validate_twin"));
        registry.register(&A, Rule::named("validate_twin"));

        assert_eq!(registry.rules_for(&A).len(), 2);
    }

    #[test]
    fn the_same_handle_at_two_levels_appears_twice() {
        let registry = RuleRegistry::new();
        let rule = Rule::named("validate_everywhere");
        registry.register(&A, rule.clone());
        registry.register(&B, rule.clone());

        assert_eq!(registry.rules_for(&B).len(), 2);
        assert_eq!(registry.rules_for(&A).len(), 1);
    }

    #[test]
    fn lookup_is_a_live_view() {
        let registry = RuleRegistry::new();
        assert!(registry.rules_for(&B).is_empty());

        registry.register(&A, Rule::named("validate_late"));
        assert_eq!(registry.rules_for(&B).len(), 1);
    }
}
