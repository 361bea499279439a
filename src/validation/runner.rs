//! Orchestrates one validation pass over a record.

use crate::record::Record;
use crate::registry::RuleRegistry;

/// Runs every applicable rule against a record, collecting failures into
/// the record's error collection.
pub struct Validator<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// One full validation pass: clear previous errors, invoke the
    /// record's `validate` hook, then execute every registered rule in
    /// order. A failing rule never stops later rules from running.
    pub fn run(&self, record: &mut dyn Record) {
        record.errors_mut().clear();
        record.validate();
        for rule in self.registry.rules_for(record.type_info()) {
            // The verdict comes from the error collection, not from the
            // rule's return value.
            rule.run(record);
        }
    }

    /// Run validations and report whether the record came out clean.
    pub fn is_valid(&self, record: &mut dyn Record) -> bool {
        self.run(record);
        record.errors().is_empty()
    }
}
