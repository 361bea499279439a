//! Validation rules: named method references and anonymous checks.

use crate::record::Record;
use std::fmt;
use std::sync::Arc;

/// Boxed check executed against a record. Returns whether the check
/// passed; failures report themselves through the record's error
/// collection.
pub type CheckFn = Box<dyn Fn(&mut dyn Record) -> bool + Send + Sync>;

/// A single unit of validation logic. Immutable once registered; identity
/// is the `Arc` handle, so registering the same handle twice on one type
/// is a no-op while behaviorally identical but distinct handles are kept.
pub enum Rule {
    /// Dispatches to [`Record::run_named_validation`] with this identifier.
    Named(&'static str),
    /// Runs an anonymous closure against the record.
    Check(CheckFn),
}

impl Rule {
    /// Rule referring to a named validation on the record's type.
    pub fn named(name: &'static str) -> Arc<Self> {
        Arc::new(Self::Named(name))
    }

    /// Rule wrapping an anonymous closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standin::{Record, Rule};
    ///
    /// let rule = Rule::check(|record: &mut dyn Record| {
    ///     let present = !record.read_attribute("flavor").is_null();
    ///     if !present {
    ///         record.errors_mut().add("flavor", "must be chosen");
    ///     }
    ///     present
    /// });
    /// ```
    pub fn check<F>(check: F) -> Arc<Self>
    where
        F: Fn(&mut dyn Record) -> bool + Send + Sync + 'static,
    {
        Arc::new(Self::Check(Box::new(check)))
    }

    /// Execute the rule against `record`, reporting whether it passed.
    pub fn run(&self, record: &mut dyn Record) -> bool {
        match self {
            Self::Named(name) => record.run_named_validation(name),
            Self::Check(check) => check(record),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Check(_) => f.write_str("Check(..)"),
        }
    }
}
