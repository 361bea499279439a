//! Per-type validation rule storage with ancestry-aware lookup.
//!
//! Rules are declared against a type and apply to that type and every
//! descendant, never to ancestors or sibling types. The registry stores
//! only each type's own rules; the ancestor merge happens at lookup time,
//! so rules registered after a record was constructed still apply to its
//! next validation run.

pub mod rule;
pub mod store;

// Re-export commonly used types
pub use rule::{CheckFn, Rule};
pub use store::RuleRegistry;
