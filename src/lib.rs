//! Standin: an in-memory stand-in for persisted records.
//!
//! Standin gives any plain object the three things application code expects
//! from a database-backed record, without touching storage:
//!
//! - **Validations**: a per-type rule registry with ancestry-aware lookup
//! - **Errors**: a structured, per-record error collection keyed by attribute
//! - **Lifecycle**: a save state machine gating create and update on validity
//!
//! It exists so application code, tests especially, can be exercised against
//! an object that accepts attributes, validates them, reports structured
//! errors, and transitions between new and saved, while staying entirely
//! decoupled from any persistence mechanism.
//!
//! # Core Concepts
//!
//! - **Record**: the consumer contract, via the [`Record`] trait
//! - **Rules**: named or closure validations registered per type, shared
//!   down the ancestor chain but never up or sideways
//! - **ErrorCollection**: insertion-ordered messages keyed by attribute
//! - **Lifecycle**: `New` until the first successful create, `Saved` after
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use standin::{
//!     validates_presence_of, AttributeMap, Record, RecordState, RuleRegistry, TypeInfo,
//! };
//!
//! static CONTACT: TypeInfo = TypeInfo::new("Contact", None, &["name", "email"]);
//!
//! #[derive(Default)]
//! struct Contact {
//!     state: RecordState,
//!     attributes: AttributeMap,
//! }
//!
//! impl Record for Contact {
//!     fn type_info(&self) -> &'static TypeInfo {
//!         &CONTACT
//!     }
//!
//!     fn state(&self) -> &RecordState {
//!         &self.state
//!     }
//!
//!     fn state_mut(&mut self) -> &mut RecordState {
//!         &mut self.state
//!     }
//!
//!     fn read_attribute(&self, key: &str) -> Value {
//!         self.attributes.get(key).cloned().unwrap_or(Value::Null)
//!     }
//!
//!     fn write_attribute(&mut self, key: &str, value: Value) {
//!         self.attributes.insert(key.to_string(), value);
//!     }
//!
//!     fn custom_create(&mut self) -> bool {
//!         true
//!     }
//! }
//!
//! validates_presence_of(RuleRegistry::global(), &CONTACT, &["name"], None);
//!
//! let mut contact = Contact::default();
//! assert!(contact.is_new_record());
//! assert!(!contact.save());
//! assert_eq!(contact.errors().messages_for("name"), ["can't be blank"]);
//!
//! contact.update_attribute("name", json!("Ada")).unwrap();
//! assert!(contact.save());
//! assert!(contact.is_saved_record());
//! ```

pub mod errors;
pub mod persistence;
pub mod record;
pub mod registry;
pub mod validation;

// Re-export commonly used types
pub use errors::{default_message, set_default_message, ErrorCollection, ErrorKey, MessageKey};
pub use persistence::{Lifecycle, LifecycleState, PersistenceError};
pub use record::{
    AttributeError, AttributeMap, LogSink, MemorySink, Record, RecordState, TracingSink, TypeInfo,
};
pub use registry::{CheckFn, Rule, RuleRegistry};
pub use validation::{blank, validates_presence_of, Validator};
