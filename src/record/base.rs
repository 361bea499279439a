//! The `Record` trait and its per-record state.

use crate::errors::ErrorCollection;
use crate::persistence::{Lifecycle, LifecycleState, PersistenceError};
use crate::record::logging::{LogSink, DEFAULT_SINK};
use crate::record::type_info::TypeInfo;
use crate::registry::RuleRegistry;
use crate::validation::Validator;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

/// Mapping of attribute identifiers to values, in insertion order.
pub type AttributeMap = IndexMap<String, Value>;

/// Errors raised by attribute assignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    /// The record's type declares no such attribute.
    #[error("Unknown attribute: {0:?}")]
    UnknownAttribute(String),
}

/// Per-record bookkeeping owned exclusively by one record: its error
/// collection and its position in the save lifecycle.
#[derive(Debug, Default)]
pub struct RecordState {
    errors: ErrorCollection,
    lifecycle: LifecycleState,
}

impl RecordState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &ErrorCollection {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ErrorCollection {
        &mut self.errors
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }

    /// Flip to `Saved`. One-way: once saved, a record never becomes new
    /// again.
    pub(crate) fn mark_saved(&mut self) {
        self.lifecycle = LifecycleState::Saved;
    }
}

/// An object with attributes, validations, and a save lifecycle.
///
/// Implementations supply the type descriptor, embedded [`RecordState`],
/// and raw attribute access; the trait provides assignment checking,
/// lifecycle queries, and the validation and save entry points on top.
/// The hooks (`validate`, `custom_create`, `custom_update`,
/// `run_named_validation`, `logger`) are no-op or stub defaults meant to
/// be overridden by concrete record types.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use standin::{AttributeMap, Record, RecordState, TypeInfo};
///
/// static NOTE: TypeInfo = TypeInfo::new("Note", None, &["title", "body"]);
///
/// #[derive(Default)]
/// struct Note {
///     state: RecordState,
///     attributes: AttributeMap,
/// }
///
/// impl Record for Note {
///     fn type_info(&self) -> &'static TypeInfo {
///         &NOTE
///     }
///
///     fn state(&self) -> &RecordState {
///         &self.state
///     }
///
///     fn state_mut(&mut self) -> &mut RecordState {
///         &mut self.state
///     }
///
///     fn read_attribute(&self, key: &str) -> Value {
///         self.attributes.get(key).cloned().unwrap_or(Value::Null)
///     }
///
///     fn write_attribute(&mut self, key: &str, value: Value) {
///         self.attributes.insert(key.to_string(), value);
///     }
/// }
///
/// let mut note = Note::default();
/// assert!(note.is_new_record());
/// assert!(note.has_attribute("title"));
///
/// note.update_attribute("title", json!("groceries")).unwrap();
/// assert_eq!(note.read_attribute("title"), json!("groceries"));
///
/// assert!(note.update_attribute("color", json!("red")).is_err());
/// ```
pub trait Record {
    /// Static descriptor of this record's type.
    fn type_info(&self) -> &'static TypeInfo;

    fn state(&self) -> &RecordState;
    fn state_mut(&mut self) -> &mut RecordState;

    /// Current value for `key`; `Value::Null` when unset.
    fn read_attribute(&self, key: &str) -> Value;

    /// Store a value for `key`. Callers go through
    /// [`update_attribute`](Record::update_attribute), which rejects
    /// undeclared keys first.
    fn write_attribute(&mut self, key: &str, value: Value);

    /// Custom validation hook. Runs before any registered rule and may add
    /// errors directly. No-op by default.
    fn validate(&mut self) {}

    /// Dispatch point for rules registered by name. Implementations match
    /// on the identifier; an unrecognized name warns and passes.
    fn run_named_validation(&mut self, name: &str) -> bool {
        self.logger().warn(&format!(
            "No named validation {name:?} on {}.",
            self.type_info().name()
        ));
        true
    }

    /// Create hook invoked by the first successful save. The stub cannot
    /// persist anything, so it warns and reports failure.
    fn custom_create(&mut self) -> bool {
        self.logger().warn("Called the empty custom_create stub.");
        false
    }

    /// Update hook invoked by saves after the first. Stub as above.
    fn custom_update(&mut self) -> bool {
        self.logger().warn("Called the empty custom_update stub.");
        false
    }

    /// Logging sink used by the default hook stubs.
    fn logger(&self) -> &dyn LogSink {
        &DEFAULT_SINK
    }

    /// Whether `key` is a declared attribute of this record's type.
    fn has_attribute(&self, key: &str) -> bool {
        self.type_info().declares(key)
    }

    /// Assign a single attribute, rejecting undeclared keys.
    fn update_attribute(&mut self, key: &str, value: Value) -> Result<(), AttributeError> {
        if !self.has_attribute(key) {
            return Err(AttributeError::UnknownAttribute(key.to_string()));
        }
        self.write_attribute(key, value);
        Ok(())
    }

    /// Assign a mapping of attributes in its iteration order. Fails on the
    /// first undeclared key; attributes assigned before the failure stay
    /// assigned.
    fn assign_attributes(&mut self, attributes: AttributeMap) -> Result<(), AttributeError> {
        for (key, value) in attributes {
            self.update_attribute(&key, value)?;
        }
        Ok(())
    }

    /// Construct a record and route an initial attribute mapping through
    /// assignment.
    fn with_attributes(attributes: AttributeMap) -> Result<Self, AttributeError>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        record.assign_attributes(attributes)?;
        Ok(record)
    }

    fn errors(&self) -> &ErrorCollection {
        self.state().errors()
    }

    fn errors_mut(&mut self) -> &mut ErrorCollection {
        self.state_mut().errors_mut()
    }

    /// A record is new until its first successful create.
    fn is_new_record(&self) -> bool {
        self.state().lifecycle() == LifecycleState::New
    }

    fn is_saved_record(&self) -> bool {
        !self.is_new_record()
    }

    /// Run validations against the global registry and report the verdict.
    fn is_valid(&mut self) -> bool
    where
        Self: Sized,
    {
        Validator::new(RuleRegistry::global()).is_valid(self)
    }

    /// Validate against the global registry and, if valid, dispatch to the
    /// create or update hook.
    fn save(&mut self) -> bool
    where
        Self: Sized,
    {
        Lifecycle::new(RuleRegistry::global()).save(self)
    }

    /// Like [`save`](Record::save), but a failed save becomes
    /// [`PersistenceError::RecordNotSaved`].
    fn save_strict(&mut self) -> Result<(), PersistenceError>
    where
        Self: Sized,
    {
        Lifecycle::new(RuleRegistry::global()).save_strict(self)
    }
}
