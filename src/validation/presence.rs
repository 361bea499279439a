//! Built-in presence validation and the blank predicate behind it.

use crate::errors::{default_message, MessageKey};
use crate::record::{Record, TypeInfo};
use crate::registry::{Rule, RuleRegistry};
use serde_json::Value;

/// Whether a value counts as absent for presence validation.
///
/// Blank values: `Null`, empty or whitespace-only strings, empty arrays,
/// empty objects. Booleans and numbers are never blank, `false` and `0`
/// included.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use standin::blank;
///
/// assert!(blank(&json!(null)));
/// assert!(blank(&json!("   ")));
/// assert!(!blank(&json!(false)));
/// assert!(!blank(&json!(0)));
/// ```
pub fn blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Register one presence rule per field: the record is invalid while the
/// field's value is blank, with the failure recorded against that field.
///
/// `message` defaults to the process-wide text for [`MessageKey::Blank`],
/// resolved once at registration time.
pub fn validates_presence_of(
    registry: &RuleRegistry,
    type_info: &'static TypeInfo,
    fields: &[&'static str],
    message: Option<&str>,
) {
    let message = message
        .map(str::to_owned)
        .unwrap_or_else(|| default_message(MessageKey::Blank));
    for field in fields {
        let field = *field;
        let message = message.clone();
        registry.register(
            type_info,
            Rule::check(move |record: &mut dyn Record| {
                if blank(&record.read_attribute(field)) {
                    record.errors_mut().add(field, message.clone());
                    false
                } else {
                    true
                }
            }),
        );
    }
}
