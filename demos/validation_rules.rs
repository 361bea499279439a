//! Validation Rules
//!
//! This example demonstrates the rule registry: presence validations and a
//! closure rule declared on a parent type, shared by a subtype, with errors
//! reported through the structured collection.
//!
//! Key concepts:
//! - Presence validation with the configurable default message
//! - Closure rules adding errors against specific attributes or the record
//! - Rules on an ancestor type applying to descendant records
//! - Humanized `full_messages` output
//!
//! Run with: cargo run --example validation_rules

use serde_json::{json, Value};
use standin::{
    validates_presence_of, AttributeMap, Record, RecordState, Rule, RuleRegistry, TypeInfo,
};

static USER: TypeInfo = TypeInfo::new("User", None, &["user_name", "email"]);
static ADMIN: TypeInfo = TypeInfo::new("Admin", Some(&USER), &["access_level"]);

#[derive(Default)]
struct Admin {
    state: RecordState,
    attributes: AttributeMap,
}

impl Record for Admin {
    fn type_info(&self) -> &'static TypeInfo {
        &ADMIN
    }

    fn state(&self) -> &RecordState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RecordState {
        &mut self.state
    }

    fn read_attribute(&self, key: &str) -> Value {
        self.attributes.get(key).cloned().unwrap_or(Value::Null)
    }

    fn write_attribute(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }
}

fn main() {
    println!("=== Validation Rules Example ===\n");

    let registry = RuleRegistry::global();

    // Shared rules live on the parent type.
    validates_presence_of(registry, &USER, &["user_name", "email"], None);
    registry.register(
        &USER,
        Rule::check(|record: &mut dyn Record| {
            let ok = record
                .read_attribute("email")
                .as_str()
                .map_or(true, |email| email.contains('@'));
            if !ok {
                record.errors_mut().add("email", "must contain @");
            }
            ok
        }),
    );

    // Subtype-specific rule; invisible to plain users.
    validates_presence_of(registry, &ADMIN, &["access_level"], Some("must be granted"));

    let mut admin = Admin::default();
    admin.write_attribute("email", json!("not-an-address"));

    println!("valid: {}", admin.is_valid());
    println!("errors ({} keys):", admin.errors().len());
    for message in admin.errors().full_messages() {
        println!("  - {message}");
    }

    admin
        .assign_attributes(AttributeMap::from_iter([
            ("user_name".to_string(), json!("root")),
            ("email".to_string(), json!("root@example.com")),
            ("access_level".to_string(), json!("super")),
        ]))
        .unwrap();

    println!("\nafter fixing the attributes:");
    println!("valid: {}", admin.is_valid());

    println!("\n=== Example Complete ===");
}
