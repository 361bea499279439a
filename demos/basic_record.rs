//! Basic Record
//!
//! This example demonstrates the record lifecycle without any validations:
//! attribute assignment, the new/saved distinction, and the create/update
//! hooks.
//!
//! Key concepts:
//! - Implementing the `Record` trait for a plain struct
//! - Attribute assignment checked against the declared attribute set
//! - `save` dispatching to create first, update afterwards
//!
//! Run with: cargo run --example basic_record

use serde_json::{json, Value};
use standin::{AttributeMap, Record, RecordState, TypeInfo};

static TASK: TypeInfo = TypeInfo::new("Task", None, &["title", "done"]);

#[derive(Default)]
struct Task {
    state: RecordState,
    attributes: AttributeMap,
}

impl Record for Task {
    fn type_info(&self) -> &'static TypeInfo {
        &TASK
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

    // A real record type would persist here; the demo just succeeds.
    fn custom_create(&mut self) -> bool {
        println!("  (pretending to INSERT)");
        true
    }

    fn custom_update(&mut self) -> bool {
        println!("  (pretending to UPDATE)");
        true
    }
}

fn main() {
    println!("=== Basic Record Example ===\n");

    let mut task = Task::with_attributes(AttributeMap::from_iter([
        ("title".to_string(), json!("write demo")),
        ("done".to_string(), json!(false)),
    ]))
    .expect("all keys are declared");

    println!("title = {}", task.read_attribute("title"));
    println!("new record: {}", task.is_new_record());

    println!("\nFirst save goes through the create hook:");
    println!("saved: {}", task.save());
    println!("new record: {}", task.is_new_record());

    println!("\nSecond save goes through the update hook:");
    task.update_attribute("done", json!(true)).unwrap();
    println!("saved: {}", task.save());

    println!("\nUnknown attributes are rejected:");
    println!("{:?}", task.update_attribute("priority", json!(1)));

    println!("\n=== Example Complete ===");
}
