//! Running validations against a record.
//!
//! A [`Validator`] drives one pass: clear the record's errors, invoke its
//! custom hook, then execute every rule the registry returns for the
//! record's type. Failures accumulate in the error collection; nothing
//! short-circuits, so a single pass reports every problem at once.

pub mod presence;
pub mod runner;

// Re-export commonly used types
pub use presence::{blank, validates_presence_of};
pub use runner::Validator;
