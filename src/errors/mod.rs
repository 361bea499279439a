//! Structured validation error reporting.
//!
//! Every record owns one [`ErrorCollection`]: an insertion-ordered mapping
//! from an attribute (or the whole-record sentinel) to the messages recorded
//! against it. Validation failures are never surfaced as Rust errors; they
//! accumulate here and are read back through boolean verdicts and
//! [`ErrorCollection::full_messages`].
//!
//! The module also hosts the process-wide default-message table used by the
//! built-in validations, so consumers can reword the stock messages before
//! any validation runs.

pub mod collection;
pub mod messages;

// Re-export commonly used types
pub use collection::{humanize, ErrorCollection, ErrorKey};
pub use messages::{default_message, set_default_message, MessageKey};
