//! The record contract: type descriptors, attribute assignment, lifecycle
//! state, and the hooks validation and persistence call back into.
//!
//! A consumer type becomes a record by implementing [`Record`]: it points at
//! a static [`TypeInfo`] describing its identity and declared attributes,
//! embeds a [`RecordState`] for the error collection and saved flag, and
//! provides raw attribute reads and writes. Everything else (assignment
//! checking, lifecycle queries, validation and save entry points) is
//! provided on top.

pub mod base;
pub mod logging;
pub mod type_info;

// Re-export commonly used types
pub use base::{AttributeError, AttributeMap, Record, RecordState};
pub use logging::{LogSink, MemorySink, TracingSink};
pub use type_info::TypeInfo;
