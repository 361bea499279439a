//! Injectable logging sink for the default persistence stubs.

use std::sync::{Mutex, PoisonError};

/// The one logging capability the core needs: emitting warnings. Records
/// get a tracing-backed sink by default and can inject anything else
/// through [`Record::logger`](crate::Record::logger).
pub trait LogSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Default sink: forwards warnings to `tracing`.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

pub(crate) static DEFAULT_SINK: TracingSink = TracingSink;

/// Sink that keeps warnings in memory, for asserting on them in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings recorded so far, in emit order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_warnings_in_order() {
        let sink = MemorySink::new();
        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.messages(), ["first", "second"]);
    }

    #[test]
    fn memory_sink_starts_empty() {
        assert!(MemorySink::new().messages().is_empty());
    }
}
