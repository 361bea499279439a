//! Persistence error types.

use thiserror::Error;

/// Errors surfaced by the strict save entry point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// `save` returned false: validation failed, or a persistence hook
    /// reported failure.
    #[error("Record not saved")]
    RecordNotSaved,
}
