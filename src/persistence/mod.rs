//! The save lifecycle: validation gating and create/update dispatch.
//!
//! A record starts `New` and becomes `Saved` the first time its create
//! hook succeeds. Saving is always gated on a full validation pass; once
//! saved, later saves dispatch to the update hook and the record stays
//! saved no matter what the hook reports.

pub mod error;
pub mod lifecycle;

// Re-export commonly used types
pub use error::PersistenceError;
pub use lifecycle::{Lifecycle, LifecycleState};
