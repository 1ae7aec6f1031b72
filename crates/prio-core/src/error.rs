//! Typed errors surfaced by the operations layer.
//!
//! The engine itself almost never fails: malformed field values resolve to
//! documented component defaults instead of erroring, so the only rejection
//! the core reports is an empty batch. Anything unexpected is the request
//! layer's job to catch and report as a generic processing failure.

use thiserror::Error;

/// Client-input errors reported by [`crate::api`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The caller submitted an empty task batch.
    #[error("No tasks provided")]
    NoTasks,
}
