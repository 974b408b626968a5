//! Error types for workflow operations.
//!
//! This module defines [`WorkflowError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A step reports its own failure as [`WorkflowError::StepFailed`]; the
//!   processor catches it per step and never lets it escape a workflow run
//! - Use `anyhow::Error` (via `WorkflowError::Other`) for unexpected errors
//! - Everything else propagates to `main`, which reports it and exits non-zero

use thiserror::Error;

/// Core error type for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A step's action failed.
    #[error("Step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    /// Workflow name did not match any known kind.
    #[error("Unknown workflow: {name}")]
    UnknownWorkflow { name: String },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WorkflowError {
    /// Shorthand for a [`WorkflowError::StepFailed`].
    pub fn step_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StepFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;
