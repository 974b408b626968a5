//! Workflow execution orchestration.

pub mod processor;

pub use processor::{RunProgress, WorkflowProcessor};
