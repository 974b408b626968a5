//! workflow-factory - interchangeable workflow step families.
//!
//! Steps are small stateless actions. Factories build related steps into an
//! ordered workflow, and a processor runs whatever a factory produces, step by
//! step, reporting a failing step and carrying on with the rest.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`factory`] - Workflow factories and the built-in workflow kinds
//! - [`runner`] - Workflow execution with per-step failure isolation
//! - [`steps`] - The workflow steps
//! - [`ui`] - Terminal output and the test UI
//!
//! # Example
//!
//! ```
//! use workflow_factory::factory::WorkflowKind;
//! use workflow_factory::runner::WorkflowProcessor;
//! use workflow_factory::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! WorkflowProcessor::new(WorkflowKind::OrderProcessing).execute_workflow(&mut ui);
//! assert_eq!(
//!     ui.messages(),
//!     &["Validating Order...", "Processing Payment...", "Shipping Order..."]
//! );
//! ```

pub mod cli;
pub mod error;
pub mod factory;
pub mod runner;
pub mod steps;
pub mod ui;

pub use error::{Result, WorkflowError};
