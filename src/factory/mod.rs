//! Workflow factories.
//!
//! A factory turns a workflow kind into a fresh, ordered list of steps.
//!
//! - [`WorkflowFactory`] - the factory capability, implemented by test doubles too
//! - [`WorkflowKind`] - the built-in workflows
//!
//! # Example
//!
//! ```
//! use workflow_factory::factory::{WorkflowFactory, WorkflowKind};
//!
//! let steps = WorkflowKind::InvoiceProcessing.create_workflow_steps();
//! let names: Vec<_> = steps.iter().map(|s| s.name()).collect();
//! assert_eq!(names, ["generate_invoice", "send_invoice"]);
//! ```

pub mod kind;

pub use kind::WorkflowKind;

use crate::steps::WorkflowStep;

/// Produces the ordered steps of one workflow.
///
/// Every call must build new step instances and return them in the same order.
pub trait WorkflowFactory {
    /// Label used in logs.
    fn name(&self) -> &str;

    /// Build the workflow's steps, in execution order.
    fn create_workflow_steps(&self) -> Vec<Box<dyn WorkflowStep>>;
}

impl<F: WorkflowFactory + ?Sized> WorkflowFactory for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn create_workflow_steps(&self) -> Vec<Box<dyn WorkflowStep>> {
        (**self).create_workflow_steps()
    }
}

impl<F: WorkflowFactory + ?Sized> WorkflowFactory for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn create_workflow_steps(&self) -> Vec<Box<dyn WorkflowStep>> {
        (**self).create_workflow_steps()
    }
}
