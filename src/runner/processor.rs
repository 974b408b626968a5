//! Workflow execution.

use tracing::{debug, warn};

use crate::error::WorkflowError;
use crate::factory::WorkflowFactory;
use crate::ui::UserInterface;

/// Progress events emitted during workflow execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunProgress<'a> {
    /// A step is about to start.
    StepStarting {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// A step finished successfully.
    StepFinished { name: &'a str },
    /// A step failed. Execution continues with the next step.
    StepFailed { name: &'a str, message: &'a str },
}

/// Runs the steps of one bound factory.
///
/// The factory is fixed at construction. Each run asks it for a fresh step
/// list and executes every step in order; a failing step is reported and
/// skipped past, never propagated.
#[derive(Debug, Clone)]
pub struct WorkflowProcessor<F> {
    factory: F,
}

impl<F: WorkflowFactory> WorkflowProcessor<F> {
    /// Create a processor bound to `factory`.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// The bound factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Execute every step of the workflow.
    pub fn execute_workflow(&self, ui: &mut dyn UserInterface) {
        self.execute_workflow_with_progress(ui, |_| {})
    }

    /// Execute every step of the workflow with a progress callback.
    pub fn execute_workflow_with_progress(
        &self,
        ui: &mut dyn UserInterface,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) {
        let steps = self.factory.create_workflow_steps();
        let total = steps.len();
        debug!(workflow = self.factory.name(), total, "Executing workflow");

        for (index, step) in steps.iter().enumerate() {
            let name = step.name();
            on_progress(RunProgress::StepStarting { name, index, total });

            match step.execute_step(ui) {
                Ok(()) => {
                    debug!(step = name, "Step finished");
                    on_progress(RunProgress::StepFinished { name });
                }
                Err(e) => {
                    let message = match e {
                        WorkflowError::StepFailed { message, .. } => message,
                        other => other.to_string(),
                    };
                    warn!(step = name, error = %message, "Step failed, continuing");
                    ui.error(&format!("Error executing step: {}", message));
                    on_progress(RunProgress::StepFailed {
                        name,
                        message: &message,
                    });
                }
            }
        }
    }
}
