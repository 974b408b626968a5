//! Run command implementation.
//!
//! The `workflow-factory run` command executes one or more workflows, each
//! under a header, separated by blank lines. Without `--workflow` it runs
//! every built-in workflow in [`WorkflowKind::ALL`] order.

use tracing::debug;

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::factory::WorkflowKind;
use crate::runner::{RunProgress, WorkflowProcessor};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Workflows to execute, in order.
    pub fn workflows(&self) -> Vec<WorkflowKind> {
        if self.args.workflow.is_empty() {
            WorkflowKind::ALL.to_vec()
        } else {
            self.args.workflow.clone()
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workflows = self.workflows();
        debug!(?workflows, "Running workflows");

        for (index, kind) in workflows.iter().enumerate() {
            if index > 0 {
                ui.message("");
            }
            ui.show_header(&kind.header());

            let mut total = 0;
            let mut failed = 0;
            WorkflowProcessor::new(*kind).execute_workflow_with_progress(ui, |progress| {
                match progress {
                    RunProgress::StepStarting { total: t, .. } => total = t,
                    RunProgress::StepFailed { .. } => failed += 1,
                    RunProgress::StepFinished { .. } => {}
                }
            });

            if ui.output_mode().shows_detail() {
                let step_label = if total == 1 { "step" } else { "steps" };
                ui.message(&format!("  {} {}, {} failed", total, step_label, failed));
            }
        }

        Ok(CommandResult::success())
    }
}
