//! List command implementation.
//!
//! The `workflow-factory list` command lists workflows and their steps.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::factory::WorkflowKind;
use crate::ui::{should_use_colors, UserInterface, WorkflowTheme};

use super::dispatcher::{Command, CommandResult};

/// One workflow as shown by `list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowListing {
    pub name: &'static str,
    pub title: &'static str,
    pub steps: Vec<&'static str>,
}

impl From<WorkflowKind> for WorkflowListing {
    fn from(kind: WorkflowKind) -> Self {
        Self {
            name: kind.as_str(),
            title: kind.title(),
            steps: kind.step_names(),
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let listings: Vec<WorkflowListing> =
            WorkflowKind::ALL.into_iter().map(Into::into).collect();

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&listings)?);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            WorkflowTheme::new()
        } else {
            WorkflowTheme::plain()
        };

        ui.message(&format!("  {}", theme.key.apply_to("Workflows:")));
        for listing in &listings {
            ui.message(&format!(
                "    {}{} {}",
                theme.highlight.apply_to(listing.name),
                theme.dim.apply_to(":"),
                theme.format_chain(&listing.steps),
            ));
            ui.message(&format!("      {}", theme.dim.apply_to(listing.title)));
        }

        Ok(CommandResult::success())
    }
}
