//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand means `run` with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => super::run::RunCommand::new(args.clone()).execute(ui),
            Some(Commands::List(args)) => super::list::ListCommand::new(args.clone()).execute(ui),
            None => super::run::RunCommand::new(RunArgs::default()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        assert_eq!(CommandResult::success().exit_code, 0);
    }

    #[test]
    fn dispatch_without_subcommand_runs_everything() {
        let cli = Cli::parse_from(["workflow-factory"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.headers().len(), 3);
        assert_eq!(ui.messages().iter().filter(|m| !m.is_empty()).count(), 7);
    }

    #[test]
    fn dispatch_run_with_single_workflow() {
        let cli = Cli::parse_from(["workflow-factory", "run", "--workflow", "invoice"]);
        let mut ui = MockUI::new();

        CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert_eq!(ui.headers(), &["Executing Invoice Processing Workflow:"]);
    }

    #[test]
    fn dispatch_list() {
        let cli = Cli::parse_from(["workflow-factory", "list"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_message("validate_order → process_payment → ship_order"));
        assert!(ui.has_message("generate_invoice → send_invoice"));
        assert!(ui.has_message("prepare_special_order → notify_customer"));
        assert!(ui.data_written().is_empty());
    }
}
