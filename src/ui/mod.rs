//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait, the only path step output takes to the user
//! - [`TerminalUI`] for styled terminal output
//! - [`NonInteractiveUI`] for pipes, CI and other headless environments
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use workflow_factory::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Executing Custom Workflow:");
//! ui.message("Preparing Special Order...");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, WorkflowTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Write output the user explicitly asked for (e.g. `--json`).
    /// Shown in every output mode.
    fn data(&mut self, text: &str);

    /// Display an error message. Errors are shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);
}
