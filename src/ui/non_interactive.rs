//! Non-interactive UI for pipes, CI and headless environments.

use super::{OutputMode, UserInterface};

/// Plain-text UI implementation.
///
/// Writes unstyled lines with `println!`/`eprintln!`, so redirected output is
/// exactly the step and header text.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_output() {
            println!("{}", msg);
        }
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_output() {
            println!("{}", title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_keeps_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn quiet_mode_output_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        ui.message("hidden");
        ui.show_header("hidden");
    }
}
