//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use workflow_factory::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.show_header("Executing Order Processing Workflow:");
//! ui.message("Validating Order...");
//!
//! // Assert on captured interactions
//! assert_eq!(ui.messages(), &["Validating Order..."]);
//! assert_eq!(
//!     ui.transcript(),
//!     &["Executing Order Processing Workflow:", "Validating Order..."]
//! );
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every call regardless of output mode. `transcript` keeps headers
/// and messages interleaved in the order stdout would show them; `data` is
/// kept apart.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    data: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured data output.
    pub fn data_written(&self) -> &[String] {
        &self.data
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get headers and messages in the order they were emitted.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.data.clear();
        self.errors.clear();
        self.headers.clear();
        self.transcript.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(title.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.data("{}");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.data_written(), &["{}"]);
        assert_eq!(ui.errors(), &["Oops"]);
    }

    #[test]
    fn mock_ui_captures_headers() {
        let mut ui = MockUI::new();

        ui.show_header("Executing Custom Workflow:");

        assert_eq!(ui.headers(), &["Executing Custom Workflow:"]);
    }

    #[test]
    fn transcript_interleaves_headers_and_messages() {
        let mut ui = MockUI::new();

        ui.show_header("A");
        ui.message("one");
        ui.error("not in transcript");
        ui.message("");
        ui.show_header("B");

        assert_eq!(ui.transcript(), &["A", "one", "", "B"]);
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();
        ui.message("Shipping Order...");
        ui.error("Error executing step: boom");

        assert!(ui.has_message("Shipping"));
        assert!(ui.has_error("boom"));
        assert!(!ui.has_error("missing"));
    }

    #[test]
    fn mock_ui_clear() {
        let mut ui = MockUI::new();
        ui.message("Test");
        ui.show_header("Header");
        ui.error("Error");

        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.headers().is_empty());
        assert!(ui.errors().is_empty());
        assert!(ui.transcript().is_empty());
    }

    #[test]
    fn mock_ui_modes() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
    }
}
