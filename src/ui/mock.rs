//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use flexloc::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Searching");
//! ui.output("/theme/widget-hero.php\n");
//!
//! assert!(ui.has_message("Searching"));
//! assert_eq!(ui.output_text(), "/theme/widget-hero.php\n");
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    output: String,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages (including key-value lines).
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Everything written with `output`, concatenated.
    pub fn output_text(&self) -> &str {
        &self.output
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.output.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.messages.push(format!("{}: {}", key, value));
    }

    fn output(&mut self, data: &str) {
        self.output.push_str(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_every_channel() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");
        ui.key_value("base", "widget");

        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.headers(), ["h"]);
        assert!(ui.has_message("base: widget"));
    }

    #[test]
    fn output_is_concatenated() {
        let mut ui = MockUI::new();
        ui.output("a");
        ui.output("b\n");
        assert_eq!(ui.output_text(), "ab\n");
    }

    #[test]
    fn clear_resets_captures() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("m");
        ui.output("x");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.output_text().is_empty());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
