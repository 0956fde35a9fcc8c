//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! Status messages respect the [`OutputMode`]; data written with
//! [`UserInterface::output`] (located paths, rendered templates, JSON) is
//! always shown.
//!
//! # Example
//!
//! ```
//! use flexloc::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Silent);
//! ui.show_header("Candidates");
//! ui.success("Template found");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, FlexlocTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a `key: value` line in the theme's key style.
    fn key_value(&mut self, key: &str, value: &str);

    /// Write command data verbatim, regardless of output mode.
    fn output(&mut self, data: &str);
}
