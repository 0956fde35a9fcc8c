//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, FlexlocTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status goes to stdout; errors go to stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: FlexlocTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            FlexlocTheme::new()
        } else {
            FlexlocTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "  {}", self.theme.format_key_value(key, value)).ok();
        }
    }

    fn output(&mut self, data: &str) {
        self.term.write_all(data.as_bytes()).ok();
        self.term.flush().ok();
    }
}

/// Create the terminal UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
