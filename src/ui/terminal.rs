//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::store::Theme;

use super::{should_use_colors, DrygTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status output goes to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DrygTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI using the given palette preference.
    pub fn new(mode: OutputMode, theme: Theme) -> Self {
        let theme = if should_use_colors() {
            DrygTheme::for_theme(theme)
        } else {
            DrygTheme::plain()
        };

        Self {
            out: Term::stdout(),
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
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
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
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn palette(&self) -> &DrygTheme {
        &self.theme
    }
}

/// Create the terminal UI.
pub fn create_ui(mode: OutputMode, theme: Theme) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, theme))
}
