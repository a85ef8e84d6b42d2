//! Terminal UI writing to standard output.

use console::Term;
use std::io::Write;

use super::{should_use_colors, HealthTheme, OutputMode, StatusKind, UserInterface};

/// Indent for item lines under a section.
const ITEM_INDENT: &str = "  ";

/// Indent for hints under an item.
const HINT_INDENT: &str = "     ";

/// Terminal UI implementation.
///
/// Everything, failures included, goes to standard output so the report reads
/// top to bottom in one stream.
pub struct TerminalUI {
    term: Term,
    theme: HealthTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, colored when stdout is a TTY and `NO_COLOR` is unset.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HealthTheme::new()
        } else {
            HealthTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: HealthTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", text).ok();
        }
    }

    fn item(&mut self, kind: StatusKind, msg: &str) {
        let text = format!("{}{}", ITEM_INDENT, kind.format(&self.theme, msg));
        self.line(&text);
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        self.item(StatusKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.item(StatusKind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.item(StatusKind::Failed, msg);
    }

    fn info(&mut self, msg: &str) {
        self.item(StatusKind::Info, msg);
    }

    fn hint(&mut self, msg: &str) {
        let text = format!("{}{}", HINT_INDENT, self.theme.format_hint(msg));
        self.line(&text);
    }

    fn show_header(&mut self, title: &str) {
        let rule = self.theme.format_rule();
        let title = self.theme.format_header(title);
        self.line(&rule);
        self.line(&title);
        self.line(&rule);
    }

    fn show_section(&mut self, title: &str) {
        let title = self.theme.section.apply_to(title).to_string();
        let text = StatusKind::Running.format(&self.theme, &title);
        self.line("");
        self.line(&text);
    }

    fn command_output(&mut self, output: &str) {
        if !self.mode.shows_command_output() {
            return;
        }
        for l in output.lines() {
            let text = format!("{}{}", HINT_INDENT, self.theme.dim.apply_to(l));
            self.line(&text);
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(mode, HealthTheme::plain()))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}
