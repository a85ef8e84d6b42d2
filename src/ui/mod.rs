//! Console output for the health report.
//!
//! This module provides:
//! - [`UserInterface`] trait so checks and the runner never print directly
//! - [`TerminalUI`] writing the report to standard output
//! - [`MockUI`] capturing output for assertions
//!
//! # Example
//!
//! ```
//! use adw_health::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("Checking GitHub CLI...");
//! ui.success("GitHub CLI authenticated");
//! assert!(ui.successes().contains(&"GitHub CLI authenticated".to_string()));
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, HealthTheme};

/// Trait for report output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a passing item.
    fn success(&mut self, msg: &str);

    /// Display a non-fatal warning.
    fn warning(&mut self, msg: &str);

    /// Display a failing item.
    fn error(&mut self, msg: &str);

    /// Display neutral information.
    fn info(&mut self, msg: &str);

    /// Display a remediation hint under the previous line.
    fn hint(&mut self, msg: &str);

    /// Show a banner header.
    fn show_header(&mut self, title: &str);

    /// Show the title of a report section.
    fn show_section(&mut self, title: &str);

    /// Show captured output of an external command (verbose mode only).
    fn command_output(&mut self, output: &str);
}
