//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use adw_health::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("ANTHROPIC_API_KEY: NOT SET");
//! ui.hint("Set it in .env");
//!
//! assert!(ui.errors().contains(&"ANTHROPIC_API_KEY: NOT SET".to_string()));
//! assert!(ui.contains("Set it in .env"));
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
    infos: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    command_outputs: Vec<String>,
    transcript: Vec<String>,
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

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured info lines.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all captured command output.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Every line written, in order, regardless of kind.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    fn record(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record(msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record(msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record(msg);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record(msg);
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
        self.record(msg);
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
        self.record(msg);
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record(title);
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
        self.record(title);
    }

    fn command_output(&mut self, output: &str) {
        self.command_outputs.push(output.to_string());
        self.record(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_by_kind() {
        let mut ui = MockUI::new();
        ui.message("plain");
        ui.success("good");
        ui.warning("careful");
        ui.error("bad");
        ui.info("note");
        ui.hint("try this");
        ui.show_header("Header");
        ui.show_section("Section");
        ui.command_output("stderr text");

        assert_eq!(ui.messages(), ["plain"]);
        assert_eq!(ui.successes(), ["good"]);
        assert_eq!(ui.warnings(), ["careful"]);
        assert_eq!(ui.errors(), ["bad"]);
        assert_eq!(ui.infos(), ["note"]);
        assert_eq!(ui.hints(), ["try this"]);
        assert_eq!(ui.headers(), ["Header"]);
        assert_eq!(ui.sections(), ["Section"]);
        assert_eq!(ui.command_outputs(), ["stderr text"]);
    }

    #[test]
    fn transcript_preserves_order() {
        let mut ui = MockUI::new();
        ui.show_section("first");
        ui.error("second");
        ui.success("third");

        assert_eq!(ui.transcript(), ["first", "second", "third"]);
    }

    #[test]
    fn contains_searches_all_lines() {
        let mut ui = MockUI::new();
        ui.info("CLAUDE_CODE_PATH: /opt/claude");

        assert!(ui.contains("/opt/claude"));
        assert!(!ui.contains("GITHUB_PAT"));
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
