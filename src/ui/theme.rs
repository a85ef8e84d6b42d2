//! Visual theme and styling.

use console::Style;

/// Width of the banner rule drawn around headers.
pub const BANNER_WIDTH: usize = 60;

/// The report's visual theme.
#[derive(Debug, Clone)]
pub struct HealthTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for section titles (bold).
    pub section: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for banner rules (dim).
    pub border: Style,
    /// Style for remediation hints (magenta dim).
    pub hint: Style,
}

impl Default for HealthTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            section: Style::new().bold(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            section: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a banner rule.
    pub fn format_rule(&self) -> String {
        self.border.apply_to("=".repeat(BANNER_WIDTH)).to_string()
    }

    /// Format a header title.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }

    /// Format a remediation hint.
    pub fn format_hint(&self, hint: &str) -> String {
        self.hint.apply_to(hint).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_is_banner_width() {
        let theme = HealthTheme::plain();
        assert_eq!(theme.format_rule(), "=".repeat(60));
    }

    #[test]
    fn plain_header_is_unstyled() {
        let theme = HealthTheme::plain();
        assert_eq!(theme.format_header("ADW Health Check"), "ADW Health Check");
    }

    #[test]
    fn plain_hint_is_unstyled() {
        let theme = HealthTheme::plain();
        assert_eq!(theme.format_hint("Run: gh auth login"), "Run: gh auth login");
    }

    #[test]
    fn default_theme_formats_without_panic() {
        let theme = HealthTheme::default();
        assert!(theme.format_header("Title").contains("Title"));
        assert!(theme.format_hint("hint").contains("hint"));
    }
}
