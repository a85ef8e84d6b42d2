//! Status icons used across the report.

use super::theme::HealthTheme;

/// Status kinds a report line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Something checked out.
    Success,
    /// Something is wrong.
    Failed,
    /// Non-fatal warning.
    Warning,
    /// Neutral information.
    Info,
    /// A check is starting.
    Running,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Running => "◆",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &HealthTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Info => theme.info.apply_to(icon).to_string(),
            Self::Running => theme.header.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &HealthTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Info.icon(), "ℹ");
        assert_eq!(StatusKind::Running.icon(), "◆");
    }

    #[test]
    fn format_with_plain_theme() {
        let theme = HealthTheme::plain();
        assert_eq!(
            StatusKind::Failed.format(&theme, "gh not found"),
            "✗ gh not found"
        );
    }

    #[test]
    fn styled_contains_icon() {
        let theme = HealthTheme::new();
        for kind in [
            StatusKind::Success,
            StatusKind::Failed,
            StatusKind::Warning,
            StatusKind::Info,
            StatusKind::Running,
        ] {
            assert!(kind.styled(&theme).contains(kind.icon()));
        }
    }
}
