//! Secret pattern matching.
//!
//! Decides whether an environment variable holds a secret by matching its
//! name against patterns.

use regex::Regex;

/// A pattern that identifies secret values.
#[derive(Debug, Clone)]
pub struct SecretPattern {
    /// Name of this pattern (for debugging).
    pub name: String,
    /// Regex pattern to match environment variable names.
    pub env_pattern: Regex,
}

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN)$"),
    ("personal_access_token", r"(?i)^(.*_)?PAT$"),
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD|PWD)$"),
    ("credential", r"(?i)^.*_?CREDENTIALS?$"),
    ("private_key", r"(?i)^.*_?PRIVATE_KEY$"),
];

/// Matches environment variable names against secret patterns.
///
/// # Example
///
/// ```
/// use adw_health::secrets::SecretMatcher;
///
/// let matcher = SecretMatcher::with_builtins();
///
/// assert!(matcher.is_secret("ANTHROPIC_API_KEY"));
/// assert!(matcher.is_secret("GITHUB_PAT"));
///
/// assert!(!matcher.is_secret("CLAUDE_CODE_PATH"));
/// assert!(!matcher.is_secret("GITHUB_REPO_URL"));
/// ```
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<SecretPattern>,
}

impl SecretMatcher {
    /// Create a matcher with built-in patterns.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|(name, pattern)| {
                Regex::new(pattern).ok().map(|env_pattern| SecretPattern {
                    name: name.to_string(),
                    env_pattern,
                })
            })
            .collect();

        Self { patterns }
    }

    /// Check if an environment variable name matches any secret pattern.
    pub fn is_secret(&self, env_name: &str) -> bool {
        self.matching_pattern(env_name).is_some()
    }

    /// Name of the first pattern matching `env_name`, if any.
    pub fn matching_pattern(&self, env_name: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.env_pattern.is_match(env_name))
            .map(|p| p.name.as_str())
    }
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}
