//! .env file parsing and discovery.
//!
//! This module provides functionality for parsing environment variable files
//! in the standard KEY=value format.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default env file name looked up during discovery.
pub const ENV_FILE_NAME: &str = ".env";

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`, and ` # trailing` after unquoted values
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use adw_health::config::EnvFileParser;
///
/// let content = r#"
/// # ADW settings
/// export ANTHROPIC_API_KEY=sk-ant-xxxx
/// GITHUB_REPO_URL="https://github.com/acme/app"
/// GITHUB_PAT=
/// "#;
///
/// let vars = EnvFileParser::parse(content).unwrap();
/// assert_eq!(vars.get("ANTHROPIC_API_KEY"), Some(&"sk-ant-xxxx".to_string()));
/// assert_eq!(vars.get("GITHUB_REPO_URL"), Some(&"https://github.com/acme/app".to_string()));
/// assert_eq!(vars.get("GITHUB_PAT"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    pub fn parse(content: &str) -> Result<HashMap<String, String>> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        Ok(vars)
    }

    /// Parse a single line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::unquote(value.trim())))
    }

    /// Remove surrounding quotes, or a trailing comment from an unquoted value.
    fn unquote(value: &str) -> String {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));

        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            match value.find(" #") {
                Some(pos) => value[..pos].trim_end().to_string(),
                None => value.to_string(),
            }
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load and parse an env file, returning empty map if file doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }
}

/// Find the nearest `.env` file, starting at `start` and walking up.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
