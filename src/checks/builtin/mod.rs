//! Built-in ADW checks.

mod adw_files;
mod claude_cli;
mod directories;
mod env_vars;
mod github_cli;
mod python_deps;

pub use adw_files::AdwFilesCheck;
pub use claude_cli::ClaudeCliCheck;
pub use directories::DirectoryStructureCheck;
pub use env_vars::EnvVarsCheck;
pub use github_cli::GitHubCliCheck;
pub use python_deps::PythonDepsCheck;

use std::path::Path;
use std::time::Duration;

use crate::checks::CheckStatus;
use crate::ui::UserInterface;

/// Render an exit code for messages; signals have no code.
fn exit_code_label(code: Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

fn timeout_status(command: String, timeout: Duration) -> CheckStatus {
    CheckStatus::Timeout {
        command,
        timeout_secs: timeout.as_secs(),
    }
}

/// Print one line per path under `base` and return the ones that don't exist.
fn report_paths(base: &Path, paths: &[String], ui: &mut dyn UserInterface) -> Vec<String> {
    let mut missing = Vec::new();
    for path in paths {
        if base.join(path).exists() {
            ui.success(path);
        } else {
            ui.error(&format!("{} (missing)", path));
            missing.push(path.clone());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn exit_code_label_handles_signal() {
        assert_eq!(exit_code_label(Some(127)), "127");
        assert_eq!(exit_code_label(None), "signal");
    }

    #[test]
    fn timeout_status_keeps_whole_seconds() {
        assert_eq!(
            timeout_status("gh --version".to_string(), Duration::from_millis(5400)),
            CheckStatus::Timeout {
                command: "gh --version".to_string(),
                timeout_secs: 5
            }
        );
    }

    #[test]
    fn report_paths_marks_missing_entries() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("present")).unwrap();
        let paths = vec!["present".to_string(), "absent".to_string()];
        let mut ui = MockUI::new();

        let missing = report_paths(temp.path(), &paths, &mut ui);

        assert_eq!(missing, vec!["absent"]);
        assert_eq!(ui.successes(), ["present"]);
        assert_eq!(ui.errors(), ["absent (missing)"]);
    }
}
