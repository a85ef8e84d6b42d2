//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for turning parsed arguments into a command

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::CheckCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Builds and runs the command for a parsed command line.
pub struct CommandDispatcher {
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher; project discovery starts from `cwd`.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Directory project discovery starts from.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Dispatch and execute the health check.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let command = CheckCommand::new(cli.context_options(&self.cwd), cli.json);
        command.execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HealthError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::ffi::OsString;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_cwd() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/work/app"));
        assert_eq!(dispatcher.cwd(), Path::new("/work/app"));
    }

    #[test]
    fn dispatch_surfaces_missing_env_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.env");
        let cli = Cli::try_parse_from([
            OsString::from("adw-health"),
            OsString::from("--env-file"),
            missing.into_os_string(),
        ])
        .unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();

        assert!(matches!(err, HealthError::EnvFileNotFound { .. }));
        assert!(ui.transcript().is_empty());
    }
}
