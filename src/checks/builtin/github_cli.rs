//! GitHub CLI check.

use crate::checks::{CheckStatus, HealthCheck};
use crate::config::CheckContext;
use crate::error::{HealthError, Result};
use crate::shell::display_command;
use crate::ui::UserInterface;

use super::{exit_code_label, timeout_status};

/// Checks that `gh` is installed and logged in.
pub struct GitHubCliCheck;

impl GitHubCliCheck {
    /// `gh --version`. Returns a failing status to stop at, or `None` to go on.
    fn check_installed(
        &self,
        ctx: &CheckContext,
        ui: &mut dyn UserInterface,
    ) -> Option<CheckStatus> {
        let gh = ctx.manifest.github_cli.as_str();
        let args = ["--version"];

        match ctx.run(gh, &args) {
            Ok(result) if result.success => {
                ui.success(&format!("GitHub CLI installed: {}", result.first_line()));
                None
            }
            Ok(result) => {
                ui.error(&format!(
                    "GitHub CLI not working (exit code: {})",
                    exit_code_label(result.exit_code)
                ));
                ui.command_output(&result.stderr);
                Some(CheckStatus::ExternalProcessFailure {
                    command: display_command(gh, &args),
                    code: result.exit_code,
                })
            }
            Err(HealthError::CommandNotFound { .. }) => {
                ui.error("GitHub CLI not found");
                ui.hint(&ctx.manifest.github_install_hint);
                Some(CheckStatus::MissingRequirement {
                    missing: vec![gh.to_string()],
                })
            }
            Err(HealthError::CommandTimedOut { command, timeout }) => {
                ui.error(&format!(
                    "GitHub CLI timed out after {}s",
                    timeout.as_secs()
                ));
                Some(timeout_status(command, timeout))
            }
            Err(e) => {
                ui.error(&format!("Error checking GitHub CLI: {}", e));
                Some(CheckStatus::UnexpectedError {
                    detail: e.to_string(),
                })
            }
        }
    }
}

impl HealthCheck for GitHubCliCheck {
    fn id(&self) -> &str {
        "github-cli"
    }

    fn name(&self) -> &str {
        "GitHub CLI"
    }

    fn title(&self) -> &str {
        "Checking GitHub CLI..."
    }

    fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        if let Some(failure) = self.check_installed(ctx, ui) {
            return Ok(failure);
        }

        let gh = ctx.manifest.github_cli.as_str();
        let args = ["auth", "status"];

        let status = match ctx.run(gh, &args) {
            Ok(result) if result.success => {
                ui.success("GitHub CLI authenticated");
                CheckStatus::Success
            }
            Ok(result) => {
                ui.error("GitHub CLI not authenticated");
                ui.hint(&ctx.manifest.github_auth_hint);
                ui.command_output(&result.stderr);
                CheckStatus::ExternalProcessFailure {
                    command: display_command(gh, &args),
                    code: result.exit_code,
                }
            }
            Err(HealthError::CommandTimedOut { command, timeout }) => {
                ui.error(&format!(
                    "GitHub CLI authentication check timed out after {}s",
                    timeout.as_secs()
                ));
                timeout_status(command, timeout)
            }
            // Known leniency: an auth check that cannot run does not fail the check.
            Err(e) => {
                tracing::debug!("gh auth status could not run: {}", e);
                ui.warning(&format!("Could not verify authentication: {}", e));
                CheckStatus::Success
            }
        };

        Ok(status)
    }
}
