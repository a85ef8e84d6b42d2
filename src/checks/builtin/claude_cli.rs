//! Claude Code CLI check.

use crate::checks::{CheckStatus, HealthCheck};
use crate::config::CheckContext;
use crate::error::{HealthError, Result};
use crate::shell::display_command;
use crate::ui::UserInterface;

use super::{exit_code_label, timeout_status};

/// Checks that the Claude Code CLI runs.
///
/// The binary is taken from `CLAUDE_CODE_PATH` when set, else `claude` on PATH.
pub struct ClaudeCliCheck;

impl ClaudeCliCheck {
    fn binary(ctx: &CheckContext) -> String {
        ctx.env
            .get_non_empty(&ctx.manifest.claude_cli_var)
            .unwrap_or(ctx.manifest.claude_cli_default.as_str())
            .to_string()
    }
}

impl HealthCheck for ClaudeCliCheck {
    fn id(&self) -> &str {
        "claude-cli"
    }

    fn name(&self) -> &str {
        "Claude Code CLI"
    }

    fn title(&self) -> &str {
        "Checking Claude Code CLI..."
    }

    fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        let binary = Self::binary(ctx);
        let args = ["--version"];
        tracing::debug!("Using Claude Code CLI at {}", binary);

        let status = match ctx.run(&binary, &args) {
            Ok(result) if result.success => {
                ui.success(&format!(
                    "Claude Code CLI installed: {}",
                    result.stdout.trim()
                ));
                CheckStatus::Success
            }
            Ok(result) => {
                ui.error(&format!(
                    "Claude Code CLI not working (exit code: {})",
                    exit_code_label(result.exit_code)
                ));
                ui.command_output(&result.stderr);
                CheckStatus::ExternalProcessFailure {
                    command: display_command(&binary, &args),
                    code: result.exit_code,
                }
            }
            Err(HealthError::CommandNotFound { .. }) => {
                ui.error(&format!("Claude Code CLI not found at: {}", binary));
                ui.hint(&ctx.manifest.claude_install_hint);
                CheckStatus::MissingRequirement {
                    missing: vec![binary],
                }
            }
            Err(HealthError::CommandTimedOut { command, timeout }) => {
                ui.error(&format!(
                    "Claude Code CLI timed out after {}s",
                    timeout.as_secs()
                ));
                timeout_status(command, timeout)
            }
            Err(e) => {
                ui.error(&format!("Error checking Claude Code CLI: {}", e));
                CheckStatus::UnexpectedError {
                    detail: e.to_string(),
                }
            }
        };

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvSnapshot;
    use crate::shell::ScriptedRunner;
    use crate::ui::MockUI;

    fn context(env: EnvSnapshot, runner: ScriptedRunner) -> CheckContext {
        CheckContext::new(env, "/work/app", Box::new(runner))
    }

    #[test]
    fn default_binary_reports_version() {
        let ctx = context(
            EnvSnapshot::default(),
            ScriptedRunner::new().succeed("claude --version", "1.0.17 (Claude Code)\n"),
        );
        let mut ui = MockUI::new();

        let status = ClaudeCliCheck.run(&ctx, &mut ui).unwrap();

        assert_eq!(status, CheckStatus::Success);
        assert_eq!(
            ui.successes(),
            ["Claude Code CLI installed: 1.0.17 (Claude Code)"]
        );
    }

    #[test]
    fn path_override_is_used() {
        let env = EnvSnapshot::from_pairs([("CLAUDE_CODE_PATH", "/opt/claude/bin/claude")]);
        let ctx = context(
            env,
            ScriptedRunner::new().succeed("/opt/claude/bin/claude --version", "1.0.17"),
        );
        let mut ui = MockUI::new();

        let status = ClaudeCliCheck.run(&ctx, &mut ui).unwrap();

        assert!(status.is_success());
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let env = EnvSnapshot::from_pairs([("CLAUDE_CODE_PATH", "")]);
        let ctx = context(env, ScriptedRunner::new().succeed("claude --version", "1.0.17"));
        let mut ui = MockUI::new();

        assert!(ClaudeCliCheck.run(&ctx, &mut ui).unwrap().is_success());
    }

    #[test]
    fn not_found_names_the_binary() {
        let env = EnvSnapshot::from_pairs([("CLAUDE_CODE_PATH", "/missing/claude")]);
        let ctx = context(env, ScriptedRunner::new());
        let mut ui = MockUI::new();

        let status = ClaudeCliCheck.run(&ctx, &mut ui).unwrap();

        assert_eq!(
            status,
            CheckStatus::MissingRequirement {
                missing: vec!["/missing/claude".to_string()]
            }
        );
        assert_eq!(ui.errors(), ["Claude Code CLI not found at: /missing/claude"]);
        assert_eq!(
            ui.hints(),
            ["Install from: https://docs.anthropic.com/en/docs/claude-code"]
        );
    }

    #[test]
    fn nonzero_exit_is_process_failure() {
        let ctx = context(
            EnvSnapshot::default(),
            ScriptedRunner::new().exit("claude --version", 1, "bad config"),
        );
        let mut ui = MockUI::new();

        let status = ClaudeCliCheck.run(&ctx, &mut ui).unwrap();

        assert_eq!(ui.errors(), ["Claude Code CLI not working (exit code: 1)"]);
        assert!(matches!(
            status,
            CheckStatus::ExternalProcessFailure { code: Some(1), .. }
        ));
        assert_eq!(ui.command_outputs(), ["bad config"]);
    }

    #[test]
    fn timeout_fails() {
        let ctx = context(
            EnvSnapshot::default(),
            ScriptedRunner::new().time_out("claude --version"),
        );
        let mut ui = MockUI::new();

        let status = ClaudeCliCheck.run(&ctx, &mut ui).unwrap();

        assert!(matches!(status, CheckStatus::Timeout { .. }));
        assert_eq!(ui.errors(), ["Claude Code CLI timed out after 5s"]);
    }

    #[test]
    fn spawn_error_is_unexpected() {
        let ctx = context(
            EnvSnapshot::default(),
            ScriptedRunner::new().on("claude --version", || {
                Err(HealthError::CommandSpawn {
                    command: "claude --version".to_string(),
                    message: "permission denied".to_string(),
                })
            }),
        );
        let mut ui = MockUI::new();

        let status = ClaudeCliCheck.run(&ctx, &mut ui).unwrap();

        assert!(matches!(status, CheckStatus::UnexpectedError { .. }));
        assert!(ui.errors()[0].starts_with("Error checking Claude Code CLI: "));
    }
}
