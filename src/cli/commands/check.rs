//! The health check command.

use std::io::Write;

use crate::checks::{CheckRegistry, HealthReport, Runner};
use crate::config::{CheckContext, ContextOptions};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs every built-in check against the discovered project.
pub struct CheckCommand {
    options: ContextOptions,
    json: bool,
}

impl CheckCommand {
    /// Create the command.
    pub fn new(options: ContextOptions, json: bool) -> Self {
        Self { options, json }
    }

    /// Run the built-in checks against an already-built context.
    pub fn run_checks(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> HealthReport {
        let registry = CheckRegistry::with_builtins();
        Runner::new(&registry).run(ctx, ui)
    }

    fn result_for(report: &HealthReport) -> CommandResult {
        if report.all_passed() {
            CommandResult::success()
        } else {
            CommandResult::failure(report.exit_code())
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CheckContext::load(&self.options)?;
        tracing::debug!(
            "Running checks in {} (timeout {}s)",
            ctx.project_root.display(),
            ctx.timeout.as_secs()
        );

        let report = self.run_checks(&ctx, ui);

        if self.json {
            let mut stdout = std::io::stdout().lock();
            report.write_json(&mut stdout)?;
            stdout.flush()?;
        }

        Ok(Self::result_for(&report))
    }
}
