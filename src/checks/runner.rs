//! Check runner.
//!
//! Runs every registered check in order. Each check runs inside a fault
//! boundary: an error or a panic from one check is reported as that check's
//! failure and the run carries on with the next.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::CheckContext;
use crate::ui::UserInterface;

use super::{CheckRegistry, CheckResult, CheckStatus, HealthCheck, HealthReport};

/// Runs the checks of a registry and prints the summary.
pub struct Runner<'a> {
    registry: &'a CheckRegistry,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a CheckRegistry) -> Self {
        Self { registry }
    }

    /// Run every check, print the summary and return the report.
    pub fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> HealthReport {
        ui.show_header("ADW Health Check");

        let mut results = Vec::with_capacity(self.registry.len());
        for check in self.registry.iter() {
            ui.show_section(check.title());
            let status = run_isolated(check, ctx, ui);
            tracing::debug!("Check '{}' finished: {}", check.id(), status.describe());
            results.push(CheckResult::new(check.name(), status));
        }

        let report = HealthReport::new(results);
        print_summary(&report, ui);
        report
    }
}

fn run_isolated(
    check: &dyn HealthCheck,
    ctx: &CheckContext,
    ui: &mut dyn UserInterface,
) -> CheckStatus {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.run(ctx, &mut *ui)));

    let detail = match outcome {
        Ok(Ok(status)) => return status,
        Ok(Err(e)) => e.to_string(),
        Err(payload) => panic_message(payload.as_ref()),
    };

    ui.error(&format!("Error running {} check: {}", check.name(), detail));
    CheckStatus::UnexpectedError { detail }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "check panicked".to_string()
    }
}

fn print_summary(report: &HealthReport, ui: &mut dyn UserInterface) {
    ui.show_header("Health Check Summary");

    for result in report.results() {
        if result.passed() {
            ui.success(&format!("PASS: {}", result.name));
        } else {
            ui.error(&format!("FAIL: {}", result.name));
        }
    }

    ui.message("");
    ui.message(&format!(
        "Results: {}/{} checks passed",
        report.passed(),
        report.total()
    ));

    if report.all_passed() {
        ui.success("ADW system is healthy and ready to use!");
    } else {
        ui.warning(&format!(
            "{} check(s) failed. Please fix the issues above.",
            report.failed()
        ));
        ui.hint(&format!("Failed: {}", report.failed_names().join(", ")));
    }
}
