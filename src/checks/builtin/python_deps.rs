//! Python dependency check.
//!
//! Each package is resolved by asking the interpreter to import it, so the
//! answer matches what the ADW scripts will see at runtime. Every dependency
//! is attempted even after one fails.

use crate::checks::{CheckStatus, HealthCheck};
use crate::config::{CheckContext, PythonDependency};
use crate::error::{HealthError, Result};
use crate::shell::resolve_tool_path;
use crate::ui::UserInterface;

use super::{exit_code_label, timeout_status};

/// Checks that the Python packages the ADW scripts import are installed.
pub struct PythonDepsCheck;

/// How one dependency resolved.
enum Resolution {
    Found,
    Missing,
    TimedOut(CheckStatus),
    Failed(String),
}

impl PythonDepsCheck {
    /// `ADW_PYTHON` if set, else the first candidate found on PATH.
    fn interpreter(ctx: &CheckContext) -> Option<String> {
        if let Some(python) = ctx.env.get_non_empty(&ctx.manifest.python_var) {
            return Some(python.to_string());
        }
        let path = ctx.env.path_entries();
        ctx.manifest
            .python_candidates
            .iter()
            .find_map(|candidate| resolve_tool_path(candidate, &path))
            .map(|p| p.to_string_lossy().into_owned())
    }

    fn resolve(
        ctx: &CheckContext,
        python: &str,
        dep: &PythonDependency,
        ui: &mut dyn UserInterface,
    ) -> Resolution {
        let script = dep.import_script();

        match ctx.run(python, &["-c", script.as_str()]) {
            Ok(result) if result.success => {
                let version = result.first_line();
                if dep.version_attr.is_some() && !version.is_empty() {
                    ui.success(&format!("{}: {}", dep.name, version));
                } else {
                    ui.success(&format!("{} installed", dep.name));
                }
                Resolution::Found
            }
            Ok(result) if is_import_failure(&result.stderr) => {
                ui.error(&format!("{} not installed", dep.name));
                ui.command_output(&result.stderr);
                Resolution::Missing
            }
            Ok(result) => {
                let detail = format!(
                    "{} exited with code {}",
                    python,
                    exit_code_label(result.exit_code)
                );
                ui.error(&format!("Error checking {}: {}", dep.name, detail));
                ui.command_output(&result.stderr);
                Resolution::Failed(detail)
            }
            Err(HealthError::CommandTimedOut { command, timeout }) => {
                ui.error(&format!(
                    "{} could not be checked within {}s",
                    dep.name,
                    timeout.as_secs()
                ));
                Resolution::TimedOut(timeout_status(command, timeout))
            }
            Err(e) => {
                ui.error(&format!("Error checking {}: {}", dep.name, e));
                Resolution::Failed(e.to_string())
            }
        }
    }
}

/// Whether an interpreter's stderr shows the import itself failed.
fn is_import_failure(stderr: &str) -> bool {
    stderr.contains("ModuleNotFoundError") || stderr.contains("ImportError")
}

impl HealthCheck for PythonDepsCheck {
    fn id(&self) -> &str {
        "python-deps"
    }

    fn name(&self) -> &str {
        "Python Dependencies"
    }

    fn title(&self) -> &str {
        "Checking Python dependencies..."
    }

    fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        let deps = &ctx.manifest.python_dependencies;

        let Some(python) = Self::interpreter(ctx) else {
            ui.error("Python interpreter not found");
            ui.hint(&format!(
                "Install Python 3 or set {} to an interpreter",
                ctx.manifest.python_var
            ));
            for dep in deps {
                ui.error(&format!("{} not installed", dep.name));
            }
            return Ok(CheckStatus::MissingRequirement {
                missing: deps.iter().map(|d| d.name.clone()).collect(),
            });
        };
        tracing::debug!("Resolving Python dependencies with {}", python);

        let mut missing = Vec::new();
        let mut timed_out = None;
        let mut unexpected = None;

        for dep in deps {
            match Self::resolve(ctx, &python, dep, ui) {
                Resolution::Found => {}
                Resolution::Missing => missing.push(dep.name.clone()),
                Resolution::TimedOut(status) => {
                    timed_out.get_or_insert(status);
                }
                Resolution::Failed(detail) => {
                    unexpected.get_or_insert(detail);
                }
            }
        }

        if !missing.is_empty() {
            return Ok(CheckStatus::MissingRequirement { missing });
        }
        if let Some(status) = timed_out {
            return Ok(status);
        }
        if let Some(detail) = unexpected {
            return Ok(CheckStatus::UnexpectedError { detail });
        }

        ui.success("All Python dependencies installed");
        Ok(CheckStatus::Success)
    }
}
