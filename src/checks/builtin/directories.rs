//! Directory structure check.

use crate::checks::{CheckStatus, HealthCheck};
use crate::config::CheckContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::report_paths;

/// Checks that the expected directories exist under the project root.
pub struct DirectoryStructureCheck;

impl HealthCheck for DirectoryStructureCheck {
    fn id(&self) -> &str {
        "directories"
    }

    fn name(&self) -> &str {
        "Directory Structure"
    }

    fn title(&self) -> &str {
        "Checking directory structure..."
    }

    fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        let missing = report_paths(&ctx.project_root, &ctx.manifest.required_dirs, ui);

        if missing.is_empty() {
            ui.success("Directory structure complete");
            Ok(CheckStatus::Success)
        } else {
            ui.warning("Some directories are missing");
            Ok(CheckStatus::MissingRequirement { missing })
        }
    }
}
