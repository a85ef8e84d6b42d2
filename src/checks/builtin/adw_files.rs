//! ADW files check.

use crate::checks::{CheckStatus, HealthCheck};
use crate::config::CheckContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::report_paths;

/// Checks that the ADW scripts and modules are present.
pub struct AdwFilesCheck;

impl HealthCheck for AdwFilesCheck {
    fn id(&self) -> &str {
        "adw-files"
    }

    fn name(&self) -> &str {
        "ADW Files"
    }

    fn title(&self) -> &str {
        "Checking ADW files..."
    }

    fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        let missing = report_paths(&ctx.adws_dir(), &ctx.manifest.required_files, ui);

        if missing.is_empty() {
            ui.success("All ADW files present");
            Ok(CheckStatus::Success)
        } else {
            ui.warning("Some ADW files are missing");
            Ok(CheckStatus::MissingRequirement { missing })
        }
    }
}
