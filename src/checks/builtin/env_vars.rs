//! Environment variable check.

use crate::checks::{CheckStatus, HealthCheck};
use crate::config::CheckContext;
use crate::error::Result;
use crate::secrets::{SecretMatcher, ValueMasker};
use crate::ui::UserInterface;

/// Checks that required variables are set and reports optional ones.
///
/// Required values are always masked. Optional values are masked only when
/// their name looks like a secret.
pub struct EnvVarsCheck {
    matcher: SecretMatcher,
    masker: ValueMasker,
}

impl EnvVarsCheck {
    pub fn new() -> Self {
        Self {
            matcher: SecretMatcher::with_builtins(),
            masker: ValueMasker::default(),
        }
    }

    fn display_optional(&self, name: &str, value: &str) -> String {
        if self.matcher.is_secret(name) {
            self.masker.mask(value)
        } else {
            value.to_string()
        }
    }
}

impl Default for EnvVarsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for EnvVarsCheck {
    fn id(&self) -> &str {
        "env-vars"
    }

    fn name(&self) -> &str {
        "Environment Variables"
    }

    fn title(&self) -> &str {
        "Checking environment variables..."
    }

    fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<CheckStatus> {
        let mut missing = Vec::new();

        for var in &ctx.manifest.required_vars {
            match ctx.env.get_non_empty(var) {
                Some(value) => ui.success(&format!("{}: {}", var, self.masker.mask(value))),
                None => {
                    ui.error(&format!("{}: NOT SET", var));
                    missing.push(var.clone());
                }
            }
        }

        for var in &ctx.manifest.optional_vars {
            match ctx.env.get_non_empty(var) {
                Some(value) => ui.info(&format!("{}: {}", var, self.display_optional(var, value))),
                None => ui.warning(&format!("{}: NOT SET (optional)", var)),
            }
        }

        if !missing.is_empty() {
            ui.error(&format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            ));
            return Ok(CheckStatus::MissingRequirement { missing });
        }

        ui.success("All required environment variables set");
        Ok(CheckStatus::Success)
    }
}
