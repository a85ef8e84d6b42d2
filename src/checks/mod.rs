//! Environment health checks.
//!
//! - [`HealthCheck`] - The trait every check implements
//! - [`CheckStatus`] / [`CheckResult`] - Tagged check outcomes
//! - [`CheckRegistry`] - Ordered set of checks to run
//! - [`Runner`] - Runs checks inside a fault boundary and prints the summary
//! - [`HealthReport`] - Aggregated results and exit code
//! - [`builtin`] - The six ADW checks
//!
//! # Example
//!
//! ```
//! use adw_health::checks::{CheckRegistry, Runner};
//! use adw_health::config::{CheckContext, EnvSnapshot};
//! use adw_health::shell::ScriptedRunner;
//! use adw_health::ui::MockUI;
//!
//! let ctx = CheckContext::new(
//!     EnvSnapshot::default(),
//!     "/nonexistent/project",
//!     Box::new(ScriptedRunner::new()),
//! );
//! let registry = CheckRegistry::with_builtins();
//! let mut ui = MockUI::new();
//!
//! let report = Runner::new(&registry).run(&ctx, &mut ui);
//! assert_eq!(report.total(), 6);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod builtin;
pub mod registry;
pub mod report;
pub mod runner;
pub mod status;

pub use registry::CheckRegistry;
pub use report::HealthReport;
pub use runner::Runner;
pub use status::{CheckResult, CheckStatus};

use crate::config::CheckContext;
use crate::error::Result;
use crate::ui::UserInterface;

/// A check that inspects one aspect of the environment.
///
/// Checks print their own item lines through `ui` and return a status.
/// Returning `Err` (or panicking) is allowed; the runner turns either into
/// an [`CheckStatus::UnexpectedError`] result.
pub trait HealthCheck {
    /// Stable identifier for this check.
    fn id(&self) -> &str;

    /// Name shown in the summary.
    fn name(&self) -> &str;

    /// Section title shown when the check starts.
    fn title(&self) -> &str;

    /// Inspect the environment.
    fn run(&self, ctx: &CheckContext, ui: &mut dyn UserInterface) -> Result<CheckStatus>;
}
