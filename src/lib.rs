//! adw-health - Readiness checks for an AI Developer Workflow checkout.
//!
//! Runs a fixed set of checks (environment variables, GitHub CLI, Claude Code
//! CLI, Python packages, directory layout, ADW scripts) and prints a pass/fail
//! report. The process exits 0 only when every check passes.
//!
//! # Modules
//!
//! - [`checks`] - Check trait, built-in checks, runner and report
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.env` loading, requirement lists and the check context
//! - [`error`] - Error types and result aliases
//! - [`secrets`] - Secret detection and value masking
//! - [`shell`] - External process execution with timeouts
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use adw_health::checks::{CheckRegistry, Runner};
//! use adw_health::config::{CheckContext, EnvSnapshot};
//! use adw_health::shell::ScriptedRunner;
//! use adw_health::ui::MockUI;
//!
//! let env = EnvSnapshot::from_pairs([
//!     ("ANTHROPIC_API_KEY", "sk-ant-0123456789abcdef"),
//!     ("GITHUB_REPO_URL", "https://github.com/acme/app"),
//! ]);
//! let ctx = CheckContext::new(env, "/work/app", Box::new(ScriptedRunner::new()));
//! let mut ui = MockUI::new();
//!
//! let report = Runner::new(&CheckRegistry::with_builtins()).run(&ctx, &mut ui);
//! assert!(report.results()[0].passed());
//! assert!(ui.contains("ANTHROPIC_API_KEY: sk-ant-012..."));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod secrets;
pub mod shell;
pub mod ui;

pub use error::{HealthError, Result};
