//! Configuration for a health check run.
//!
//! - `.env` parsing and discovery in [`env_file`]
//! - Declarative requirement lists in [`manifest`]
//! - The resolved [`CheckContext`] handed to every check in [`context`]
//!
//! # Example
//!
//! ```
//! use adw_health::config::{CheckContext, EnvSnapshot};
//! use adw_health::shell::ScriptedRunner;
//!
//! let env = EnvSnapshot::from_pairs([("ANTHROPIC_API_KEY", "sk-ant-0123456789")]);
//! let ctx = CheckContext::new(env, "/work/app", Box::new(ScriptedRunner::new()));
//!
//! assert_eq!(ctx.adws_dir(), std::path::PathBuf::from("/work/app/adws"));
//! assert_eq!(ctx.manifest.required_vars.len(), 2);
//! ```

pub mod context;
pub mod env_file;
pub mod manifest;

pub use context::{
    find_project_root, CheckContext, ContextOptions, EnvSnapshot, DEFAULT_TIMEOUT,
};
pub use env_file::{find_env_file, EnvFileParser, ENV_FILE_NAME};
pub use manifest::{HealthManifest, PythonDependency};
