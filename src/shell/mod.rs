//! External process execution and tool lookup.

pub mod command;
pub mod path;
pub mod runner;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use path::{is_executable, resolve_tool_path, split_path};
pub use runner::{ProcessRunner, ScriptedRunner, SystemRunner};
