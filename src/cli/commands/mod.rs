//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The only command
//! today is [`CheckCommand`], built by [`CommandDispatcher`] from the parsed
//! arguments.

pub mod check;
pub mod dispatcher;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
