//! Process runner abstraction.
//!
//! Checks never spawn processes directly; they go through a
//! [`ProcessRunner`] held by the check context. [`SystemRunner`] spawns real
//! processes, [`ScriptedRunner`] replays canned outcomes in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{HealthError, Result};

use super::command::{display_command, execute, CommandOptions, CommandResult};

/// Runs an external program and reports its outcome.
pub trait ProcessRunner {
    /// Run `program` with `args`, killing it once `timeout` elapses.
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandResult>;
}

/// Spawns real processes.
///
/// Variables loaded from an env file are passed to every child on top of the
/// inherited process environment.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    env: HashMap<String, String>,
}

impl SystemRunner {
    /// Create a runner that only inherits the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that adds `env` to each child's environment.
    pub fn with_env(env: HashMap<String, String>) -> Self {
        Self { env }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        let options = CommandOptions {
            env: self.env.clone(),
            timeout: Some(timeout),
            ..Default::default()
        };
        execute(program, args, &options)
    }
}

type Responder = Box<dyn Fn() -> Result<CommandResult>>;

/// Test double that answers by command line.
///
/// Any command line without a scripted answer behaves like a program that is
/// not installed.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use adw_health::shell::{ProcessRunner, ScriptedRunner};
///
/// let runner = ScriptedRunner::new().succeed("gh --version", "gh version 2.40.0\n");
///
/// let result = runner.run("gh", &["--version"], Duration::from_secs(5)).unwrap();
/// assert!(result.success);
/// assert!(runner.run("claude", &["--version"], Duration::from_secs(5)).is_err());
/// assert_eq!(runner.calls(), vec!["gh --version", "claude --version"]);
/// ```
#[derive(Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, Responder>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command_line` with whatever `responder` returns.
    pub fn on(
        mut self,
        command_line: &str,
        responder: impl Fn() -> Result<CommandResult> + 'static,
    ) -> Self {
        self.responses
            .insert(command_line.to_string(), Box::new(responder));
        self
    }

    /// Answer `command_line` with a zero exit and the given stdout.
    pub fn succeed(self, command_line: &str, stdout: &str) -> Self {
        let stdout = stdout.to_string();
        self.on(command_line, move || {
            Ok(CommandResult::success(
                stdout.clone(),
                String::new(),
                Duration::ZERO,
            ))
        })
    }

    /// Answer `command_line` with a non-zero exit and the given stderr.
    pub fn exit(self, command_line: &str, code: i32, stderr: &str) -> Self {
        let stderr = stderr.to_string();
        self.on(command_line, move || {
            Ok(CommandResult::failure(
                Some(code),
                String::new(),
                stderr.clone(),
                Duration::ZERO,
            ))
        })
    }

    /// Answer `command_line` as if it hit its deadline.
    pub fn time_out(self, command_line: &str) -> Self {
        let command = command_line.to_string();
        self.on(command_line, move || {
            Err(HealthError::CommandTimedOut {
                command: command.clone(),
                timeout: Duration::from_secs(5),
            })
        })
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _timeout: Duration) -> Result<CommandResult> {
        let command_line = display_command(program, args);
        self.calls.borrow_mut().push(command_line.clone());

        match self.responses.get(&command_line) {
            Some(responder) => responder(),
            None => Err(HealthError::CommandNotFound {
                program: program.to_string(),
            }),
        }
    }
}
