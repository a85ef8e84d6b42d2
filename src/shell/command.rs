//! Subprocess execution with a deadline.
//!
//! Commands are spawned directly from an argv (no intermediate shell) with
//! captured output. When a timeout is set the child is polled until the
//! deadline and killed if it is still running.

use crate::error::{HealthError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled while waiting on a deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// First non-empty line of stdout, trimmed.
    pub fn first_line(&self) -> &str {
        self.stdout
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("")
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Maximum run time (None = wait forever).
    pub timeout: Option<Duration>,
}

/// Render a program and its arguments as a single command line for messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute a program with arguments, capturing its output.
///
/// A program that cannot be located maps to [`HealthError::CommandNotFound`];
/// one that outlives `options.timeout` is killed and maps to
/// [`HealthError::CommandTimedOut`]. A non-zero exit is not an error: it is
/// reported through [`CommandResult::success`].
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Spawning `{}`", command_line);

    let mut child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HealthError::CommandNotFound {
                program: program.to_string(),
            }
        } else {
            HealthError::CommandSpawn {
                command: command_line.clone(),
                message: e.to_string(),
            }
        }
    })?;

    // Drain both pipes on their own threads so a chatty child can't fill a
    // pipe buffer and stall before the deadline.
    let stdout_rx = child.stdout.take().map(drain);
    let stderr_rx = child.stderr.take().map(drain);

    let status = match options.timeout {
        Some(timeout) => {
            wait_with_deadline(&mut child, start + timeout, &command_line, timeout)?
        }
        None => child.wait().map_err(|e| HealthError::CommandSpawn {
            command: command_line.clone(),
            message: e.to_string(),
        })?,
    };

    // A background process started by the child may keep the pipes open
    // after the child itself exits; output collection shares the deadline.
    let stdout = collect(stdout_rx, start, options.timeout, &command_line)?;
    let stderr = collect(stderr_rx, start, options.timeout, &command_line)?;
    let duration = start.elapsed();

    tracing::debug!(
        "`{}` exited with {:?} in {:?}",
        command_line,
        status.code(),
        duration
    );

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

/// Poll the child until it exits or the deadline passes.
///
/// On timeout the child is killed and reaped. The reader threads are left to
/// finish on their own: a grandchild may still hold the pipes open.
fn wait_with_deadline(
    child: &mut Child,
    deadline: Instant,
    command: &str,
    timeout: Duration,
) -> Result<ExitStatus> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {}
            Err(e) => {
                return Err(HealthError::CommandSpawn {
                    command: command.to_string(),
                    message: e.to_string(),
                })
            }
        }

        let now = Instant::now();
        if now >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            tracing::debug!("`{}` killed after {:?}", command, timeout);
            return Err(timed_out(command, timeout));
        }

        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

fn timed_out(command: &str, timeout: Duration) -> HealthError {
    HealthError::CommandTimedOut {
        command: command.to_string(),
        timeout,
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// Wait for a drained pipe, giving up once the run's deadline passes.
///
/// On timeout the reader thread is detached; it ends when the last holder of
/// the pipe closes it.
fn collect(
    rx: Option<Receiver<String>>,
    start: Instant,
    timeout: Option<Duration>,
    command: &str,
) -> Result<String> {
    let Some(rx) = rx else {
        return Ok(String::new());
    };

    match timeout {
        Some(timeout) => {
            let remaining = (start + timeout).saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok(output) => Ok(output),
                Err(RecvTimeoutError::Disconnected) => Ok(String::new()),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::debug!(
                        "`{}` left its output pipes open past {:?}",
                        command,
                        timeout
                    );
                    Err(timed_out(command, timeout))
                }
            }
        }
        None => Ok(rx.recv().unwrap_or_default()),
    }
}
