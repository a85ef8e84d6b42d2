//! Check status types.
//!
//! Every check produces a `CheckStatus` saying whether it passed and, when it
//! didn't, which kind of failure it ran into.

use serde::Serialize;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckStatus {
    /// Everything the check looked at is in place.
    Success,

    /// Something required is absent: a variable, a binary, a package or a path.
    MissingRequirement {
        /// What is missing, one entry per item.
        missing: Vec<String>,
    },

    /// An external command ran and exited non-zero.
    ExternalProcessFailure {
        /// The command line that failed.
        command: String,
        /// Exit code (None if killed by signal).
        code: Option<i32>,
    },

    /// An external command did not finish in time.
    Timeout {
        /// The command line that was killed.
        command: String,
        /// The deadline it missed, in seconds.
        timeout_secs: u64,
    },

    /// The check failed for a reason it does not classify.
    UnexpectedError {
        /// Error text.
        detail: String,
    },
}

impl CheckStatus {
    /// Whether the check passed.
    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Success)
    }

    /// Short description of the failure, or `"ok"`.
    pub fn describe(&self) -> String {
        match self {
            CheckStatus::Success => "ok".to_string(),
            CheckStatus::MissingRequirement { missing } => {
                format!("missing: {}", missing.join(", "))
            }
            CheckStatus::ExternalProcessFailure { command, code } => match code {
                Some(code) => format!("`{}` exited with code {}", command, code),
                None => format!("`{}` was killed by a signal", command),
            },
            CheckStatus::Timeout {
                command,
                timeout_secs,
            } => format!("`{}` timed out after {}s", command, timeout_secs),
            CheckStatus::UnexpectedError { detail } => detail.clone(),
        }
    }
}

/// A named check outcome, as collected by the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Display name of the check.
    pub name: String,
    /// What the check reported.
    pub status: CheckStatus,
}

impl CheckResult {
    /// Create a result.
    pub fn new(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.status.is_success()
    }
}
