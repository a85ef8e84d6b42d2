//! Error types for health check operations.
//!
//! This module defines [`HealthError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `HealthError` for failures a check needs to tell apart (a missing
//!   binary is reported differently from a hung one)
//! - Use `anyhow::Error` (via `HealthError::Other`) for unexpected errors
//! - Checks never let these escape the runner; they become a failed result

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for health check operations.
#[derive(Debug, Error)]
pub enum HealthError {
    /// The program could not be found on PATH or at the given location.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// The command did not finish before its deadline and was killed.
    #[error("Command timed out after {}s: {command}", timeout.as_secs())]
    CommandTimedOut { command: String, timeout: Duration },

    /// The command could not be started or waited on.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// An explicitly requested env file does not exist.
    #[error("Env file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// An env file exists but could not be read or parsed.
    #[error("Failed to load env file at {path}: {message}")]
    EnvFileParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for health check operations.
pub type Result<T> = std::result::Result<T, HealthError>;
