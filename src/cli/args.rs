//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::ContextOptions;

/// adw-health - Verify an ADW checkout is ready to run.
#[derive(Debug, Parser)]
#[command(name = "adw-health")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (default: nearest directory containing adws/)
    #[arg(short, long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Env file to load (default: nearest .env above the project root)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Seconds to wait for each external command
    #[arg(
        long,
        value_name = "SECS",
        env = "ADW_HEALTH_TIMEOUT",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print the report as JSON instead of the human-readable summary
    #[arg(long)]
    pub json: bool,

    /// Show output of failing commands
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Context options for a run started from `cwd`.
    pub fn context_options(&self, cwd: &Path) -> ContextOptions {
        ContextOptions {
            project: self.project.clone(),
            env_file: self.env_file.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..ContextOptions::new(cwd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["adw-health"]).unwrap();
        assert!(cli.project.is_none());
        assert!(cli.env_file.is_none());
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_project_and_env_file() {
        let cli = Cli::try_parse_from([
            "adw-health",
            "-p",
            "/work/app",
            "--env-file",
            "/work/app/.env.local",
        ])
        .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/work/app")));
        assert_eq!(cli.env_file, Some(PathBuf::from("/work/app/.env.local")));
    }

    #[test]
    fn explicit_timeout() {
        let cli = Cli::try_parse_from(["adw-health", "--timeout", "12"]).unwrap();
        assert_eq!(cli.timeout, 12);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["adw-health", "--timeout", "0"]).is_err());
    }

    #[test]
    fn parses_output_flags() {
        let cli = Cli::try_parse_from(["adw-health", "--json", "-v", "--no-color", "--debug"])
            .unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn context_options_carry_flags() {
        let cli = Cli::try_parse_from(["adw-health", "-p", "/work/app", "--timeout", "9"]).unwrap();

        let options = cli.context_options(Path::new("/somewhere/else"));

        assert_eq!(options.cwd, PathBuf::from("/somewhere/else"));
        assert_eq!(options.project, Some(PathBuf::from("/work/app")));
        assert_eq!(options.timeout, Duration::from_secs(9));
    }
}
