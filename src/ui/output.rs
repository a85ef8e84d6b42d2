//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the report plus stderr of failing external commands.
    Verbose,
    /// Show the report.
    #[default]
    Normal,
    /// Show nothing (used when the report is emitted as JSON).
    Silent,
}

impl OutputMode {
    /// Pick a mode from the command-line flags.
    pub fn from_flags(verbose: bool, silent: bool) -> Self {
        if silent {
            Self::Silent
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows captured command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
