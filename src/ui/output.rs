//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status plus per-candidate details.
    Verbose,
    /// Show status messages.
    #[default]
    Normal,
    /// Show warnings and final status only.
    Quiet,
    /// Show nothing except errors and command data.
    Silent,
}

impl OutputMode {
    /// Derive the mode from the global `--quiet` / `--verbose` flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-candidate details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows informational messages.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status (success/warning) lines.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
