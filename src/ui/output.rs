//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-workflow step counts.
    Verbose,
    /// Show headers and step output.
    #[default]
    Normal,
    /// Show errors and requested data only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows step output and headers.
    pub fn shows_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows per-workflow detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
