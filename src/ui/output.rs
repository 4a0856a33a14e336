//! Output verbosity.

use std::str::FromStr;

/// How much detail commands print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Add details and suggestions under each result.
    Verbose,
    /// One line per result.
    #[default]
    Normal,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Pick the mode for a `--verbose` flag.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows details and suggestions.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
