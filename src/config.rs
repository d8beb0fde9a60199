//! Run configuration and logging setup
//!
//! Verbosity is carried in an explicit `ProcessConfig` built from the command
//! line. Only the binary installs a subscriber; the library just emits
//! `tracing` events.

use anyhow::{Result, anyhow};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// How much diagnostic output to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Informational messages and errors
    #[default]
    Normal,
    /// Adds per-item debug diagnostics
    Verbose,
}

impl Verbosity {
    /// Default filter directive for this verbosity
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Settings for a processing run
///
/// None of these affect validation; they only shape logging.
#[derive(Debug, Clone, Default)]
pub struct ProcessConfig {
    pub verbosity: Verbosity,
}

impl ProcessConfig {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Build the log filter for this configuration
    ///
    /// `--verbose` always selects debug output. Otherwise `RUST_LOG` is used
    /// when set, falling back to info.
    pub fn env_filter(&self) -> EnvFilter {
        match self.verbosity {
            Verbosity::Verbose => EnvFilter::new(Verbosity::Verbose.filter_directive()),
            Verbosity::Normal => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Verbosity::Normal.filter_directive())),
        }
    }
}

/// Install the global `tracing` subscriber, writing to stderr
pub fn init_logging(config: &ProcessConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
