//! Stderr diagnostics for allocation sessions.
//!
//! Placements and seat counts belong on stdout; commentary about *how* a
//! session went belongs on stderr, behind a level the user picks with
//! `--verbose`, `--quiet`, or `USHER_LOG_MODE`. Keeping the two streams
//! apart lets scripted callers consume placements without filtering.

use std::env;
use std::fmt;
use std::str::FromStr;

/// How much commentary reaches stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing beyond the command's own output.
    Quiet,
    /// Warnings only.
    Normal,
    /// Warnings plus progress and per-request tracing.
    Verbose,
}

impl LogLevel {
    /// Resolves the level from the CLI flags and the environment.
    ///
    /// Flags beat `USHER_LOG_MODE`, and `verbose` beats `quiet` when both
    /// are given. An unrecognized environment value falls back to
    /// [`LogLevel::Normal`].
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            env::var("USHER_LOG_MODE")
                .ok()
                .and_then(|mode| mode.parse().ok())
                .unwrap_or(Self::Normal)
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(format!("unknown log mode '{other}'")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

/// Level-gated stderr writer handed to the CLI commands.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the level the logger was built with.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// An unusual but non-fatal condition. Suppressed only in quiet mode.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Session progress, shown in verbose mode.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Per-request tracing, shown in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}
