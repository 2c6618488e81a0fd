//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands,
//! including configuration loading and script input.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use usher::config::{ChartConfig, Config, ConfigBuilder, RequestConfig};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line overrides (highest priority)
/// 2. Environment variables
/// 3. Explicit config file (`--config`)
/// 4. Configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(
    global: &GlobalOptions,
    overrides: Option<Config>,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    if let Some(overrides) = overrides {
        builder = builder.with_config(overrides);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a programmatic config from per-command dimension flags.
///
/// Returns `None` when no flag was given, so the merged config is left
/// untouched.
pub fn dimension_overrides(
    rows: Option<usize>,
    seats_per_row: Option<usize>,
    max_request: Option<usize>,
) -> Option<Config> {
    if rows.is_none() && seats_per_row.is_none() && max_request.is_none() {
        return None;
    }

    let chart = (rows.is_some() || seats_per_row.is_some()).then(|| ChartConfig {
        rows,
        seats_per_row,
    });

    Some(Config {
        chart,
        requests: max_request.map(|max| RequestConfig { max: Some(max) }),
        ..Default::default()
    })
}

/// Read script text from a file, or from standard input when no path is
/// given.
pub fn read_script_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
