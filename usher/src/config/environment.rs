//! Environment variable handling for configuration overrides.
//!
//! This module provides support for USHER_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use usher::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all USHER_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric dimension, unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // Chart dimensions from USHER_ROWS and USHER_SEATS_PER_ROW
        Self::apply_chart_overrides(config)?;

        // USHER_MAX_REQUEST
        if let Ok(max) = env::var("USHER_MAX_REQUEST") {
            let max = Self::parse_count("USHER_MAX_REQUEST", &max)?;
            let requests = config.requests.get_or_insert_with(Default::default);
            requests.max = Some(max);
        }

        // USHER_OUTPUT_FORMAT
        if let Ok(format) = env::var("USHER_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_format("USHER_OUTPUT_FORMAT", &format)?);
        }

        Ok(())
    }

    /// Apply chart dimension environment variable overrides.
    fn apply_chart_overrides(config: &mut Config) -> Result<()> {
        let mut chart = config.chart.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(rows) = env::var("USHER_ROWS") {
            chart.rows = Some(Self::parse_count("USHER_ROWS", &rows)?);
            modified = true;
        }

        if let Ok(seats) = env::var("USHER_SEATS_PER_ROW") {
            chart.seats_per_row = Some(Self::parse_count("USHER_SEATS_PER_ROW", &seats)?);
            modified = true;
        }

        if modified {
            config.chart = Some(chart);
        }

        Ok(())
    }

    /// Parse a positive count value from a string.
    fn parse_count(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: "Must be a positive integer".into(),
        })
    }

    /// Parse an output format from a string (case-insensitive).
    fn parse_format(field: &str, s: &str) -> Result<OutputFormat> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid output format: '{s}' (expected human or json)"),
            }),
        }
    }
}
