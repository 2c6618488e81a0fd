//! Configuration validation.
//!
//! This module provides validation for all configuration fields, ensuring
//! that values are valid and consistent before an engine is built from them.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use usher::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Chart dimensions and the maximum group size must all be positive; a
    /// zero in any of them would make every request fail or construct a
    /// degenerate chart.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref chart) = config.chart {
            if chart.rows == Some(0) {
                return Err(Error::Validation {
                    field: "chart.rows".into(),
                    message: "Must be greater than 0".into(),
                });
            }

            if chart.seats_per_row == Some(0) {
                return Err(Error::Validation {
                    field: "chart.seats_per_row".into(),
                    message: "Must be greater than 0".into(),
                });
            }
        }

        if let Some(ref requests) = config.requests {
            if requests.max == Some(0) {
                return Err(Error::Validation {
                    field: "requests.max".into(),
                    message: "Must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }
}
