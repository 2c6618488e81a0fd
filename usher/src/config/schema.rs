//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for usher,
//! including chart dimensions, request limits, and output settings.

use serde::{Deserialize, Serialize};

/// Default number of rows in a seating chart.
pub const DEFAULT_ROWS: usize = 3;

/// Default number of seats in each row.
pub const DEFAULT_SEATS_PER_ROW: usize = 11;

/// Default maximum group size per request.
pub const DEFAULT_MAX_REQUEST: usize = 10;

/// Complete configuration structure.
///
/// This represents the full configuration schema for usher, supporting
/// hierarchical configuration from multiple sources. Every field is
/// optional; effective values fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use usher::config::{Config, ChartConfig};
///
/// let config = Config {
///     chart: Some(ChartConfig {
///         rows: Some(5),
///         seats_per_row: Some(21),
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.rows(), 5);
/// assert_eq!(config.max_request(), 10);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seating chart dimensions.
    pub chart: Option<ChartConfig>,

    /// Group request settings.
    pub requests: Option<RequestConfig>,

    /// Output format for allocation results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Effective number of rows, falling back to the default.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.chart
            .as_ref()
            .and_then(|c| c.rows)
            .unwrap_or(DEFAULT_ROWS)
    }

    /// Effective number of seats per row, falling back to the default.
    #[must_use]
    pub fn seats_per_row(&self) -> usize {
        self.chart
            .as_ref()
            .and_then(|c| c.seats_per_row)
            .unwrap_or(DEFAULT_SEATS_PER_ROW)
    }

    /// Effective maximum group size, falling back to the default.
    #[must_use]
    pub fn max_request(&self) -> usize {
        self.requests
            .as_ref()
            .and_then(|r| r.max)
            .unwrap_or(DEFAULT_MAX_REQUEST)
    }

    /// Effective output format, falling back to human-readable.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Human)
    }
}

/// Seating chart dimension configuration.
///
/// # Examples
///
/// ```
/// use usher::config::ChartConfig;
///
/// let config = ChartConfig {
///     rows: Some(3),
///     seats_per_row: Some(11),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    /// Number of rows in the chart.
    pub rows: Option<usize>,

    /// Number of seats in each row.
    pub seats_per_row: Option<usize>,
}

/// Group request configuration.
///
/// # Examples
///
/// ```
/// use usher::config::RequestConfig;
///
/// let config = RequestConfig { max: Some(10) };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
    /// Maximum group size accepted by a single request.
    pub max: Option<usize>,
}

/// Output format for allocation results.
///
/// # Examples
///
/// ```
/// use usher::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output.
    Human,
    /// JSON output format.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}
