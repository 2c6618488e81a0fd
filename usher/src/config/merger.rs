//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! merging nested sections field by field.

use crate::config::loader::ConfigSource;
use crate::config::schema::{ChartConfig, Config, RequestConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use usher::config::{Config, ConfigMerger, RequestConfig};
///
/// let low = Config {
///     requests: Some(RequestConfig { max: Some(4) }),
///     ..Default::default()
/// };
/// let high = Config {
///     requests: Some(RequestConfig { max: Some(8) }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_request(), 8);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    /// The final configuration will have higher-precedence values overriding
    /// lower-precedence ones.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        // Process in order (lowest to highest precedence)
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Nested configs: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_chart) = source.chart {
            target.chart = Some(match &target.chart {
                Some(target_chart) => Self::merge_chart(target_chart, source_chart),
                None => source_chart.clone(),
            });
        }

        if let Some(ref source_requests) = source.requests {
            target.requests = Some(match &target.requests {
                Some(target_requests) => Self::merge_requests(target_requests, source_requests),
                None => source_requests.clone(),
            });
        }
    }

    /// Merge chart configuration.
    ///
    /// Source values take precedence over target values.
    fn merge_chart(target: &ChartConfig, source: &ChartConfig) -> ChartConfig {
        ChartConfig {
            rows: source.rows.or(target.rows),
            seats_per_row: source.seats_per_row.or(target.seats_per_row),
        }
    }

    /// Merge request configuration.
    ///
    /// Source values take precedence over target values.
    fn merge_requests(target: &RequestConfig, source: &RequestConfig) -> RequestConfig {
        RequestConfig {
            max: source.max.or(target.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::Precedence;
    use crate::config::schema::OutputFormat;
    use std::path::PathBuf;

    fn make_source(precedence: Precedence, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from("test.yaml"),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config::default();
        let source = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut target = Config {
            output_format: Some(OutputFormat::Human),
            ..Default::default()
        };
        let source = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_chart_config_field_by_field() {
        let mut target = Config {
            chart: Some(ChartConfig {
                rows: Some(3),
                seats_per_row: Some(11),
            }),
            ..Default::default()
        };
        let source = Config {
            chart: Some(ChartConfig {
                rows: Some(5),
                seats_per_row: None,
            }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        let chart = target.chart.unwrap();
        assert_eq!(chart.rows, Some(5)); // Source wins
        assert_eq!(chart.seats_per_row, Some(11)); // Source didn't specify, use target
    }

    #[test]
    fn test_merge_request_config() {
        let mut target = Config {
            requests: Some(RequestConfig { max: Some(10) }),
            ..Default::default()
        };
        let source = Config {
            requests: Some(RequestConfig { max: Some(6) }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.requests.unwrap().max, Some(6));
    }

    #[test]
    fn test_merge_multiple_sources() {
        let sources = vec![
            make_source(
                Precedence::User,
                Config {
                    chart: Some(ChartConfig {
                        rows: Some(3),
                        seats_per_row: Some(11),
                    }),
                    ..Default::default()
                },
            ),
            make_source(
                Precedence::Project,
                Config {
                    chart: Some(ChartConfig {
                        rows: Some(5),
                        seats_per_row: None,
                    }),
                    requests: Some(RequestConfig { max: Some(8) }),
                    ..Default::default()
                },
            ),
            make_source(
                Precedence::ProjectLocal,
                Config {
                    output_format: Some(OutputFormat::Json),
                    ..Default::default()
                },
            ),
        ];

        let result = ConfigMerger::merge(sources);
        assert_eq!(result.rows(), 5);
        assert_eq!(result.seats_per_row(), 11);
        assert_eq!(result.max_request(), 8);
        assert_eq!(result.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = Config {
            requests: Some(RequestConfig { max: Some(7) }),
            ..Default::default()
        };
        let source = Config {
            requests: None,
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.requests.unwrap().max, Some(7));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }
}
