//! Property-based tests for configuration merging.

use proptest::prelude::*;

use super::merger::ConfigMerger;
use super::schema::{ChartConfig, Config, OutputFormat, RequestConfig};

fn arb_config() -> impl Strategy<Value = Config> {
    (
        prop::option::of((prop::option::of(1usize..=50), prop::option::of(1usize..=50))),
        prop::option::of(prop::option::of(1usize..=20)),
        prop::option::of(prop::bool::ANY),
    )
        .prop_map(|(chart, requests, format)| Config {
            chart: chart.map(|(rows, seats_per_row)| ChartConfig {
                rows,
                seats_per_row,
            }),
            requests: requests.map(|max| RequestConfig { max }),
            output_format: format.map(|json| {
                if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Human
                }
            }),
        })
}

proptest! {
    // Merging the empty config in either direction never loses values.
    #[test]
    fn merge_with_empty_is_identity(config in arb_config()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut empty = Config::default();
        ConfigMerger::merge_into(&mut empty, &config);
        prop_assert_eq!(&empty, &config);
    }

    // Set fields in the source always win; unset fields never overwrite.
    #[test]
    fn merge_respects_precedence(target in arb_config(), source in arb_config()) {
        let mut merged = target.clone();
        ConfigMerger::merge_into(&mut merged, &source);

        if source.output_format.is_some() {
            prop_assert_eq!(merged.output_format, source.output_format);
        } else {
            prop_assert_eq!(merged.output_format, target.output_format);
        }

        let source_rows = source.chart.as_ref().and_then(|c| c.rows);
        let target_rows = target.chart.as_ref().and_then(|c| c.rows);
        let merged_rows = merged.chart.as_ref().and_then(|c| c.rows);
        prop_assert_eq!(merged_rows, source_rows.or(target_rows));

        let source_max = source.requests.as_ref().and_then(|r| r.max);
        let target_max = target.requests.as_ref().and_then(|r| r.max);
        let merged_max = merged.requests.as_ref().and_then(|r| r.max);
        prop_assert_eq!(merged_max, source_max.or(target_max));
    }

    // Effective accessors always produce usable positive values.
    #[test]
    fn effective_values_are_positive(config in arb_config()) {
        prop_assert!(config.rows() > 0);
        prop_assert!(config.seats_per_row() > 0);
        prop_assert!(config.max_request() > 0);
    }
}
