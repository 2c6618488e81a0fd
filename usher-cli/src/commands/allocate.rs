//! Allocate command implementation.
//!
//! This module implements the `allocate` command, which replays a request
//! script against a fresh seating chart and reports every placement.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde_json::json;

use crate::error::CliError;
use crate::script::Script;
use crate::utils::{dimension_overrides, load_configuration, read_script_input, GlobalOptions};
use usher::config::OutputFormat;
use usher::{AllocationEngine, Logger};

/// Output format flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text output.
    Human,
    /// JSON output format.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Allocate seats from a request script.
#[derive(Args)]
pub struct AllocateCommand {
    /// Script file (default: standard input)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Number of rows in the chart
    #[arg(long, value_name = "COUNT")]
    pub rows: Option<usize>,

    /// Number of seats in each row
    #[arg(long, value_name = "COUNT")]
    pub seats_per_row: Option<usize>,

    /// Maximum group size per request
    #[arg(long, value_name = "COUNT")]
    pub max_request: Option<usize>,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Print the final occupancy grid to stderr
    #[arg(long)]
    pub show_chart: bool,
}

impl AllocateCommand {
    /// Execute the allocate command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        // 1. Load configuration with CLI dimension overrides on top
        let overrides = dimension_overrides(self.rows, self.seats_per_row, self.max_request);
        let config = load_configuration(global, overrides)?;

        // 2. Parse the script
        let input = read_script_input(self.script.as_deref())?;
        let script = Script::parse(&input)?;

        // 3. Build the engine and apply pre-reservations
        let mut engine = AllocationEngine::from_config(&config);
        logger.info(&format!(
            "chart is {} rows of {} seats, groups up to {}",
            engine.chart().rows(),
            engine.chart().seats_per_row(),
            engine.max_group_size()
        ));

        for label in &script.pre_reservations {
            engine.pre_reserve(label.row() + 1, label.column() + 1)?;
        }
        logger.debug(&format!(
            "{} seats pre-reserved, {} available",
            script.pre_reservations.len(),
            engine.available_count()
        ));

        // 4. Serve every request in order
        let mut placements = Vec::with_capacity(script.requests.len());
        for &size in &script.requests {
            let placement = engine.request(size)?;
            if placement.is_available() {
                logger.debug(&format!("request for {size}: {placement}"));
            } else {
                logger.warn(&format!("no contiguous block of {size} seats left"));
            }
            placements.push(placement);
        }

        // 5. Report placements and the remaining seat count
        let format = self.format.map_or_else(|| config.output_format(), Into::into);
        match format {
            OutputFormat::Human => {
                for placement in &placements {
                    println!("{placement}");
                }
                println!("{}", engine.available_count());
            }
            OutputFormat::Json => {
                let entries: Vec<_> = script
                    .requests
                    .iter()
                    .zip(&placements)
                    .map(|(size, placement)| {
                        json!({
                            "size": size,
                            "available": placement.is_available(),
                            "seats": placement
                                .seats()
                                .iter()
                                .map(ToString::to_string)
                                .collect::<Vec<_>>(),
                            "summary": placement.to_string(),
                        })
                    })
                    .collect();

                let doc = json!({
                    "placements": entries,
                    "remaining": engine.available_count(),
                });
                println!("{doc:#}");
            }
        }

        if self.show_chart && !global.quiet {
            eprint!("{}", engine.chart().render());
        }

        Ok(())
    }
}
