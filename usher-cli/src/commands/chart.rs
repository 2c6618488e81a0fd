//! Chart command implementation.
//!
//! Renders the occupancy grid, either for a fresh chart or after
//! replaying a script.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::script::Script;
use crate::utils::{dimension_overrides, load_configuration, read_script_input, GlobalOptions};
use usher::{AllocationEngine, Logger};

/// Render the seating chart.
#[derive(Args)]
pub struct ChartCommand {
    /// Script file to replay before rendering
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Number of rows in the chart
    #[arg(long, value_name = "COUNT")]
    pub rows: Option<usize>,

    /// Number of seats in each row
    #[arg(long, value_name = "COUNT")]
    pub seats_per_row: Option<usize>,
}

impl ChartCommand {
    /// Execute the chart command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let overrides = dimension_overrides(self.rows, self.seats_per_row, None);
        let config = load_configuration(global, overrides)?;

        let mut engine = AllocationEngine::from_config(&config);

        // Without a script the fresh chart is rendered as-is; reading
        // stdin here would hang interactive use.
        if let Some(ref path) = self.script {
            let input = read_script_input(Some(path))?;
            let script = Script::parse(&input)?;

            for label in &script.pre_reservations {
                engine.pre_reserve(label.row() + 1, label.column() + 1)?;
            }
            for &size in &script.requests {
                let placement = engine.request(size)?;
                logger.debug(&format!("request for {size}: {placement}"));
            }
        }

        print!("{}", engine.chart().render());

        if !global.quiet {
            logger.info(&format!("{} seats available", engine.available_count()));
        }

        Ok(())
    }
}
