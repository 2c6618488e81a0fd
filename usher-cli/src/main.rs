//! Main entry point for the usher CLI.
//!
//! This is the command-line interface for the usher seat allocation system.
//! It provides commands for working with seating charts:
//! - `allocate`: Allocate seats from a request script
//! - `chart`: Render the seating chart
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod script;
mod utils;

use clap::Parser;
use cli::Cli;
use usher::{LogLevel, Logger};
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = Logger::new(LogLevel::from_flags(cli.verbose, cli.quiet));

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Allocate(cmd) => cmd.execute(&global, &logger),
        cli::Command::Chart(cmd) => cmd.execute(&global, &logger),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
