//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{AllocateCommand, ChartCommand, CompletionsCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for allocating contiguous seat blocks in a venue.
#[derive(Parser)]
#[command(name = "usher")]
#[command(version, about = "Allocate contiguous seat blocks in a venue", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use an explicit configuration file
    #[arg(long, value_name = "PATH", global = true, env = "USHER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Allocate seats from a request script
    Allocate(AllocateCommand),

    /// Render the seating chart
    Chart(ChartCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
