//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `allocate`: Allocate seats from a request script
//! - `chart`: Render the seating chart
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod allocate;
pub mod chart;
pub mod completions;
pub mod validate;

pub use allocate::AllocateCommand;
pub use chart::ChartCommand;
pub use completions::CompletionsCommand;
pub use validate::ValidateCommand;
