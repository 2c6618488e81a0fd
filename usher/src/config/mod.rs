//! Configuration system for usher.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (USHER_*)
//! 3. Explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. Private project config (`usher.local.yaml`)
//! 5. Project config (`usher.yaml`)
//! 6. User config (`~/.usher/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use usher::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//!
//! println!("Chart: {} rows of {} seats", config.rows(), config.seats_per_row());
//! ```
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use usher::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use usher::config::{ChartConfig, Config, ConfigBuilder};
//!
//! let custom = Config {
//!     chart: Some(ChartConfig {
//!         rows: Some(5),
//!         seats_per_row: Some(21),
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.rows(), 5);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, Precedence};
pub use merger::ConfigMerger;
pub use schema::{
    ChartConfig, Config, OutputFormat, RequestConfig, DEFAULT_MAX_REQUEST, DEFAULT_ROWS,
    DEFAULT_SEATS_PER_ROW,
};
pub use validator::ConfigValidator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
