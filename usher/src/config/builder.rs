//! Configuration builder.
//!
//! This module provides a builder for assembling the final configuration
//! from files, environment variables, and programmatic overrides.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource, Precedence};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from all sources.
///
/// Sources are combined from lowest to highest precedence: user config,
/// project files, an explicit config file, environment variables, and
/// finally programmatic overrides.
///
/// # Examples
///
/// ```no_run
/// use usher::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("Chart: {}x{}", config.rows(), config.seats_per_row());
/// ```
///
/// Programmatic configuration without touching the filesystem:
///
/// ```
/// use usher::config::{Config, ConfigBuilder, RequestConfig};
///
/// let custom = Config {
///     requests: Some(RequestConfig { max: Some(6) }),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_request(), 6);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory from which project config discovery starts.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Overrides the directory holding the user config file.
    ///
    /// Defaults to `~/.usher`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Adds an explicit configuration file.
    ///
    /// The file takes precedence over every discovered file but is still
    /// overridden by environment variables and programmatic overrides.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Skips all file-based configuration sources.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Sets programmatic overrides applied after every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds and validates the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be loaded, an
    /// environment variable is invalid, or the merged configuration fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };

            let mut sources = ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?;

            if let Some(ref path) = self.config_file {
                sources.push(ConfigSource {
                    path: path.clone(),
                    precedence: Precedence::Explicit,
                    config: ConfigLoader::load_file(path)?,
                });
            }

            sources.sort_by_key(|s| s.precedence);
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ChartConfig, RequestConfig};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_with_no_sources() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.rows(), 3);
    }

    #[test]
    fn test_build_with_programmatic_config() {
        let custom = Config {
            chart: Some(ChartConfig {
                rows: Some(4),
                seats_per_row: Some(9),
            }),
            ..Default::default()
        };

        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(custom)
            .build()
            .unwrap();

        assert_eq!(config.rows(), 4);
        assert_eq!(config.seats_per_row(), 9);
    }

    #[test]
    fn test_build_rejects_invalid_overrides() {
        let custom = Config {
            requests: Some(RequestConfig { max: Some(0) }),
            ..Default::default()
        };

        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(custom)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_build_discovers_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("usher.yaml"), "chart:\n  rows: 7\n").unwrap();

        let empty_user = temp_dir.path().join("no-user-config");
        fs::create_dir(&empty_user).unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_user_dir(&empty_user)
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.rows(), 7);
    }

    #[test]
    fn test_explicit_config_file_beats_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("usher.yaml"), "chart:\n  rows: 7\n").unwrap();

        let explicit = temp_dir.path().join("custom.yaml");
        fs::write(&explicit, "chart:\n  rows: 2\n").unwrap();

        let empty_user = temp_dir.path().join("no-user-config");
        fs::create_dir(&empty_user).unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_user_dir(&empty_user)
            .with_config_file(&explicit)
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.rows(), 2);
    }

    #[test]
    fn test_programmatic_beats_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("custom.yaml");
        fs::write(&explicit, "requests:\n  max: 4\n").unwrap();

        let empty_user = temp_dir.path().join("no-user-config");
        fs::create_dir(&empty_user).unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_user_dir(&empty_user)
            .with_config_file(&explicit)
            .skip_env()
            .with_config(Config {
                requests: Some(RequestConfig { max: Some(9) }),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.max_request(), 9);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let empty_user = temp_dir.path().join("no-user-config");
        fs::create_dir(&empty_user).unwrap();

        let result = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_user_dir(&empty_user)
            .with_config_file(&temp_dir.path().join("missing.yaml"))
            .skip_env()
            .build();

        assert!(result.is_err());
    }
}
