//! Discovery and parsing of usher configuration files.
//!
//! Three file sources feed the merge: the user file at
//! `~/.usher/config.yaml`, and the project pair (`usher.yaml` plus an
//! optional `usher.local.yaml`) found by walking up from the working
//! directory. The walk stops at the first directory that holds either
//! project file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Where a configuration file sits in the merge order.
///
/// Later variants override earlier ones; `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `~/.usher/config.yaml`.
    User,
    /// `usher.yaml` in or above the working directory.
    Project,
    /// `usher.local.yaml` next to the project file.
    ProjectLocal,
    /// A file named explicitly on the command line.
    Explicit,
}

/// One parsed configuration file, tagged for merging.
///
/// # Examples
///
/// ```
/// use usher::config::{ConfigSource, Precedence};
/// use std::path::PathBuf;
///
/// let source = ConfigSource {
///     path: PathBuf::from("usher.yaml"),
///     precedence: Precedence::Project,
///     config: Default::default(),
/// };
/// assert!(source.precedence < Precedence::Explicit);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the file was found.
    pub path: PathBuf,
    /// Its slot in the merge order.
    pub precedence: Precedence,
    /// The parsed contents.
    pub config: Config,
}

impl ConfigSource {
    fn read(path: PathBuf, precedence: Precedence) -> Result<Self> {
        let config = ConfigLoader::load_file(&path)?;
        Ok(Self {
            path,
            precedence,
            config,
        })
    }
}

/// Finds and parses the configuration files that apply to a session.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Collects every applicable configuration file, ordered lowest
    /// precedence first.
    ///
    /// `user_dir` substitutes for `~/.usher` when given; tests use it to
    /// stay out of the real home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        let user_file = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => Self::user_config_path()?,
        };
        if user_file.exists() {
            sources.push(ConfigSource::read(user_file, Precedence::User)?);
        }

        // Walk up until some directory owns a project config
        let mut dir = working_dir.to_path_buf();
        loop {
            let project = dir.join("usher.yaml");
            let local = dir.join("usher.local.yaml");
            let owned = project.exists() || local.exists();

            if project.exists() {
                sources.push(ConfigSource::read(project, Precedence::Project)?);
            }
            if local.exists() {
                sources.push(ConfigSource::read(local, Precedence::ProjectLocal)?);
            }

            if owned || !dir.pop() {
                break;
            }
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Parses one YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML does not
    /// match the schema.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("Invalid YAML: {e}"),
        })
    }

    fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home".into(),
            message: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(".usher").join("config.yaml"))
    }
}
