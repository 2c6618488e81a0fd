//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with full configuration isolation

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated configuration.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as both working directory and HOME
/// - Helper methods for writing scripts and config files
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a fully isolated command builder.
    ///
    /// The command runs in the temporary directory with HOME redirected
    /// there, so neither a real user config nor a project config above
    /// the temp dir can leak into the test. All USHER_* variables are
    /// cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("usher").expect("Failed to find usher binary");
        cmd.current_dir(&self.temp_path);
        cmd.env("HOME", &self.temp_path);
        for var in [
            "USHER_CONFIG",
            "USHER_ROWS",
            "USHER_SEATS_PER_ROW",
            "USHER_MAX_REQUEST",
            "USHER_OUTPUT_FORMAT",
            "USHER_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file into the test environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
