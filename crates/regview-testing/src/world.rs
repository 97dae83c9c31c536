//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory holding a catalog file, an optional
//! config file and a HOME so the binary never sees the real user config.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use regview_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog().unwrap();
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");

        let mut env_vars = HashMap::new();
        env_vars.insert("HOME".to_string(), home.display().to_string());
        env_vars.insert(
            "XDG_CONFIG_HOME".to_string(),
            home.join(".config").display().to_string(),
        );

        Self { temp_dir, env_vars }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root().join("catalog.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("regview.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root().join("regview.log")
    }

    /// Write the sample catalog to [`catalog_path`](Self::catalog_path).
    pub fn with_sample_catalog(self) -> Result<Self> {
        self.with_catalog(&fixtures::sample_catalog_json())
    }

    pub fn with_catalog(self, content: &str) -> Result<Self> {
        std::fs::write(self.catalog_path(), content)?;
        Ok(self)
    }

    pub fn with_config(self, content: &str) -> Result<Self> {
        std::fs::write(self.config_path(), content)?;
        Ok(self)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.root());
        cmd.env_remove("REGVIEW_CONFIG");
        cmd.env_remove("REGVIEW_LOG");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run `regview` with the given arguments.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("regview")
            .map_err(|e| anyhow::anyhow!("Failed to find regview binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
