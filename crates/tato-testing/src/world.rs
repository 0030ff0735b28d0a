//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a throwaway data directory. Saved carts and config files
//! are written into it the same way the binary would, then commands run
//! against it with `--data-dir`.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tato_runtime::{Config, FileStore, KeyValueStore};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use tato_testing::TestWorld;
///
/// let world = TestWorld::new().with_cart(&[3, 3]);
///
/// let result = world.run(&["cart"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".tato");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Save a cart holding catalog products `ids`, as a previous session would have.
    pub fn with_cart(self, ids: &[u32]) -> Self {
        let json = fixtures::cart_json(ids).expect("Failed to build cart fixture");
        self.with_saved_cart(&json)
    }

    /// Save `raw` verbatim under the configured cart key.
    pub fn with_saved_cart(self, raw: &str) -> Self {
        let key = self.config().storage.cart_key;
        let mut store = FileStore::open(&self.data_dir).expect("Failed to open store");
        store.set(&key, raw).expect("Failed to save cart");
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, body: &str) -> Self {
        std::fs::write(Config::path_in(&self.data_dir), body).expect("Failed to write config");
        self
    }

    /// Config as the binary will load it.
    pub fn config(&self) -> Config {
        Config::load_from(&Config::path_in(&self.data_dir)).expect("Failed to load config")
    }

    /// Saved cart value, if any.
    pub fn saved_cart(&self) -> Result<Option<String>> {
        let store = FileStore::open(&self.data_dir)?;
        Ok(store.get(&self.config().storage.cart_key)?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Execute the binary with `args` against this world's data directory.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tato-aisle")
            .map_err(|e| anyhow::anyhow!("Failed to find tato-aisle binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Same as [`TestWorld::run`] with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        self.run(&full)
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

    /// Parse stdout as JSON.
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
