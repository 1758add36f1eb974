//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated save directory
//! - Placing save files with controlled modification times
//! - Writing a config file
//! - Executing the CLI against that directory

use anyhow::Result;
use assert_cmd::Command;
use filetime::{FileTime, set_file_mtime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use save_analyzer_testing::TestWorld;
///
/// let world = TestWorld::new().with_saves_at(&[0, 100, 200]);
///
/// let result = world.run(&["--delay", "5m"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    saves_dir: PathBuf,
    config_path: PathBuf,
    next_save: usize,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty `saves/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let saves_dir = temp_dir.path().join("saves");
        let config_path = temp_dir.path().join("config.toml");

        std::fs::create_dir_all(&saves_dir).expect("Failed to create saves dir");

        Self {
            temp_dir,
            saves_dir,
            config_path,
            next_save: 0,
        }
    }

    /// Get the saves directory path.
    pub fn saves_dir(&self) -> &Path {
        &self.saves_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Place a save file whose modification time is `unix_secs`.
    pub fn with_save(self, name: &str, unix_secs: i64) -> Self {
        self.write_save(&self.saves_dir.join(name), unix_secs)
            .expect("Failed to write save file");
        self
    }

    /// Place one generated save file per timestamp.
    pub fn with_saves_at(mut self, timestamps: &[i64]) -> Self {
        for ts in timestamps {
            let name = format!("save_{:04}.sav", self.next_save);
            self.next_save += 1;
            self = self.with_save(&name, *ts);
        }
        self
    }

    /// Create a sub-directory (with one file inside) in the saves directory.
    pub fn with_subdir(self, name: &str, unix_secs: i64) -> Self {
        let dir = self.saves_dir.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create sub-directory");
        self.write_save(&dir.join("nested.sav"), unix_secs)
            .expect("Failed to write nested save file");
        self
    }

    /// Write `config.toml` with the given contents.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config file");
        self
    }

    fn write_save(&self, path: &Path, unix_secs: i64) -> Result<()> {
        std::fs::write(path, b"SAVEDATA")?;
        set_file_mtime(path, FileTime::from_unix_time(unix_secs, 0))?;
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The config lookup is pinned to this world's `config.toml` so that a
    /// developer's own config never leaks into tests.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env("SAVE_ANALYZER_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path())
    }

    /// Run the CLI with `--dir <saves>` followed by `args`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut full_args: Vec<&str> = Vec::with_capacity(args.len() + 2);
        let dir = self.saves_dir.to_string_lossy().to_string();
        full_args.push("--dir");
        full_args.push(&dir);
        full_args.extend_from_slice(args);
        self.run_raw(&full_args)
    }

    /// Run the CLI with exactly `args` (no implicit `--dir`).
    #[allow(deprecated)]
    pub fn run_raw(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("save-analyzer")
            .map_err(|e| anyhow::anyhow!("Failed to find save-analyzer binary: {}", e))?;

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
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
