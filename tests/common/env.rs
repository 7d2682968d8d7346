//! Test environment for isolated gridclear runs.
//!
//! Provides `TestEnv` - temp directories for the project and HOME, plus
//! helpers to run the gridclear binary against a snapshot file.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a gridclear CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout split into lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// stdout parsed as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {line:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated environment with its own project directory and HOME
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_gridclear")),
        }
    }

    /// Create an environment whose `grid.json` holds `snapshot`
    pub fn with_snapshot(snapshot: &str) -> Self {
        let env = Self::new();
        env.write_project_file("grid.json", snapshot);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run gridclear from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run gridclear from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        self.run_command(cwd, args, &[("RUST_LOG", "info")], env_vars)
    }

    /// Run gridclear without `RUST_LOG`, so the log level comes from flags,
    /// `GRIDCLEAR_LOG` and config
    pub fn run_without_rust_log(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_command(self.project_root.path(), args, &[], env_vars)
    }

    fn run_command(
        &self,
        cwd: &Path,
        args: &[&str],
        base_env: &[(&str, &str)],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("GRIDCLEAR_SNAPSHOT")
            .env_remove("GRIDCLEAR_BATCH_SIZE")
            .env_remove("GRIDCLEAR_LOG");

        for (key, value) in base_env.iter().chain(env_vars) {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute gridclear");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Parsed `grid.json`
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_project_file("grid.json")).expect("Invalid snapshot")
    }

    /// Number of entries stored for `region` in `grid.json`
    pub fn entry_count(&self, region: &str) -> usize {
        self.snapshot()["regions"]
            .as_array()
            .expect("regions array")
            .iter()
            .find(|r| r["name"] == region)
            .unwrap_or_else(|| panic!("region {region} not in snapshot"))["entries"]
            .as_array()
            .map_or(0, Vec::len)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
