//! Common test utilities for chart-version-check integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding the bundle and index files of one test
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a `Chart.yaml` with the given name and version
    pub fn write_bundle(&self, name: &str, version: &str) -> PathBuf {
        self.write_file(
            "Chart.yaml",
            &format!("apiVersion: v2\nname: {name}\nversion: {version}\n"),
        )
    }

    /// Write a flat-layout `index.yaml` listing `versions` under `name`
    pub fn write_index(&self, name: &str, versions: &[&str]) -> PathBuf {
        let mut content = format!("{name}:\n");
        for version in versions {
            content.push_str(&format!("  - version: {version}\n"));
        }
        self.write_file("index.yaml", &content)
    }

    /// Command running the check on `bundle` and `index`
    pub fn check_cmd(&self, bundle: &std::path::Path, index: &std::path::Path) -> Command {
        let mut cmd = cmd();
        cmd.env_remove("RUST_LOG").arg(bundle).arg(index);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real chart-version-check binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn cmd() -> Command {
    Command::cargo_bin("chart-version-check").expect("Failed to find chart-version-check binary")
}
