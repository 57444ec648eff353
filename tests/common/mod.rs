//! Shared testing utilities for materialize-workbooks CLI tests.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory with a site snapshot.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment holding the default snapshot.
    pub fn new() -> Self {
        let ctx = Self { root: TempDir::new().expect("Failed to create temp directory for tests") };
        ctx.write_snapshot(&default_snapshot());
        ctx
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path to the default snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.work_dir().join("site.json")
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("materialize-workbooks").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Build a command already pointed at the default snapshot.
    pub fn cli_with_snapshot(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--snapshot").arg(self.snapshot_path());
        cmd
    }

    pub fn write_snapshot(&self, snapshot: &Value) {
        let content = serde_json::to_string_pretty(snapshot).expect("Failed to encode snapshot");
        fs::write(self.snapshot_path(), content).expect("Failed to write snapshot");
    }

    pub fn read_snapshot(&self) -> Value {
        let content = fs::read_to_string(self.snapshot_path()).expect("Failed to read snapshot");
        serde_json::from_str(&content).expect("Snapshot should be valid JSON")
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Whether the workbook with `id` has materialized views enabled in the saved snapshot.
    pub fn workbook_enabled(&self, id: &str) -> bool {
        self.read_snapshot()["workbooks"]
            .as_array()
            .expect("workbooks should be an array")
            .iter()
            .find(|workbook| workbook["id"] == id)
            .unwrap_or_else(|| panic!("workbook {} should exist", id))["materialized_views_config"]
            ["materialized_views_enabled"]
            .as_bool()
            .unwrap_or(false)
    }

    pub fn site_mode(&self) -> String {
        self.read_snapshot()["site"]["materialized_views_mode"]
            .as_str()
            .expect("site mode should be a string")
            .to_string()
    }
}

fn workbook(id: &str, name: &str, project_id: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "project_id": project_id,
        "materialized_views_config": {
            "materialized_views_enabled": false,
            "run_materialization_now": false
        }
    })
}

/// Site `finance` with projects `Default`, `Project1`, `Project1/Project2`,
/// `Project1/Sales`, and `Sales`.
pub fn default_snapshot() -> Value {
    json!({
        "site": { "name": "Finance", "content_url": "finance", "materialized_views_mode": "enable" },
        "projects": [
            { "id": "0", "name": "Default", "parent_id": null },
            { "id": "1", "name": "Project1", "parent_id": null },
            { "id": "2", "name": "Project2", "parent_id": "1" },
            { "id": "3", "name": "Sales", "parent_id": null },
            { "id": "4", "name": "Sales", "parent_id": "1" }
        ],
        "workbooks": [
            workbook("w1", "Book1", "0"),
            workbook("w2", "Book2", "1"),
            workbook("w3", "Book2", "2"),
            workbook("w4", "Book3", "2"),
            workbook("w5", "Book2", "0"),
            workbook("w6", "Report", "3"),
            workbook("w7", "Report", "4")
        ]
    })
}
