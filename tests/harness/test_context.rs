//! Shared testing harness for `framelab` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scenario file in the catalog format, holding one entry.
pub(crate) const EXTRA_SCENARIO_YAML: &str = r#"scenarios:
  - text: "standing in a glass greenhouse at dawn"
    settings:
      lighting: "Softbox Studio"
      style: "Editorial"
      grading: "Warm Vintage"
      film_stock: "Kodak Portra 400"
      lens: "50mm Prime"
      camera: "Canon EOS R5"
      aperture: "f/2.8"
      texture: "Soft Skin Gloss"
      scale: "Medium Shot (Chest)"
      pose: "Three-Quarter Turn"
      angle: "Eye Level"
      ratio: "4:5"
"#;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `framelab` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("framelab").expect("Failed to locate framelab binary");
        cmd.current_dir(self.work_dir()).env_remove("FRAMELAB_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir().join(relative)).expect("Failed to read test file")
    }

    /// Write `framelab.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        self.write_file("framelab.toml", content);
    }

    /// Run the CLI, assert success and return stdout.
    pub(crate) fn stdout(&self, args: &[&str]) -> String {
        let output = self.cli().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("stdout should be UTF-8")
    }

    /// Run the CLI with JSON output and parse the document.
    pub(crate) fn render_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["render", "--format", "json"];
        full.extend_from_slice(args);
        let stdout = self.stdout(&full);
        serde_json::from_str(&stdout).expect("render output should be JSON")
    }
}
