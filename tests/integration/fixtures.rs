//! Test fixtures for integration tests.
//!
//! Provides scratch project directories and a binary runner isolated from
//! the developer's own configuration.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// `A.env` from the canonical two-file scenario.
pub const A_ENV: &str = "PORT=3000\nHOST=localhost\n";

/// `B.env` from the canonical two-file scenario.
pub const B_ENV: &str = "PORT=4000\nDEBUG=true\n";

/// A scratch working directory with its own fake home.
pub struct Project {
    dir: TempDir,
    home: TempDir,
}

impl Project {
    /// Root of the project.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file in the project.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the project.
    pub fn write(&self, name: &str, content: &str) -> &Self {
        fs::write(self.file(name), content).expect("Failed to write fixture file");
        self
    }

    /// Read a file from the project.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name))
            .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
    }

    /// Check whether a file exists in the project.
    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }

    /// Write a user-level config file under the fake home.
    pub fn write_user_config(&self, content: &str) {
        let dir = self.home.path().join(".config").join("configforge");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.toml"), content).expect("Failed to write user config");
    }

    /// A command running the binary inside the project.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("configforge");
        cmd.current_dir(self.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("CONFIGFORGE_KEY")
            .env_remove("CONFIGFORGE_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Create an empty project.
pub fn create_empty_project() -> Project {
    Project {
        dir: TempDir::new().expect("Failed to create temp directory"),
        home: TempDir::new().expect("Failed to create temp home"),
    }
}

/// Create a project containing the given files.
pub fn create_project(files: &[(&str, &str)]) -> Project {
    let project = create_empty_project();
    for (name, content) in files {
        project.write(name, content);
    }
    project
}

/// Create the `A.env` / `B.env` project.
pub fn create_conflict_project() -> Project {
    create_project(&[("A.env", A_ENV), ("B.env", B_ENV)])
}

/// Create a project with a schema requiring `required`.
pub fn create_project_with_schema(required: &[&str], files: &[(&str, &str)]) -> Project {
    let project = create_project(files);
    let schema = serde_json::json!({ "required": required });
    project.write("config.schema.json", &schema.to_string());
    project
}
