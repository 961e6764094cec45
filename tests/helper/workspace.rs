//! Filesystem fixtures

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use bazelisk::config::Config;

/// Temporary home directory plus an optional Bazel workspace
pub struct TestWorkspace {
    pub dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    /// Creates `project/WORKSPACE` and returns the project directory.
    pub fn create_project(&self, bazelversion: Option<&str>) -> PathBuf {
        let project = self.dir.path().join("project");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(project.join("WORKSPACE"), "").unwrap();
        if let Some(contents) = bazelversion {
            std::fs::write(project.join(".bazelversion"), contents).unwrap();
        }
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Config rooted in the workspace's home, talking to `server_url` for both
/// the release list and downloads.
pub fn test_config(
    workspace: &TestWorkspace,
    version_override: Option<&str>,
    server_url: &str,
) -> Config {
    let mut config = Config::from_vars(
        version_override.map(str::to_string),
        Some(workspace.home()),
        None,
    );
    config.releases_api_url = server_url.to_string();
    config.download_base_url = server_url.to_string();
    config
}
