//! Selection of the requested version label
//!
//! Checked in this order:
//! - the `USE_BAZEL_VERSION` override, if non-empty
//! - `.bazelversion` in the workspace root
//! - "latest"

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::version::error::ResolveError;

/// File that marks the workspace root
pub const WORKSPACE_MARKER: &str = "WORKSPACE";

/// File in the workspace root that pins a version
pub const VERSION_FILE: &str = ".bazelversion";

pub const DEFAULT_LABEL: &str = "latest";

/// Returns the version label to resolve for a run started in `cwd`.
pub fn select_version_label(
    version_override: Option<&str>,
    cwd: &Path,
) -> Result<String, ResolveError> {
    if let Some(label) = version_override.filter(|v| !v.is_empty()) {
        debug!("Using version {:?} from environment", label);
        return Ok(label.to_string());
    }

    if let Some(root) = find_workspace_root(cwd) {
        let version_file = root.join(VERSION_FILE);
        if version_file.exists() {
            let label = std::fs::read_to_string(&version_file)?.trim().to_string();
            debug!("Using version {:?} from {:?}", label, version_file);
            return Ok(label);
        }
    }

    Ok(DEFAULT_LABEL.to_string())
}

/// Walks from `start` towards the filesystem root and returns the first
/// directory containing a `WORKSPACE` file.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        if current.join(WORKSPACE_MARKER).exists() {
            return Some(current.to_path_buf());
        }
        dir = current.parent();
    }
    None
}
