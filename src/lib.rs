//! Picks the Bazel version for the current workspace, downloads the matching
//! binary if needed and runs it with the given arguments.

pub mod artifact;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod version;

use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use crate::artifact::{Fetcher, Platform};
use crate::config::{BAZEL_REPOSITORY, Config, ensure_dir};
use crate::version::cache::ReleaseCache;
use crate::version::registries::GitHubRegistry;
use crate::version::resolver::resolve_version_label;
use crate::version::selector::select_version_label;

/// Resolves the Bazel version requested for a run started in `cwd`.
pub async fn resolve_version(config: &Config, cwd: &Path) -> anyhow::Result<String> {
    ensure_dir(&config.home)?;

    let label = select_version_label(config.version_override.as_deref(), cwd)?;
    let registry = GitHubRegistry::new(&config.releases_api_url, BAZEL_REPOSITORY)?;
    let cache = ReleaseCache::new(config.cache_file(), config.cache_max_age);

    Ok(resolve_version_label(&label, &cache, &registry).await?)
}

/// Runs the whole pipeline and returns the exit code of the launched binary.
pub async fn run(config: &Config, cwd: &Path, args: Vec<OsString>) -> anyhow::Result<i32> {
    let version = resolve_version(config, cwd).await?;
    debug!("Using Bazel {}", version);

    let bin_dir = config.bin_dir();
    ensure_dir(&bin_dir)?;

    let fetcher = Fetcher::new(&config.download_base_url, Platform::current()?)?;
    let bazel = fetcher.fetch(&version, &bin_dir).await?;

    Ok(launcher::execute(&bazel, &args).await?)
}
