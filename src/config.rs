use std::env::VarError;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

// =============================================================================
// Environment variables
// =============================================================================

/// Explicit version label, takes priority over `.bazelversion`
pub const VERSION_OVERRIDE_ENV: &str = "USE_BAZEL_VERSION";

/// Root directory for downloaded binaries and the release cache
pub const HOME_ENV: &str = "BAZELISK_HOME";

/// Log filter directives (`tracing_subscriber::EnvFilter` syntax)
pub const LOG_ENV: &str = "BAZELISK_LOG";

// =============================================================================
// Remote endpoints
// =============================================================================

/// Default base URL for GitHub API
pub const DEFAULT_RELEASES_API_URL: &str = "https://api.github.com";

/// Repository whose releases make up the release history
pub const BAZEL_REPOSITORY: &str = "bazelbuild/bazel";

/// Default base URL for Bazel binaries
pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://releases.bazel.build";

// =============================================================================
// Cache
// =============================================================================

/// How long a fetched release history is reused (1 hour)
pub const RELEASE_HISTORY_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// File name of the release history cache inside the home directory
pub const RELEASE_HISTORY_FILE: &str = "latest_bazel";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("USE_BAZEL_VERSION is not valid UTF-8: {0:?}")]
    NonUnicodeOverride(OsString),
}

/// Runtime configuration, passed explicitly to every stage of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root directory for `bin/` and the release cache
    pub home: PathBuf,
    /// Value of `USE_BAZEL_VERSION`, if set and non-empty
    pub version_override: Option<String>,
    pub releases_api_url: String,
    pub download_base_url: String,
    pub cache_max_age: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_vars(
            version_override_from_var(std::env::var(VERSION_OVERRIDE_ENV))?,
            std::env::var_os(HOME_ENV).map(PathBuf::from),
            dirs::home_dir(),
        ))
    }

    pub fn from_vars(
        version_override: Option<String>,
        bazelisk_home: Option<PathBuf>,
        home_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            home: home_with_env(bazelisk_home, home_dir),
            version_override: version_override.filter(|v| !v.is_empty()),
            releases_api_url: DEFAULT_RELEASES_API_URL.to_string(),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
            cache_max_age: RELEASE_HISTORY_MAX_AGE,
        }
    }

    /// Returns the path to the release history cache file.
    pub fn cache_file(&self) -> PathBuf {
        self.home.join(RELEASE_HISTORY_FILE)
    }

    /// Returns the directory downloaded binaries are stored in.
    pub fn bin_dir(&self) -> PathBuf {
        self.home.join("bin")
    }
}

/// A non-UTF-8 override is an error rather than silently unset.
fn version_override_from_var(
    var: Result<String, VarError>,
) -> Result<Option<String>, ConfigError> {
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::NonUnicodeOverride(raw)),
    }
}

/// Uses $BAZELISK_HOME if set, otherwise ~/.bazelisk,
/// or ./.bazelisk if no home directory is available.
fn home_with_env(bazelisk_home: Option<PathBuf>, home_dir: Option<PathBuf>) -> PathBuf {
    bazelisk_home
        .filter(|h| !h.as_os_str().is_empty())
        .unwrap_or_else(|| home_dir.unwrap_or_else(|| PathBuf::from(".")).join(".bazelisk"))
}

/// Creates `path` and its parents. A directory that already exists,
/// including one created concurrently by another run, is not an error.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}
