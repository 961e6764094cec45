use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed release cache: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(
        "Invalid version \"{0}\". In addition to using a version number such as \"0.20.0\", \
         you can use values such as \"latest\" and \"latest-N\", with N being a non-negative integer."
    )]
    InvalidVersionLabel(String),

    #[error("Cannot resolve version \"{label}\": There are only {available} Bazel releases.")]
    VersionOffsetOutOfRange {
        label: String,
        offset: usize,
        available: usize,
    },

    #[error("Failed to read .bazelversion: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
