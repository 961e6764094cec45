use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error(
        "Unsupported machine architecture \"{0}\". Bazel currently only supports x86_64."
    )]
    UnsupportedArchitecture(String),

    #[error(
        "Unsupported operating system \"{0}\". Bazel currently only supports Linux, macOS and Windows."
    )]
    UnsupportedOperatingSystem(String),

    #[error("Cannot derive a download URL from version \"{0}\"")]
    InvalidVersion(String),

    #[error("Download failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to write binary: {0}")]
    Io(#[from] std::io::Error),
}
