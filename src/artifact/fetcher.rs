//! Download of Bazel binaries into the local bin directory

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::artifact::error::ArtifactError;
use crate::artifact::platform::{ArtifactDescriptor, Platform};

pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
    platform: Platform,
}

impl Fetcher {
    pub fn new(base_url: &str, platform: Platform) -> Result<Self, ArtifactError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("bazelisk/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: base_url.to_string(),
            platform,
        })
    }

    /// Returns the path to an executable Bazel `version` inside `directory`,
    /// downloading it first if no file with that name exists.
    ///
    /// An existing file is trusted as is. An interrupted download leaves a
    /// partial file behind which later runs will also trust.
    pub async fn fetch(&self, version: &str, directory: &Path) -> Result<PathBuf, ArtifactError> {
        let descriptor = ArtifactDescriptor::new(version, &self.platform, &self.base_url)?;
        let destination = directory.join(&descriptor.filename);

        if destination.exists() {
            debug!("Using existing binary {:?}", destination);
        } else {
            info!("Downloading {}...", descriptor.url);
            self.download(&descriptor.url, &destination).await?;
        }

        make_executable(&destination)?;
        Ok(destination)
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<(), ArtifactError> {
        let mut response = self.client.get(url).send().await?.error_for_status()?;

        let mut file = tokio::fs::File::create(destination).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
