//! GitHub Releases API registry implementation

use crate::version::error::RegistryError;
use crate::version::registry::ReleaseRegistry;
use crate::version::semver::sort_descending;
use crate::version::types::ReleaseHistory;
use serde::Deserialize;
use tracing::{debug, warn};

/// Response from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    prerelease: bool,
}

/// Registry implementation for GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    repository: String,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry for `repository` (e.g. "bazelbuild/bazel")
    pub fn new(base_url: &str, repository: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("bazelisk/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ReleaseRegistry for GitHubRegistry {
    async fn fetch_release_history(&self) -> Result<ReleaseHistory, RegistryError> {
        let url = format!("{}/repos/{}/releases", self.base_url, self.repository);
        debug!("Fetching release history from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        let exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v.as_bytes() == b"0");
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && exhausted)
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let tags = releases
            .into_iter()
            .filter(|r| !r.prerelease)
            .map(|r| r.tag_name);

        Ok(ReleaseHistory::new(sort_descending(tags)))
    }
}
