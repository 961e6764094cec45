//! Registry trait for fetching the Bazel release history from a remote source

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ReleaseHistory;

/// Trait for fetching the list of published releases
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseRegistry: Send + Sync {
    /// Fetches all non-prerelease versions
    ///
    /// # Returns
    /// * `Ok(ReleaseHistory)` - List of versions, ordered from newest to oldest
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_release_history(&self) -> Result<ReleaseHistory, RegistryError>;
}
