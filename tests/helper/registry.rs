//! Registry test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use bazelisk::version::error::RegistryError;
use bazelisk::version::registry::ReleaseRegistry;
use bazelisk::version::types::ReleaseHistory;

/// Mock registry that serves a fixed history and counts fetches
pub struct MockRegistry {
    versions: Vec<String>,
    fetches: AtomicUsize,
}

impl MockRegistry {
    pub fn with_versions(versions: Vec<&str>) -> Self {
        Self {
            versions: versions.into_iter().map(|v| v.to_string()).collect(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReleaseRegistry for MockRegistry {
    async fn fetch_release_history(&self) -> Result<ReleaseHistory, RegistryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(ReleaseHistory::new(self.versions.clone()))
    }
}
