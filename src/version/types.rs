use serde::{Deserialize, Serialize};

/// Known non-prerelease versions, newest first.
///
/// Offset `n` always yields the (n+1)-th newest release, so the order must be
/// preserved when the history is written to and read back from the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseHistory {
    pub versions: Vec<String>,
}

impl ReleaseHistory {
    /// `versions` must already be sorted in descending order.
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    pub fn get(&self, offset: usize) -> Option<&str> {
        self.versions.get(offset).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
