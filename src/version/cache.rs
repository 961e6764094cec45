use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, info};

use crate::version::error::{CacheError, ResolveError};
use crate::version::registry::ReleaseRegistry;
use crate::version::types::ReleaseHistory;

/// Single-file cache of the last fetched release history.
///
/// Freshness is judged by the file's modification time. No locking is done;
/// concurrent runs may both refresh and the last writer wins.
pub struct ReleaseCache {
    path: PathBuf,
    max_age: Duration,
}

impl ReleaseCache {
    pub fn new(path: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self {
            path: path.into(),
            max_age,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached history if the file exists and is fresh at `now`.
    pub fn read_fresh(&self, now: SystemTime) -> Result<Option<ReleaseHistory>, CacheError> {
        let modified = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata.modified()?,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !is_fresh(modified, now, self.max_age) {
            debug!("Release cache at {:?} is stale", self.path);
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let history = serde_json::from_str(contents.trim())?;
        Ok(Some(history))
    }

    /// Overwrites the cache file with `history`.
    pub fn write(&self, history: &ReleaseHistory) -> Result<(), CacheError> {
        let contents = serde_json::to_string(history)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Returns the release history, newest first, fetching it from `registry`
    /// when the cache is missing or stale.
    ///
    /// Fetch failures are returned as is; a stale cache is never used as a fallback.
    pub async fn get_or_refresh(
        &self,
        registry: &dyn ReleaseRegistry,
    ) -> Result<ReleaseHistory, ResolveError> {
        if let Some(history) = self.read_fresh(SystemTime::now())? {
            debug!("Using {} cached releases from {:?}", history.len(), self.path);
            return Ok(history);
        }

        let history = registry.fetch_release_history().await?;
        self.write(&history)?;
        info!("Cached {} releases at {:?}", history.len(), self.path);

        Ok(history)
    }
}

/// Clock skew in either direction counts as age.
fn is_fresh(modified: SystemTime, now: SystemTime, max_age: Duration) -> bool {
    let age = now
        .duration_since(modified)
        .unwrap_or_else(|e| e.duration());
    age < max_age
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::RegistryError;
    use crate::version::registry::MockReleaseRegistry;
    use rstest::rstest;
    use std::fs::File;
    use tempfile::TempDir;

    const ONE_HOUR: Duration = Duration::from_secs(3600);

    fn create_test_cache(contents: Option<&str>, age: Duration) -> (TempDir, ReleaseCache) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latest_bazel");
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
            File::options()
                .write(true)
                .open(&path)
                .unwrap()
                .set_modified(SystemTime::now() - age)
                .unwrap();
        }
        (temp_dir, ReleaseCache::new(path, ONE_HOUR))
    }

    #[rstest]
    #[case(0, true)]
    #[case(3599, true)]
    #[case(3600, false)]
    #[case(7200, false)]
    fn is_fresh_compares_age_with_max_age(#[case] age_secs: u64, #[case] expected: bool) {
        let now = SystemTime::now();
        let modified = now - Duration::from_secs(age_secs);
        assert_eq!(is_fresh(modified, now, ONE_HOUR), expected);
    }

    #[rstest]
    #[case(3599, true)]
    #[case(3600, false)]
    fn is_fresh_treats_future_mtime_like_past_mtime(#[case] skew_secs: u64, #[case] expected: bool) {
        let now = SystemTime::now();
        let modified = now + Duration::from_secs(skew_secs);
        assert_eq!(is_fresh(modified, now, ONE_HOUR), expected);
    }

    #[test]
    fn read_fresh_returns_none_when_file_is_missing() {
        let (_temp_dir, cache) = create_test_cache(None, Duration::ZERO);

        assert_eq!(cache.read_fresh(SystemTime::now()).unwrap(), None);
    }

    #[test]
    fn read_fresh_returns_history_when_file_is_fresh() {
        let (_temp_dir, cache) =
            create_test_cache(Some("[\"7.0.0\", \"6.4.0\"]\n"), Duration::from_secs(60));

        assert_eq!(
            cache.read_fresh(SystemTime::now()).unwrap(),
            Some(ReleaseHistory::new(vec![
                "7.0.0".to_string(),
                "6.4.0".to_string()
            ]))
        );
    }

    #[test]
    fn read_fresh_returns_none_when_file_is_stale() {
        let (_temp_dir, cache) =
            create_test_cache(Some(r#"["7.0.0"]"#), Duration::from_secs(2 * 3600));

        assert_eq!(cache.read_fresh(SystemTime::now()).unwrap(), None);
    }

    #[test]
    fn read_fresh_fails_on_malformed_contents() {
        let (_temp_dir, cache) = create_test_cache(Some("not json"), Duration::ZERO);

        assert!(matches!(
            cache.read_fresh(SystemTime::now()),
            Err(CacheError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn get_or_refresh_uses_fresh_cache_without_fetching() {
        let (_temp_dir, cache) = create_test_cache(Some(r#"["7.0.0"]"#), Duration::ZERO);

        let mut registry = MockReleaseRegistry::new();
        registry.expect_fetch_release_history().times(0);

        let history = cache.get_or_refresh(&registry).await.unwrap();

        assert_eq!(history.versions, vec!["7.0.0"]);
    }

    #[tokio::test]
    async fn get_or_refresh_fetches_and_overwrites_stale_cache() {
        let (_temp_dir, cache) =
            create_test_cache(Some(r#"["6.0.0"]"#), Duration::from_secs(2 * 3600));

        let mut registry = MockReleaseRegistry::new();
        registry
            .expect_fetch_release_history()
            .times(1)
            .returning(|| {
                Ok(ReleaseHistory::new(vec![
                    "7.0.0".to_string(),
                    "6.0.0".to_string(),
                ]))
            });

        let history = cache.get_or_refresh(&registry).await.unwrap();

        assert_eq!(history.versions, vec!["7.0.0", "6.0.0"]);
        assert_eq!(
            std::fs::read_to_string(cache.path()).unwrap(),
            r#"["7.0.0","6.0.0"]"#
        );
    }

    #[tokio::test]
    async fn get_or_refresh_creates_cache_file_when_missing() {
        let (_temp_dir, cache) = create_test_cache(None, Duration::ZERO);

        let mut registry = MockReleaseRegistry::new();
        registry
            .expect_fetch_release_history()
            .times(1)
            .returning(|| Ok(ReleaseHistory::new(vec!["7.0.0".to_string()])));

        cache.get_or_refresh(&registry).await.unwrap();

        assert!(cache.path().is_file());
    }

    #[tokio::test]
    async fn get_or_refresh_propagates_fetch_errors_and_keeps_stale_cache() {
        let (_temp_dir, cache) =
            create_test_cache(Some(r#"["6.0.0"]"#), Duration::from_secs(2 * 3600));

        let mut registry = MockReleaseRegistry::new();
        registry
            .expect_fetch_release_history()
            .times(1)
            .returning(|| Err(RegistryError::InvalidResponse("boom".to_string())));

        let result = cache.get_or_refresh(&registry).await;

        assert!(matches!(
            result,
            Err(ResolveError::Registry(RegistryError::InvalidResponse(_)))
        ));
        assert_eq!(
            std::fs::read_to_string(cache.path()).unwrap(),
            r#"["6.0.0"]"#
        );
    }
}
