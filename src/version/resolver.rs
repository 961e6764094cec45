//! Resolution of version labels to concrete versions
//!
//! A label is either a literal version ("0.20.0", "7.0.0rc1"), which is used
//! as is, or a symbolic label: "latest" for the newest release and "latest-N"
//! for the release N steps before it.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::cache::ReleaseCache;
use crate::version::error::ResolveError;
use crate::version::registry::ReleaseRegistry;
use crate::version::types::ReleaseHistory;

static LATEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^latest(-(?P<offset>[0-9]+))?$").unwrap());

/// A parsed version label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLabel {
    /// A concrete version, not validated
    Literal(String),
    /// The release `offset` steps before the newest one
    Latest { offset: usize },
}

impl VersionLabel {
    pub fn parse(label: &str) -> Result<Self, ResolveError> {
        if !label.contains("latest") {
            return Ok(Self::Literal(label.to_string()));
        }

        let caps = LATEST_RE
            .captures(label)
            .ok_or_else(|| ResolveError::InvalidVersionLabel(label.to_string()))?;
        // Too large for usize means out of range for any history.
        let offset = caps
            .name("offset")
            .map_or(0, |m| m.as_str().parse::<usize>().unwrap_or(usize::MAX));

        Ok(Self::Latest { offset })
    }
}

/// Picks the release at `offset` from a history stored newest first.
///
/// `label` is the text the offset was parsed from, used in the error.
pub fn resolve_latest_version(
    history: &ReleaseHistory,
    label: &str,
    offset: usize,
) -> Result<String, ResolveError> {
    history
        .get(offset)
        .map(str::to_string)
        .ok_or_else(|| ResolveError::VersionOffsetOutOfRange {
            label: label.to_string(),
            offset,
            available: history.len(),
        })
}

/// Resolves `label` to a concrete version.
///
/// Literal labels are returned unchanged without touching the cache or the
/// network. Symbolic labels consult the release history through `cache`.
pub async fn resolve_version_label(
    label: &str,
    cache: &ReleaseCache,
    registry: &dyn ReleaseRegistry,
) -> Result<String, ResolveError> {
    match VersionLabel::parse(label)? {
        VersionLabel::Literal(version) => Ok(version),
        VersionLabel::Latest { offset } => {
            let history = cache.get_or_refresh(registry).await?;
            let version = resolve_latest_version(&history, label, offset)?;
            debug!("Resolved {:?} to {}", label, version);
            Ok(version)
        }
    }
}
