use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use tracing::warn;

/// `<major>[.<minor>[.<patch>]][rcN]`, with an optional leading `v`
static RELEASE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(?P<base>\d+(?:\.\d+){0,2})(?:-?(?P<rc>rc\d+))?$").unwrap()
});

/// Parse a release tag into a semver::Version, normalizing partial versions.
///
/// Partial versions are padded with zeros and an `rcN` suffix becomes a
/// pre-release identifier, so `0.20.0rc1` sorts below `0.20.0`.
///
/// Examples:
/// - "7" -> Version(7, 0, 0)
/// - "0.20" -> Version(0, 20, 0)
/// - "0.20.0rc1" -> Version(0, 20, 0, pre: "rc1")
pub fn parse_release_version(tag: &str) -> Option<Version> {
    let caps = RELEASE_TAG_RE.captures(tag)?;
    let base = &caps["base"];
    let mut normalized = match base.split('.').count() {
        1 => format!("{}.0.0", base),
        2 => format!("{}.0", base),
        _ => base.to_string(),
    };
    if let Some(rc) = caps.name("rc") {
        normalized.push('-');
        normalized.push_str(rc.as_str());
    }
    Version::parse(&normalized).ok()
}

/// Sort release tags newest first, keeping the original tag text.
///
/// Tags that are not version numbers are dropped.
pub fn sort_descending(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut parsed: Vec<(Version, String)> = tags
        .into_iter()
        .filter_map(|tag| match parse_release_version(&tag) {
            Some(version) => Some((version, tag)),
            None => {
                warn!("Skipping release with unparseable tag {:?}", tag);
                None
            }
        })
        .collect();

    parsed.sort_by(|(a, _), (b, _)| b.cmp(a));
    parsed.into_iter().map(|(_, tag)| tag).collect()
}
