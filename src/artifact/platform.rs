//! Platform detection and artifact naming

use std::sync::LazyLock;

use regex::Regex;

use crate::artifact::error::ArtifactError;

/// Splits a version into its numeric base and an optional release candidate,
/// e.g. "0.20.0rc1" -> ("0.20.0", "rc1")
static VERSION_PARTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<base>\d+\.\d+(?:\.\d+)?)(?P<rc>rc\d)?").unwrap());

/// Operating systems Bazel publishes binaries for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Darwin,
    Windows,
}

impl Os {
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Darwin => "darwin",
            Os::Windows => "windows",
        }
    }

    /// Case-insensitive; "macos" is accepted as an alias for "darwin".
    pub fn parse(name: &str) -> Result<Self, ArtifactError> {
        match name.to_lowercase().as_str() {
            "linux" => Ok(Os::Linux),
            "darwin" | "macos" => Ok(Os::Darwin),
            "windows" => Ok(Os::Windows),
            other => Err(ArtifactError::UnsupportedOperatingSystem(other.to_string())),
        }
    }
}

/// A supported (os, arch) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
}

impl Platform {
    /// The only architecture Bazel publishes binaries for
    pub const ARCH: &'static str = "x86_64";

    /// Validates an os/arch pair as reported by the host.
    ///
    /// The architecture is checked first.
    pub fn new(os: &str, arch: &str) -> Result<Self, ArtifactError> {
        let arch = normalize_arch(arch);
        if arch != Self::ARCH {
            return Err(ArtifactError::UnsupportedArchitecture(arch));
        }
        Ok(Self { os: Os::parse(os)? })
    }

    /// The platform this binary runs on.
    pub fn current() -> Result<Self, ArtifactError> {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// `bazel-<version>-<os>-<arch>`, with `.exe` on Windows
    pub fn filename(&self, version: &str) -> String {
        let suffix = if self.os == Os::Windows { ".exe" } else { "" };
        format!(
            "bazel-{}-{}-{}{}",
            version,
            self.os.as_str(),
            Self::ARCH,
            suffix
        )
    }
}

fn normalize_arch(arch: &str) -> String {
    let arch = arch.to_lowercase();
    if arch == "amd64" {
        "x86_64".to_string()
    } else {
        arch
    }
}

/// File name and download location of a Bazel binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub filename: String,
    pub url: String,
}

impl ArtifactDescriptor {
    /// Derives the artifact for `version` on `platform`.
    ///
    /// Release candidates live under `<base>/rcN/`, final releases under
    /// `<base>/release/`.
    pub fn new(
        version: &str,
        platform: &Platform,
        base_url: &str,
    ) -> Result<Self, ArtifactError> {
        let caps = VERSION_PARTS_RE
            .captures(version)
            .ok_or_else(|| ArtifactError::InvalidVersion(version.to_string()))?;
        let base = &caps["base"];
        let segment = caps.name("rc").map_or("release", |m| m.as_str());

        let filename = platform.filename(version);
        let url = format!(
            "{}/{}/{}/{}",
            base_url.trim_end_matches('/'),
            base,
            segment,
            filename
        );

        Ok(Self { filename, url })
    }
}
