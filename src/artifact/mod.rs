//! Locating and downloading platform-specific Bazel binaries
//!
//! - [`platform`]: Host platform checks, binary file names and download URLs
//! - [`fetcher`]: Downloads binaries that are not yet present and marks them executable
//! - [`error`]: Error types for both

pub mod error;
pub mod fetcher;
pub mod platform;

pub use fetcher::Fetcher;
pub use platform::{ArtifactDescriptor, Os, Platform};
