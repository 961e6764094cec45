//! Registry implementations for fetching the release history

pub mod github;

pub use github::GitHubRegistry;
