//! Version selection and resolution
//!
//! This module turns the user's version request into a concrete Bazel version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Selector   │────▶│  Resolver   │────▶│    Cache    │
//! │ (env, file) │     │ (latest-N)  │     │ (1h, file)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │ miss
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  Registry   │
//!                                         │  (GitHub)   │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`selector`]: Picks the version label from the environment or `.bazelversion`
//! - [`resolver`]: Parses labels and resolves `latest`/`latest-N`
//! - [`cache`]: File-based release history cache with freshness check
//! - [`registry`]: Registry trait for fetching the release history
//! - [`registries`]: Concrete registry implementations (GitHub Releases)
//! - [`semver`]: Release tag parsing and ordering
//! - [`error`]: Error types for resolution, cache and registry operations
//! - [`types`]: Common types like `ReleaseHistory`

pub mod cache;
pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod selector;
pub mod semver;
pub mod types;
