#![allow(dead_code)]

pub mod registry;
pub mod workspace;

pub use registry::MockRegistry;
pub use workspace::{TestWorkspace, test_config};
