//! Content loaders for reading planner data from files.

pub mod build;
pub mod config;
pub mod gear;

pub use build::{Build, BuildLoader};
pub use config::ConfigLoader;
pub use gear::{GearEntry, GearLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
