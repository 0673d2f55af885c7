//! Content loaders for reading scenario data from files.
//!
//! Each loader turns one file format into the `game-core` spec types;
//! [`ContentFactory`] assembles them for a scenario directory.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod room;
pub mod scenario;

pub use catalog::{ScenarioEntry, list_scenarios};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use room::RoomLoader;
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
