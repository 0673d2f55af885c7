//! Room file loader.

use std::path::{Path, PathBuf};

use game_core::scenario::RoomSpec;

use crate::loaders::{LoadResult, read_file};

/// Loader for `rooms/*.ron`, one [`RoomSpec`] per file.
pub struct RoomLoader;

impl RoomLoader {
    pub fn load(path: &Path) -> LoadResult<RoomSpec> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse room RON at {}: {}", path.display(), e))
    }

    /// Loads every `.ron` file of `dir` in file-name order.
    ///
    /// A missing directory yields no rooms.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<RoomSpec>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "ron"))
            .collect();
        paths.sort();

        paths.iter().map(|path| Self::load(path)).collect()
    }
}
