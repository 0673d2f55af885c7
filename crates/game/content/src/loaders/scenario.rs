//! Scenario header loader.

use std::path::Path;

use game_core::ScenarioSpec;

use crate::loaders::{LoadResult, read_file};

/// Loader for `scenario.ron`.
///
/// The header may list rooms inline; rooms loaded from `rooms/` are appended
/// after them by [`ContentFactory`](super::ContentFactory).
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
