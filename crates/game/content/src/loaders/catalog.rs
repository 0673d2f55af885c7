//! Discovery of the scenarios installed under a data root.

use std::path::{Path, PathBuf};

use crate::loaders::{LoadResult, ScenarioLoader};

use super::factory::ContentFactory;

/// One installed scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioEntry {
    /// Directory name, used as a stable key.
    pub key: String,
    /// Title declared in `scenario.ron`.
    pub title: String,
    pub path: PathBuf,
}

impl ScenarioEntry {
    pub fn factory(&self) -> ContentFactory {
        ContentFactory::new(&self.path)
    }
}

/// Lists every sub-directory of `root` holding a readable `scenario.ron`,
/// sorted by key.
///
/// Directories whose header fails to parse are skipped with a warning.
pub fn list_scenarios(root: &Path) -> LoadResult<Vec<ScenarioEntry>> {
    let entries = std::fs::read_dir(root)
        .map_err(|e| anyhow::anyhow!("Failed to read scenario root {}: {}", root.display(), e))?;

    let mut scenarios = Vec::new();
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        let header = path.join(ContentFactory::SCENARIO_FILE);
        if !header.is_file() {
            continue;
        }
        match ScenarioLoader::load(&header) {
            Ok(spec) => scenarios.push(ScenarioEntry {
                key: entry.file_name().to_string_lossy().into_owned(),
                title: spec.title,
                path,
            }),
            Err(error) => {
                tracing::warn!(path = %header.display(), %error, "skipping unreadable scenario");
            }
        }
    }
    scenarios.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_header(root: &Path, key: &str, title: &str) {
        let dir = root.join(key);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(ContentFactory::SCENARIO_FILE),
            format!(
                r#"(title: "{title}", start_room: "Hall", killer: (suspect: "A", weapon: "B"))"#
            ),
        )
        .unwrap();
    }

    #[test]
    fn lists_scenarios_by_key() {
        let root = tempfile::tempdir().unwrap();
        write_header(root.path(), "villa", "The Villa");
        write_header(root.path(), "abbey", "The Abbey");
        std::fs::create_dir(root.path().join("empty")).unwrap();
        std::fs::create_dir(root.path().join("broken")).unwrap();
        std::fs::write(root.path().join("broken/scenario.ron"), "(").unwrap();

        let scenarios = list_scenarios(root.path()).unwrap();

        let titles: Vec<_> = scenarios.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["The Abbey", "The Villa"]);
        assert_eq!(scenarios[0].key, "abbey");
        assert_eq!(scenarios[0].factory().data_dir(), root.path().join("abbey"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(list_scenarios(&root.path().join("nope")).is_err());
    }
}
