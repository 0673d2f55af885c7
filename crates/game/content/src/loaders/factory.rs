//! Content factory for assembling a scenario from its directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, ScenarioSpec};

use crate::loaders::{ConfigLoader, LoadResult, RoomLoader, ScenarioLoader};

/// Content factory that loads one scenario from a data directory.
///
/// # Directory Structure
///
/// ```text
/// scenario_dir/
/// ├── scenario.ron
/// ├── config.toml      (optional)
/// └── rooms/
///     ├── 01_hall.ron
///     └── 02_study.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const SCENARIO_FILE: &'static str = "scenario.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ROOMS_DIR: &'static str = "rooms";

    /// Creates a new content factory pointing to a scenario directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the game configuration from `config.toml`, or the defaults when
    /// the scenario ships none.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `scenario.ron` and append every room of `rooms/`.
    pub fn load_scenario(&self) -> LoadResult<ScenarioSpec> {
        let mut spec = ScenarioLoader::load(&self.data_dir.join(Self::SCENARIO_FILE))?;
        let rooms = RoomLoader::load_dir(&self.data_dir.join(Self::ROOMS_DIR))?;
        spec.rooms.extend(rooms);

        tracing::debug!(
            title = %spec.title,
            rooms = spec.rooms.len(),
            "scenario loaded"
        );
        Ok(spec)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{SessionParams, WorldBuilder};

    fn shipped_manor() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data/scenarios/manor")
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn rooms_from_files_follow_inline_rooms() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ContentFactory::SCENARIO_FILE),
            r#"(
                title: "Two rooms",
                start_room: "Hall",
                killer: (suspect: "Cook", weapon: "Pan"),
                rooms: [(name: "Hall", description: "Bare.", neighbors: [(name: "Kitchen")])],
            )"#,
        )
        .unwrap();
        std::fs::create_dir(dir.path().join(ContentFactory::ROOMS_DIR)).unwrap();
        std::fs::write(
            dir.path().join("rooms/kitchen.ron"),
            r#"(
                name: "Kitchen",
                description: "Warm.",
                neighbors: [(name: "Hall")],
                items: [(name: "Pan", description: "Dented.", weapon: Some((requirement: None)))],
                npcs: [
                    Suspect(name: "Cook", dialogue: "Not me.", description: "Nervous."),
                    Officer(
                        name: "Sergeant",
                        introduction: "Hello.",
                        right_answer: "Yes.",
                        wrong_answer: "No.",
                    ),
                ],
            )"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let spec = factory.load_scenario().unwrap();
        let names: Vec<_> = spec.rooms.iter().map(|room| room.name.as_str()).collect();
        assert_eq!(names, ["Hall", "Kitchen"]);
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());

        let state = WorldBuilder::new(&spec)
            .build(SessionParams::default())
            .unwrap();
        assert_eq!(state.world.len(), 2);
    }

    #[test]
    fn missing_scenario_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_scenario().unwrap_err();
        assert!(err.to_string().contains("scenario.ron"));
    }

    #[test]
    fn shipped_manor_builds() {
        let factory = ContentFactory::new(shipped_manor());
        let spec = factory.load_scenario().unwrap();
        let config = factory.load_config().unwrap();

        let state = WorldBuilder::new(&spec)
            .config(config)
            .build(SessionParams::default())
            .unwrap();

        assert!(state.case_file.is_sealed());
        assert!(state.entities.officer().is_some());
        assert!(state.entities.scheduled_character().is_some());
        assert_eq!(
            state.world.reachable_from(state.current_room()).len(),
            state.world.len()
        );
    }
}
