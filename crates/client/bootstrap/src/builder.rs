//! Builds game sessions and the save service used by front-ends.
use anyhow::{Context, Result};

use game_content::{ScenarioEntry, list_scenarios};
use game_core::{GameSnapshot, GameState, SessionParams, WorldBuilder};
use runtime::SaveService;

use crate::config::ClientConfig;
use crate::session::new_session_id;

/// Assembles new and resumed sessions from a [`ClientConfig`].
pub struct SessionBuilder {
    config: ClientConfig,
}

impl SessionBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Scenarios installed under the configured root.
    pub fn scenarios(&self) -> Result<Vec<ScenarioEntry>> {
        list_scenarios(&self.config.scenario_root).with_context(|| {
            format!(
                "no scenarios available under {}",
                self.config.scenario_root.display()
            )
        })
    }

    /// Open the save store: on disk when persistence is enabled, in memory
    /// otherwise.
    pub fn save_service(&self) -> Result<SaveService> {
        if !self.config.enable_persistence {
            tracing::info!("Persistence disabled, keeping saves in memory");
            return Ok(SaveService::in_memory());
        }

        let dir = self.config.save_dir();
        tracing::info!(path = %dir.display(), "Using save directory");
        SaveService::new_file_based(&dir)
            .with_context(|| format!("failed to open save directory {}", dir.display()))
    }

    /// Load `scenario` and build a fresh session for `player_name`.
    pub fn new_session(&self, scenario: &ScenarioEntry, player_name: &str) -> Result<GameState> {
        let factory = scenario.factory();
        let spec = factory.load_scenario()?;
        let config = factory.load_config()?;

        let params = SessionParams {
            session_id: new_session_id(),
            player_name: player_name.to_owned(),
            game_seed: self.config.game_seed.unwrap_or_else(rand::random),
        };
        tracing::info!(
            scenario = %scenario.key,
            session = %params.session_id,
            seed = params.game_seed,
            "Starting new session"
        );

        WorldBuilder::new(&spec)
            .config(config)
            .build(params)
            .with_context(|| format!("scenario '{}' is inconsistent", scenario.key))
    }

    /// Restore the most recent unfinished session, if any.
    pub fn resumable(&self, saves: &SaveService) -> Result<Option<GameSnapshot>> {
        Ok(saves.latest_resumable()?)
    }

    pub fn resume(&self, snapshot: GameSnapshot) -> Result<GameState> {
        let id = snapshot.session_id().to_owned();
        let state = snapshot.restore()?;
        tracing::info!(session = %id, "Resuming session");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn shipped_scenarios() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data/scenarios")
    }

    fn builder(saves: Option<&Path>) -> SessionBuilder {
        SessionBuilder::new(ClientConfig {
            scenario_root: shipped_scenarios(),
            enable_persistence: saves.is_some(),
            save_data_dir: saves.map(Path::to_path_buf),
            game_seed: Some(7),
            log_dir: None,
        })
    }

    #[test]
    fn new_session_uses_player_and_seed() {
        let builder = builder(None);
        let scenarios = builder.scenarios().unwrap();
        let manor = scenarios.iter().find(|s| s.key == "manor").unwrap();

        let state = builder.new_session(manor, "Holmes").unwrap();

        assert_eq!(state.progress.player_name, "Holmes");
        assert_eq!(state.progress.session_id.len(), 17);
        assert!(!state.is_ended());

        let again = builder.new_session(manor, "Holmes").unwrap();
        assert_eq!(state.case_file, again.case_file);
    }

    #[test]
    fn saved_session_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let builder = builder(Some(dir.path()));
        let manor = builder.scenarios().unwrap().remove(0);
        let state = builder.new_session(&manor, "Marple").unwrap();

        let saves = builder.save_service().unwrap();
        saves.save(&GameSnapshot::capture(&state)).unwrap();

        let snapshot = builder.resumable(&saves).unwrap().unwrap();
        let resumed = builder.resume(snapshot).unwrap();
        assert_eq!(resumed, state);
    }

    #[test]
    fn disabled_persistence_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = builder(Some(dir.path())).config().clone();
        config.enable_persistence = false;
        let builder = SessionBuilder::new(config);
        let manor = builder.scenarios().unwrap().remove(0);
        let state = builder.new_session(&manor, "Poirot").unwrap();

        let saves = builder.save_service().unwrap();
        saves.save(&GameSnapshot::capture(&state)).unwrap();

        assert_eq!(saves.list().unwrap().len(), 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_scenario_root_is_reported() {
        let builder = SessionBuilder::new(ClientConfig {
            scenario_root: PathBuf::from("/nonexistent/scenarios"),
            ..ClientConfig::default()
        });
        let err = builder.scenarios().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenarios"));
    }
}
