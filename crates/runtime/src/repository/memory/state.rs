//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::GameSnapshot;

use crate::repository::{RepositoryError, Result, SaveRepository, SaveSummary};

/// In-memory implementation of SaveRepository.
///
/// Stores snapshots indexed by session id. Nothing survives the process.
pub struct InMemorySaveRepository {
    saves: RwLock<HashMap<String, GameSnapshot>>,
}

impl InMemorySaveRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            saves: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, snapshot: &GameSnapshot) -> Result<String> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let id = snapshot.session_id().to_owned();
        saves.insert(id.clone(), snapshot.clone());
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Option<GameSnapshot>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(id).cloned())
    }

    fn exists(&self, id: &str) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<SaveSummary>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut summaries: Vec<SaveSummary> = saves
            .values()
            .map(|snapshot| SaveSummary {
                id: snapshot.session_id().to_owned(),
                ended: snapshot.is_ended(),
            })
            .collect();
        summaries.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        Ok(summaries)
    }
}
