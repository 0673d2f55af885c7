//! Save service: the gateway the client persists sessions through.

use std::path::Path;

use game_core::{GameSnapshot, SNAPSHOT_VERSION};

use crate::repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, Result, SaveRepository,
    SaveSummary,
};

/// Facade over a [`SaveRepository`].
///
/// Adds the policies the client needs on top of raw storage: listing in
/// recency order and finding the most recent session that can be resumed.
pub struct SaveService {
    repo: Box<dyn SaveRepository>,
}

impl SaveService {
    /// Create a new save service with a custom repository.
    pub fn new(repo: Box<dyn SaveRepository>) -> Self {
        Self { repo }
    }

    /// Create a file-based save service.
    pub fn new_file_based(base_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Box::new(FileSaveRepository::new(base_dir)?)))
    }

    /// Create a service that keeps saves for the lifetime of the process only.
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemorySaveRepository::new()))
    }

    /// Persist a snapshot. Returns the session id it is stored under.
    pub fn save(&self, snapshot: &GameSnapshot) -> Result<String> {
        let id = self.repo.save(snapshot)?;
        tracing::info!(session = %id, ended = snapshot.is_ended(), "Saved snapshot");
        Ok(id)
    }

    pub fn load(&self, id: &str) -> Result<GameSnapshot> {
        self.repo
            .load(id)?
            .ok_or_else(|| RepositoryError::NotFound(id.to_owned()))
    }

    /// Every readable save, most recent first.
    pub fn list(&self) -> Result<Vec<SaveSummary>> {
        self.repo.list()
    }

    /// The most recent save that has not ended and that this build can restore.
    ///
    /// Saves that fail to load are skipped with a warning.
    pub fn latest_resumable(&self) -> Result<Option<GameSnapshot>> {
        for summary in self.repo.list()?.into_iter().filter(|s| !s.ended) {
            match self.repo.load(&summary.id) {
                Ok(Some(snapshot)) if snapshot.version == SNAPSHOT_VERSION => {
                    return Ok(Some(snapshot));
                }
                Ok(Some(snapshot)) => {
                    tracing::warn!(
                        session = %summary.id,
                        version = snapshot.version,
                        "Skipping save from another snapshot version"
                    );
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(session = %summary.id, %error, "Skipping unreadable save");
                }
            }
        }
        Ok(None)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures::{ended_snapshot, sample_snapshot};

    #[test]
    fn latest_resumable_skips_ended_sessions() {
        let service = SaveService::in_memory();
        service.save(&sample_snapshot("2026101808000000")).unwrap();
        service.save(&sample_snapshot("2026101809000000")).unwrap();
        service.save(&ended_snapshot("2026101810000000")).unwrap();

        let latest = service.latest_resumable().unwrap().unwrap();
        assert_eq!(latest.session_id(), "2026101809000000");
    }

    #[test]
    fn nothing_to_resume_when_every_session_ended() {
        let service = SaveService::in_memory();
        service.save(&ended_snapshot("s1")).unwrap();
        assert_eq!(service.latest_resumable().unwrap(), None);
    }

    #[test]
    fn other_snapshot_versions_are_not_resumed() {
        let service = SaveService::in_memory();
        service.save(&sample_snapshot("s1")).unwrap();
        let mut newer = sample_snapshot("s2");
        newer.version = SNAPSHOT_VERSION + 1;
        service.save(&newer).unwrap();

        assert_eq!(
            service.latest_resumable().unwrap().map(|s| s.session_id().to_owned()),
            Some("s1".to_owned())
        );
    }

    #[test]
    fn load_missing_is_not_found() {
        let service = SaveService::in_memory();
        assert!(matches!(
            service.load("nope"),
            Err(RepositoryError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn file_based_service_resumes_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        SaveService::new_file_based(dir.path())
            .unwrap()
            .save(&sample_snapshot("s1"))
            .unwrap();

        let reopened = SaveService::new_file_based(dir.path()).unwrap();
        assert_eq!(
            reopened.latest_resumable().unwrap(),
            Some(sample_snapshot("s1"))
        );
    }
}
