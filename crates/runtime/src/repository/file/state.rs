//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::GameSnapshot;

use crate::repository::{
    RepositoryError, Result, SaveEnvelope, SaveRepository, SaveSummary,
};

/// File-based implementation of SaveRepository.
///
/// Stores each session as `{session_id}.sav`, a bincode [`SaveEnvelope`].
/// Writes go to a temporary file first and are moved into place with a
/// rename, so a crash never leaves a half-written save behind.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    pub const EXTENSION: &'static str = "sav";

    /// Create a new file-based save repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a save file.
    fn save_path(&self, id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", id, Self::EXTENSION))
    }

    fn read_envelope(path: &Path) -> Result<SaveEnvelope> {
        let bytes = fs::read(path).map_err(RepositoryError::Io)?;
        bincode::deserialize(&bytes).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, snapshot: &GameSnapshot) -> Result<String> {
        let id = snapshot.session_id().to_owned();
        let path = self.save_path(&id);
        let temp_path = path.with_extension("sav.tmp");

        let envelope = SaveEnvelope::seal(snapshot)?;
        let bytes = bincode::serialize(&envelope)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved session[{}] to {}", id, path.display());

        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Option<GameSnapshot>> {
        let path = self.save_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let snapshot = Self::read_envelope(&path)?.open()?;

        tracing::debug!("Loaded session[{}] from {}", id, path.display());

        Ok(Some(snapshot))
    }

    fn exists(&self, id: &str) -> bool {
        self.save_path(id).exists()
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.save_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted session[{}]", id);
        }

        Ok(())
    }

    fn list(&self) -> Result<Vec<SaveSummary>> {
        let mut saves = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.extension().is_none_or(|ext| ext != Self::EXTENSION) {
                continue;
            }

            match Self::read_envelope(&path).and_then(|envelope| {
                envelope.verify()?;
                Ok(envelope.summary())
            }) {
                Ok(summary) => saves.push(summary),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable save");
                }
            }
        }

        saves.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        Ok(saves)
    }
}
