//! Repository contract for persisted sessions.

use game_core::GameSnapshot;

use super::Result;
use super::types::SaveSummary;

/// Repository for session snapshots, keyed by session id.
///
/// Session ids are creation timestamps that sort lexicographically, so the
/// most recent save is the greatest id. Saving under an existing id replaces
/// the previous snapshot.
pub trait SaveRepository: Send + Sync {
    /// Save a snapshot under its session id and return that id.
    fn save(&self, snapshot: &GameSnapshot) -> Result<String>;

    /// Load a snapshot by session id.
    fn load(&self, id: &str) -> Result<Option<GameSnapshot>>;

    /// Check if a save exists
    fn exists(&self, id: &str) -> bool;

    /// Delete a save. Deleting a missing id is not an error.
    fn delete(&self, id: &str) -> Result<()>;

    /// List every readable save, most recent first.
    fn list(&self) -> Result<Vec<SaveSummary>>;
}
