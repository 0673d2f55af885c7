//! Versioned, self-contained copy of a session for persistence.
//!
//! The snapshot mirrors [`GameState`] in full: room graph, entities, case
//! file, clock, inventory and progress. Storage format and keying are left to
//! the caller.

use crate::error::{ErrorSeverity, GameError};
use crate::state::GameState;

/// Bumped whenever the layout of [`GameState`] changes incompatibly.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion { .. } => "SNAPSHOT_UNSUPPORTED_VERSION",
        }
    }
}

// ============================================================================
// Snapshot Structure
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub version: u32,
    pub state: GameState,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            state: state.clone(),
        }
    }

    /// Consumes the snapshot and returns the session it holds.
    pub fn restore(self) -> Result<GameState, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(self.state)
    }

    pub fn session_id(&self) -> &str {
        &self.state.progress.session_id
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::fixtures::manor_state;

    #[test]
    fn capture_then_restore_returns_the_same_session() {
        let mut state = manor_state();
        state.clock.advance(45);
        let snapshot = GameSnapshot::capture(&state);
        assert_eq!(snapshot.session_id(), "2026101808000000");
        assert_eq!(snapshot.restore().unwrap(), state);
    }

    #[test]
    fn future_versions_are_rejected() {
        let snapshot = GameSnapshot {
            version: SNAPSHOT_VERSION + 1,
            ..GameSnapshot::capture(&manor_state())
        };
        let err = snapshot.restore().unwrap_err();
        assert_eq!(err.error_code(), "SNAPSHOT_UNSUPPORTED_VERSION");
    }
}
