use crate::error::NeverError;
use crate::state::{GameState, RoomId};

use super::ActionTransition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    Moved { from: RoomId, to: RoomId },
    /// The destination was not a neighbor; nothing happened.
    Stayed,
}

/// Walks to a neighboring room.
///
/// A destination that is not a declared neighbor of the current room leaves
/// the player where they are and costs nothing. This never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub destination: RoomId,
}

impl MoveAction {
    pub fn new(destination: RoomId) -> Self {
        Self { destination }
    }

    fn is_legal(&self, state: &GameState) -> bool {
        state
            .world
            .is_neighbor(state.current_room(), self.destination)
    }
}

impl ActionTransition for MoveAction {
    type Error = NeverError;
    type Result = MoveOutcome;

    fn cost(&self, state: &GameState) -> u32 {
        if self.is_legal(state) {
            state.config.durations.movement
        } else {
            0
        }
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let from = state.current_room();
        if !self.is_legal(state) {
            tracing::warn!(%from, to = %self.destination, "ignored move to a non-neighbor");
            return Ok(MoveOutcome::Stayed);
        }
        state.progress.current_room = self.destination;
        tracing::debug!(%from, to = %self.destination, "moved");
        Ok(MoveOutcome::Moved {
            from,
            to: self.destination,
        })
    }
}
