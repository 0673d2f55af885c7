//! Authoritative session state.
//!
//! This module owns the room graph, the entity arenas, the clock, the
//! inventory, the case file and the player's progress. Outside the crate the
//! state is read-only; every change goes through [`crate::engine::GameEngine`].
mod case_file;
mod clock;
mod common;
mod entities;
mod inventory;
mod progress;
mod text;
mod world;

pub use case_file::{CaseFile, CaseFileError, Verdict};
pub use clock::{ClockTriggers, GameClock};
pub use common::{GameTime, ItemId, NpcId, RoomId};
pub use entities::{
    Capabilities, EntitiesState, ItemKind, ItemLocation, ItemState, NpcRole, NpcState,
    OfficerProfile, SpecialDescription, SuspectProfile,
};
pub use inventory::Inventory;
pub use progress::{MemoEntry, ProgressState};
pub use text::{ASK_NAME_TOKEN, PRINT_NAME_TOKEN, TextBlock};
pub use world::{Room, WorldGraph};

use crate::config::GameConfig;
use crate::env::Sentences;

/// Complete state of one investigation session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Seed for flavor randomness. Set once when the session is created.
    pub game_seed: u64,
    /// Number of actions executed so far.
    pub nonce: u64,
    pub config: GameConfig,
    pub world: WorldGraph,
    pub entities: EntitiesState,
    pub case_file: CaseFile,
    pub clock: GameClock,
    pub inventory: Inventory,
    pub progress: ProgressState,
    pub sentences: Sentences,
    pub help: TextBlock,
}

impl GameState {
    pub fn current_room(&self) -> RoomId {
        self.progress.current_room
    }

    pub fn is_ended(&self) -> bool {
        self.progress.is_ended()
    }

    /// Appends `text` to the memo, stamped with the current time.
    pub fn record_memo(&mut self, text: TextBlock) {
        let at = self.clock.now();
        self.progress.record(at, text);
    }

    /// True when the character should be listed among the room's occupants.
    pub fn is_visible(&self, npc: &NpcState) -> bool {
        !npc.is_scheduled() || self.clock.has_arrived()
    }

    /// Characters the player can see in the current room.
    pub fn visible_npcs(&self) -> impl Iterator<Item = &NpcState> {
        self.entities
            .npcs_in(self.current_room())
            .filter(|npc| self.is_visible(npc))
    }

    pub fn officer_present(&self) -> bool {
        self.visible_npcs().any(|npc| npc.officer().is_some())
    }
}
