//! Conversations with characters.

use crate::state::{Capabilities, GameState, NpcId, TextBlock};

use super::{ActionError, ActionTransition, npc_here};

/// Hears a character's statement once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TalkAction {
    pub npc: NpcId,
}

impl TalkAction {
    pub fn new(npc: NpcId) -> Self {
        Self { npc }
    }
}

impl ActionTransition for TalkAction {
    type Error = ActionError;
    type Result = TextBlock;

    fn cost(&self, state: &GameState) -> u32 {
        let extra = state
            .entities
            .npc(self.npc)
            .and_then(|npc| npc.suspect())
            .map_or(0, |suspect| suspect.extra_talk_minutes);
        state.config.durations.talk + extra
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let npc = npc_here(state, self.npc)?;
        if !npc.capabilities().contains(Capabilities::TALKABLE) {
            return Err(ActionError::NotTalkable(self.npc));
        }
        if npc.talked {
            return Err(ActionError::AlreadyTalked(self.npc));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        if !state.entities.mark_talked(self.npc) {
            return Err(ActionError::AlreadyTalked(self.npc));
        }
        let npc = npc_here(state, self.npc)?;
        let name = npc.name.clone();
        let text = npc.dialogue.clone();
        tracing::debug!(npc = %self.npc, %name, "talked");
        state.record_memo(text.with_heading(format!("{name} :")));
        Ok(text)
    }
}

/// A suspect's confidence, unlocked by showing them the right weapon.
///
/// Confiding also unlocks every item whose special description names this
/// suspect as initiator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialTalkAction {
    pub npc: NpcId,
}

impl SpecialTalkAction {
    pub fn new(npc: NpcId) -> Self {
        Self { npc }
    }
}

impl ActionTransition for SpecialTalkAction {
    type Error = ActionError;
    type Result = TextBlock;

    fn cost(&self, state: &GameState) -> u32 {
        state.config.durations.special_talk
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let suspect = npc_here(state, self.npc)?
            .suspect()
            .ok_or(ActionError::NotASuspect(self.npc))?;
        let object = suspect
            .special_object
            .ok_or(ActionError::NoConfidence(self.npc))?;
        if suspect.special_talked {
            return Err(ActionError::AlreadySpecialTalked(self.npc));
        }
        if !state.inventory.contains(object) {
            return Err(ActionError::SpecialObjectMissing {
                npc: self.npc,
                object,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        if !state.entities.mark_special_talked(self.npc) {
            return Err(ActionError::AlreadySpecialTalked(self.npc));
        }
        let npc = npc_here(state, self.npc)?;
        let name = npc.name.clone();
        let text = npc
            .suspect()
            .map(|suspect| suspect.special_dialogue.clone())
            .unwrap_or_default();
        tracing::debug!(npc = %self.npc, %name, "confided");
        state.record_memo(text.with_heading(format!("{name} :")));
        Ok(text)
    }
}
