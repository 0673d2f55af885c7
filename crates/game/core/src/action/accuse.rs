use crate::state::{GameState, ItemId, NpcId, TextBlock, Verdict};

use super::{ActionError, ActionTransition};

/// Result of the single, irrevocable accusation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccusationOutcome {
    pub verdict: Verdict,
    /// The officer's answer, already written to the memo.
    pub response: TextBlock,
}

/// Names a suspect and a weapon. Ends the session whatever the verdict.
///
/// Candidates are every suspect and every weapon in the world, so the
/// accusation does not require the player to have met them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccuseAction {
    pub suspect: NpcId,
    pub weapon: ItemId,
}

impl AccuseAction {
    pub fn new(suspect: NpcId, weapon: ItemId) -> Self {
        Self { suspect, weapon }
    }
}

impl ActionTransition for AccuseAction {
    type Error = ActionError;
    type Result = AccusationOutcome;

    fn cost(&self, _state: &GameState) -> u32 {
        0
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if !state
            .entities
            .npc(self.suspect)
            .is_some_and(|npc| npc.is_suspect())
        {
            return Err(ActionError::NotASuspect(self.suspect));
        }
        if !state
            .entities
            .item(self.weapon)
            .is_some_and(|item| item.is_weapon())
        {
            return Err(ActionError::NotAWeapon(self.weapon));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let verdict = state.case_file.accuse(self.suspect, self.weapon)?;
        state.progress.conclude(verdict);

        let response = state
            .entities
            .officer()
            .and_then(|npc| npc.officer())
            .map(|officer| match verdict {
                Verdict::Correct => officer.right_answer.clone(),
                Verdict::Wrong => officer.wrong_answer.clone(),
            })
            .unwrap_or_default();
        state.record_memo(response.clone());

        tracing::info!(
            suspect = %self.suspect,
            weapon = %self.weapon,
            correct = verdict.is_correct(),
            "accusation made"
        );
        Ok(AccusationOutcome { verdict, response })
    }
}
