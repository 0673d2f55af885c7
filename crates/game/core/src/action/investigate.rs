//! Actions aimed at items and at a suspect's appearance.

use crate::state::{GameState, ItemId, ItemLocation, NpcRole, TextBlock};

use super::{ActionError, ActionTransition, Target, item_here, npc_here};

/// First look at a clue item or a suspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserveAction {
    pub target: Target,
}

impl ObserveAction {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl ActionTransition for ObserveAction {
    type Error = ActionError;
    type Result = TextBlock;

    fn cost(&self, state: &GameState) -> u32 {
        let extra = match self.target {
            Target::Item(id) => state
                .entities
                .item(id)
                .map_or(0, |item| item.extra_observe_minutes),
            Target::Npc(id) => state
                .entities
                .npc(id)
                .and_then(|npc| npc.suspect())
                .map_or(0, |suspect| suspect.extra_observe_minutes),
        };
        state.config.durations.observe + extra
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        match self.target {
            Target::Item(id) => {
                let item = item_here(state, id)?;
                if item.is_weapon() {
                    return Err(ActionError::NotObservable(self.target));
                }
                if item.observed {
                    return Err(ActionError::AlreadyObserved(self.target));
                }
            }
            Target::Npc(id) => {
                let suspect = npc_here(state, id)?
                    .suspect()
                    .ok_or(ActionError::NotObservable(self.target))?;
                if suspect.observed {
                    return Err(ActionError::AlreadyObserved(self.target));
                }
            }
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let (name, text) = match self.target {
            Target::Item(id) => {
                if !state.entities.mark_item_observed(id) {
                    return Err(ActionError::AlreadyObserved(self.target));
                }
                let item = item_here(state, id)?;
                (item.name.clone(), item.description.clone())
            }
            Target::Npc(id) => {
                if !state.entities.mark_suspect_observed(id) {
                    return Err(ActionError::AlreadyObserved(self.target));
                }
                let npc = npc_here(state, id)?;
                let description = match &npc.role {
                    NpcRole::Suspect(profile) => profile.description.clone(),
                    _ => TextBlock::default(),
                };
                (npc.name.clone(), description)
            }
        };
        tracing::debug!(target = %self.target, %name, "observed");
        state.record_memo(text.with_heading(format!("{name} :")));
        Ok(text)
    }
}

/// Closer look at an item, unlocked by its suspect's confidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialObserveAction {
    pub item: ItemId,
}

impl SpecialObserveAction {
    pub fn new(item: ItemId) -> Self {
        Self { item }
    }
}

impl ActionTransition for SpecialObserveAction {
    type Error = ActionError;
    type Result = TextBlock;

    fn cost(&self, state: &GameState) -> u32 {
        state.config.durations.special_observe
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let item = item_here(state, self.item)?;
        let special = item
            .special
            .as_ref()
            .ok_or(ActionError::NoSpecialDescription(self.item))?;
        if special.observed {
            return Err(ActionError::AlreadySpecialObserved(self.item));
        }
        if !state.entities.is_special_unlocked(self.item) {
            return Err(ActionError::SpecialLocked(self.item));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        if !state.entities.mark_special_observed(self.item) {
            return Err(ActionError::AlreadySpecialObserved(self.item));
        }
        let item = item_here(state, self.item)?;
        let name = item.name.clone();
        let text = item
            .special
            .as_ref()
            .map(|special| special.text.clone())
            .unwrap_or_default();
        tracing::debug!(item = %self.item, %name, "special description observed");
        state.record_memo(text.with_heading(format!("{name} :")));
        Ok(text)
    }
}

/// Takes a weapon. The player reads its description on the way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectAction {
    pub item: ItemId,
}

impl CollectAction {
    pub fn new(item: ItemId) -> Self {
        Self { item }
    }
}

impl ActionTransition for CollectAction {
    type Error = ActionError;
    type Result = TextBlock;

    fn cost(&self, state: &GameState) -> u32 {
        state.config.durations.collect
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.inventory.contains(self.item) {
            return Err(ActionError::AlreadyCollected(self.item));
        }
        let item = item_here(state, self.item)?;
        if !item.is_weapon() {
            return Err(ActionError::NotCollectible(self.item));
        }
        if !state.entities.requirement_met(self.item) {
            return Err(ActionError::RequirementNotMet(self.item));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let item = item_here(state, self.item)?;
        let name = item.name.clone();
        let text = item.description.clone();

        if !state.entities.take_weapon(self.item) {
            return Err(ActionError::AlreadyCollected(self.item));
        }
        state.inventory.insert(self.item);
        state.entities.mark_item_observed(self.item);

        tracing::debug!(item = %self.item, %name, "collected");
        state.record_memo(text.with_heading(format!("{name} :")));
        Ok(text)
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let carried = state
            .entities
            .item(self.item)
            .is_some_and(|item| item.location == ItemLocation::Carried);
        if !carried || !state.inventory.contains(self.item) {
            return Err(ActionError::InventoryDesync(self.item));
        }
        Ok(())
    }
}
