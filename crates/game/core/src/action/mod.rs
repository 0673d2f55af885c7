//! Player actions and the menu resolver.
//!
//! # Module Structure
//!
//! - `kind`: data-only descriptors (`ActionKind`, `Target`, `TurnAction`, `MenuEntry`)
//! - `available`: pure resolver computing the menus of a turn
//! - `investigate`: Observe, SpecialObserve, Collect
//! - `dialogue`: Talk, SpecialTalk
//! - `accuse`: the final accusation
//! - `movement`: ChangeRoom
//! - `error`: `ActionError`

pub mod available;
pub mod error;

mod accuse;
mod dialogue;
mod investigate;
mod kind;
mod movement;

pub use accuse::{AccusationOutcome, AccuseAction};
pub use available::{accusation_candidates, entity_actions, legal_actions, turn_menu};
pub use dialogue::{SpecialTalkAction, TalkAction};
pub use error::ActionError;
pub use investigate::{CollectAction, ObserveAction, SpecialObserveAction};
pub use kind::{ActionKind, MenuEntry, Target, TurnAction};
pub use movement::{MoveAction, MoveOutcome};

use crate::state::{GameState, ItemId, ItemLocation, ItemState, NpcId, NpcState};

/// Defines how a concrete action mutates the session.
///
/// The engine runs `pre_validate`, `apply` and `post_validate` in order and
/// charges [`cost`](Self::cost) to the clock only when all three succeed.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Minutes this action takes, computed on the state **before** mutation.
    fn cost(&self, state: &GameState) -> u32;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Executable action with its resolved target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Observe(ObserveAction),
    SpecialObserve(SpecialObserveAction),
    Collect(CollectAction),
    Talk(TalkAction),
    SpecialTalk(SpecialTalkAction),
    Accuse(AccuseAction),
    Move(MoveAction),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Observe(_) => ActionKind::Observe,
            Self::SpecialObserve(_) => ActionKind::SpecialObserve,
            Self::Collect(_) => ActionKind::Collect,
            Self::Talk(_) => ActionKind::Talk,
            Self::SpecialTalk(_) => ActionKind::SpecialTalk,
            Self::Accuse(_) => ActionKind::Accuse,
            Self::Move(_) => ActionKind::ChangeRoom,
        }
    }

    /// Builds the executable action for a descriptor aimed at one entity.
    ///
    /// Returns `None` for commands and for `Accuse`, which need further input.
    pub fn from_descriptor(descriptor: TurnAction) -> Option<Self> {
        let target = descriptor.target?;
        let action = match (descriptor.kind, target) {
            (ActionKind::Observe, target) => Self::Observe(ObserveAction::new(target)),
            (ActionKind::SpecialObserve, Target::Item(id)) => {
                Self::SpecialObserve(SpecialObserveAction::new(id))
            }
            (ActionKind::Collect, Target::Item(id)) => Self::Collect(CollectAction::new(id)),
            (ActionKind::Talk, Target::Npc(id)) => Self::Talk(TalkAction::new(id)),
            (ActionKind::SpecialTalk, Target::Npc(id)) => {
                Self::SpecialTalk(SpecialTalkAction::new(id))
            }
            _ => return None,
        };
        Some(action)
    }
}

/// Item lying in the current room.
pub(crate) fn item_here(state: &GameState, id: ItemId) -> Result<&ItemState, ActionError> {
    let target = Target::Item(id);
    let item = state
        .entities
        .item(id)
        .ok_or(ActionError::UnknownTarget(target))?;
    let room = state.current_room();
    if item.location != ItemLocation::Room(room) {
        return Err(ActionError::NotPresent { target, room });
    }
    Ok(item)
}

/// Character visible in the current room.
pub(crate) fn npc_here(state: &GameState, id: NpcId) -> Result<&NpcState, ActionError> {
    let target = Target::Npc(id);
    let npc = state
        .entities
        .npc(id)
        .ok_or(ActionError::UnknownTarget(target))?;
    let room = state.current_room();
    if npc.room != room || !state.is_visible(npc) {
        return Err(ActionError::NotPresent { target, room });
    }
    Ok(npc)
}
