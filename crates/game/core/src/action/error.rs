//! Action validation errors.
//!
//! Every rejection here leaves the state untouched. The turn loop treats
//! `Validation` errors as no-ops; only the case file and inventory checks can
//! escalate.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CaseFileError, ItemId, NpcId, RoomId};

use super::Target;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("{0} does not exist")]
    UnknownTarget(Target),

    #[error("{target} is not in room {room}")]
    NotPresent { target: Target, room: RoomId },

    #[error("{0} cannot be observed")]
    NotObservable(Target),

    #[error("{0} has already been observed")]
    AlreadyObserved(Target),

    #[error("item {0} has no hidden detail")]
    NoSpecialDescription(ItemId),

    #[error("item {0} is still locked")]
    SpecialLocked(ItemId),

    #[error("item {0} has already been looked at closely")]
    AlreadySpecialObserved(ItemId),

    #[error("item {0} cannot be collected")]
    NotCollectible(ItemId),

    #[error("item {0} is already carried")]
    AlreadyCollected(ItemId),

    #[error("requirement of item {0} has not been observed")]
    RequirementNotMet(ItemId),

    #[error("npc {0} has nothing to say")]
    NotTalkable(NpcId),

    #[error("npc {0} has already talked")]
    AlreadyTalked(NpcId),

    #[error("npc {0} has nothing to confide")]
    NoConfidence(NpcId),

    #[error("npc {npc} wants to see item {object} first")]
    SpecialObjectMissing { npc: NpcId, object: ItemId },

    #[error("npc {0} has already confided")]
    AlreadySpecialTalked(NpcId),

    #[error("npc {0} is not a suspect")]
    NotASuspect(NpcId),

    #[error("item {0} is not a weapon")]
    NotAWeapon(ItemId),

    #[error("item {0} is carried but missing from the inventory")]
    InventoryDesync(ItemId),

    #[error(transparent)]
    CaseFile(#[from] CaseFileError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InventoryDesync(_) => ErrorSeverity::Internal,
            Self::CaseFile(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTarget(_) => "ACTION_UNKNOWN_TARGET",
            Self::NotPresent { .. } => "ACTION_NOT_PRESENT",
            Self::NotObservable(_) => "ACTION_NOT_OBSERVABLE",
            Self::AlreadyObserved(_) => "ACTION_ALREADY_OBSERVED",
            Self::NoSpecialDescription(_) => "ACTION_NO_SPECIAL_DESCRIPTION",
            Self::SpecialLocked(_) => "ACTION_SPECIAL_LOCKED",
            Self::AlreadySpecialObserved(_) => "ACTION_ALREADY_SPECIAL_OBSERVED",
            Self::NotCollectible(_) => "ACTION_NOT_COLLECTIBLE",
            Self::AlreadyCollected(_) => "ACTION_ALREADY_COLLECTED",
            Self::RequirementNotMet(_) => "ACTION_REQUIREMENT_NOT_MET",
            Self::NotTalkable(_) => "ACTION_NOT_TALKABLE",
            Self::AlreadyTalked(_) => "ACTION_ALREADY_TALKED",
            Self::NoConfidence(_) => "ACTION_NO_CONFIDENCE",
            Self::SpecialObjectMissing { .. } => "ACTION_SPECIAL_OBJECT_MISSING",
            Self::AlreadySpecialTalked(_) => "ACTION_ALREADY_SPECIAL_TALKED",
            Self::NotASuspect(_) => "ACTION_NOT_A_SUSPECT",
            Self::NotAWeapon(_) => "ACTION_NOT_A_WEAPON",
            Self::InventoryDesync(_) => "ACTION_INVENTORY_DESYNC",
            Self::CaseFile(err) => err.error_code(),
        }
    }
}
