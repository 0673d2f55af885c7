//! Tagged action descriptors offered to the player.

use crate::env::ActionLabels;
use crate::state::{ItemId, NpcId};

/// Every kind of choice a turn can resolve to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    // ========================================================================
    // Entity actions
    // ========================================================================
    Observe,
    SpecialObserve,
    Collect,
    Talk,
    SpecialTalk,
    Accuse,

    // ========================================================================
    // Commands
    // ========================================================================
    ChangeRoom,
    ReadMemo,
    Help,
    /// Do nothing and move on to the next turn.
    None,
}

impl ActionKind {
    /// Label shown for this kind in menus.
    pub fn label<'a>(&self, labels: &'a ActionLabels) -> &'a str {
        match self {
            Self::Observe => &labels.observe,
            Self::SpecialObserve => &labels.special_observe,
            Self::Collect => &labels.collect,
            Self::Talk => &labels.talk,
            Self::SpecialTalk => &labels.special_talk,
            Self::Accuse => &labels.accuse,
            Self::ChangeRoom => &labels.change_room,
            Self::ReadMemo => &labels.read_memo,
            Self::Help => &labels.help,
            Self::None => &labels.none,
        }
    }

    /// Display-only commands never touch the state.
    pub const fn is_display_only(&self) -> bool {
        matches!(self, Self::ReadMemo | Self::Help | Self::None)
    }
}

/// Entity an action is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Item(ItemId),
    Npc(NpcId),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Item(id) => write!(f, "item {id}"),
            Self::Npc(id) => write!(f, "npc {id}"),
        }
    }
}

/// Data-only action descriptor: a kind plus the entity it targets, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub kind: ActionKind,
    pub target: Option<Target>,
}

impl TurnAction {
    pub const fn on(kind: ActionKind, target: Target) -> Self {
        Self {
            kind,
            target: Some(target),
        }
    }

    pub const fn command(kind: ActionKind) -> Self {
        Self { kind, target: None }
    }
}

/// One line of the top-level turn menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    /// Opens the entity's sub-menu.
    Inspect(Target),
    Command(ActionKind),
}
