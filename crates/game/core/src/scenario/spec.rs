//! Declarative description of a scenario, as produced by content loaders.
//!
//! Every cross-reference is a display name. Names are resolved to arena ids
//! by [`WorldBuilder`](super::WorldBuilder) once every room and entity exists,
//! so a reference may point at something declared later or in another file.

use crate::env::Sentences;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    pub title: String,
    pub start_room: String,
    pub killer: KillerSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub help: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sentences: Sentences,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rooms: Vec<RoomSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillerSpec {
    pub suspect: String,
    pub weapon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSpec {
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub neighbors: Vec<NeighborSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub npcs: Vec<NpcSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trapdoor: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_time: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special: Option<SpecialDescriptionSpec>,
    /// Present for weapons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<WeaponSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialDescriptionSpec {
    pub description: String,
    /// Suspect whose confidential dialogue unlocks this description.
    pub initiator: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    /// Item that must be observed before this weapon can be taken.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirement: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialTalkSpec {
    pub dialogue: String,
    /// Weapon the player must carry.
    pub object: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcSpec {
    Witness {
        name: String,
        dialogue: String,
    },
    /// Hidden until the scheduled arrival hour.
    Scheduled {
        name: String,
        dialogue: String,
    },
    Suspect {
        name: String,
        dialogue: String,
        description: String,
        #[cfg_attr(feature = "serde", serde(default))]
        extra_talk_time: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        extra_observe_time: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        special: Option<SpecialTalkSpec>,
    },
    Officer {
        name: String,
        introduction: String,
        #[cfg_attr(feature = "serde", serde(default))]
        reactions: Vec<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        arrival: String,
        right_answer: String,
        wrong_answer: String,
    },
}

impl NpcSpec {
    pub fn name(&self) -> &str {
        match self {
            Self::Witness { name, .. }
            | Self::Scheduled { name, .. }
            | Self::Suspect { name, .. }
            | Self::Officer { name, .. } => name,
        }
    }
}
