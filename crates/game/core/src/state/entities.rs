//! Item and character arenas with their one-shot latches.
//!
//! Entities are allocated once while the scenario is built and never removed.
//! Their mutable state only moves forward: `observed`, `talked` and
//! `special_talked` go from `false` to `true`, and a weapon moves from its room
//! into the player's pockets. Every latch is flipped through a method on
//! [`EntitiesState`] that returns `false` when the latch was already set.

use bitflags::bitflags;

use super::common::{ItemId, NpcId, RoomId};
use super::text::TextBlock;

bitflags! {
    /// Interactions an entity supports, independent of its current latches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u8 {
        const OBSERVABLE = 1 << 0;
        const SPECIAL_OBSERVABLE = 1 << 1;
        const COLLECTIBLE = 1 << 2;
        const TALKABLE = 1 << 3;
        const SPECIAL_TALKABLE = 1 << 4;
        const ACCUSER = 1 << 5;
    }
}

// ============================================================================
// Items
// ============================================================================

/// Text unlocked on an item once a given suspect has confided.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialDescription {
    pub text: TextBlock,
    /// Suspect whose confidential dialogue unlocks this description.
    pub initiator: NpcId,
    pub observed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Scenery that can be examined but never taken.
    Clue,
    /// Can be collected once `requirement` (if any) has been observed.
    Weapon { requirement: Option<ItemId> },
}

/// Where an item currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemLocation {
    Room(RoomId),
    Carried,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: ItemId,
    pub name: String,
    pub description: TextBlock,
    pub extra_observe_minutes: u32,
    pub observed: bool,
    pub special: Option<SpecialDescription>,
    pub kind: ItemKind,
    pub location: ItemLocation,
}

impl ItemState {
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }

    pub fn requirement(&self) -> Option<ItemId> {
        match self.kind {
            ItemKind::Weapon { requirement } => requirement,
            ItemKind::Clue => None,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self.kind {
            ItemKind::Weapon { .. } => Capabilities::COLLECTIBLE,
            ItemKind::Clue => {
                let mut caps = Capabilities::OBSERVABLE;
                if self.special.is_some() {
                    caps |= Capabilities::SPECIAL_OBSERVABLE;
                }
                caps
            }
        }
    }
}

// ============================================================================
// Characters
// ============================================================================

/// Extra state carried by characters who can be accused.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuspectProfile {
    pub description: TextBlock,
    pub observed: bool,
    pub extra_talk_minutes: u32,
    pub extra_observe_minutes: u32,
    pub special_dialogue: TextBlock,
    /// Weapon that must be carried before the suspect confides.
    pub special_object: Option<ItemId>,
    pub special_talked: bool,
}

/// Dialogue owned by the investigating officer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfficerProfile {
    pub introduction: TextBlock,
    pub reactions: Vec<TextBlock>,
    /// Announcement made when the scheduled character shows up.
    pub arrival: TextBlock,
    pub right_answer: TextBlock,
    pub wrong_answer: TextBlock,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcRole {
    /// Talks once, nothing else.
    Witness,
    /// Hidden from every room until the scheduled arrival fires.
    Scheduled,
    Suspect(SuspectProfile),
    Officer(OfficerProfile),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcState {
    pub id: NpcId,
    pub name: String,
    pub dialogue: TextBlock,
    pub talked: bool,
    pub room: RoomId,
    pub role: NpcRole,
}

impl NpcState {
    pub fn suspect(&self) -> Option<&SuspectProfile> {
        match &self.role {
            NpcRole::Suspect(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn officer(&self) -> Option<&OfficerProfile> {
        match &self.role {
            NpcRole::Officer(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_suspect(&self) -> bool {
        self.suspect().is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self.role, NpcRole::Scheduled)
    }

    pub fn capabilities(&self) -> Capabilities {
        match &self.role {
            NpcRole::Officer(_) => Capabilities::ACCUSER,
            NpcRole::Witness | NpcRole::Scheduled => Capabilities::TALKABLE,
            NpcRole::Suspect(profile) => {
                let mut caps = Capabilities::TALKABLE | Capabilities::OBSERVABLE;
                if profile.special_object.is_some() {
                    caps |= Capabilities::SPECIAL_TALKABLE;
                }
                caps
            }
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Arena of every item and character in the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    items: Vec<ItemState>,
    npcs: Vec<NpcState>,
}

impl EntitiesState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== construction =====

    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        description: TextBlock,
        room: RoomId,
        kind: ItemKind,
    ) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        self.items.push(ItemState {
            id,
            name: name.into(),
            description,
            extra_observe_minutes: 0,
            observed: false,
            special: None,
            kind,
            location: ItemLocation::Room(room),
        });
        id
    }

    pub fn add_npc(
        &mut self,
        name: impl Into<String>,
        dialogue: TextBlock,
        room: RoomId,
        role: NpcRole,
    ) -> NpcId {
        let id = NpcId(self.npcs.len() as u32);
        self.npcs.push(NpcState {
            id,
            name: name.into(),
            dialogue,
            talked: false,
            room,
            role,
        });
        id
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut ItemState> {
        self.items.get_mut(id.index())
    }

    pub(crate) fn npc_mut(&mut self, id: NpcId) -> Option<&mut NpcState> {
        self.npcs.get_mut(id.index())
    }

    // ===== queries =====

    pub fn item(&self, id: ItemId) -> Option<&ItemState> {
        self.items.get(id.index())
    }

    pub fn npc(&self, id: NpcId) -> Option<&NpcState> {
        self.npcs.get(id.index())
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemState> {
        self.items.iter()
    }

    pub fn npcs(&self) -> impl Iterator<Item = &NpcState> {
        self.npcs.iter()
    }

    pub fn item_by_name(&self, name: &str) -> Option<ItemId> {
        self.items.iter().find(|item| item.name == name).map(|item| item.id)
    }

    pub fn npc_by_name(&self, name: &str) -> Option<NpcId> {
        self.npcs.iter().find(|npc| npc.name == name).map(|npc| npc.id)
    }

    /// Items lying in `room`, in declaration order. Carried items are excluded.
    pub fn items_in(&self, room: RoomId) -> impl Iterator<Item = &ItemState> {
        self.items
            .iter()
            .filter(move |item| item.location == ItemLocation::Room(room))
    }

    /// Characters placed in `room`, in declaration order, scheduled ones included.
    pub fn npcs_in(&self, room: RoomId) -> impl Iterator<Item = &NpcState> {
        self.npcs.iter().filter(move |npc| npc.room == room)
    }

    /// Every suspect in the world, whatever room they are in.
    pub fn suspects(&self) -> impl Iterator<Item = &NpcState> {
        self.npcs.iter().filter(|npc| npc.is_suspect())
    }

    /// Every weapon in the world, carried or not.
    pub fn weapons(&self) -> impl Iterator<Item = &ItemState> {
        self.items.iter().filter(|item| item.is_weapon())
    }

    pub fn officer(&self) -> Option<&NpcState> {
        self.npcs.iter().find(|npc| npc.officer().is_some())
    }

    pub fn scheduled_character(&self) -> Option<&NpcState> {
        self.npcs.iter().find(|npc| npc.is_scheduled())
    }

    /// True when the item's special description has been unlocked by its suspect.
    pub fn is_special_unlocked(&self, item: ItemId) -> bool {
        let Some(special) = self.item(item).and_then(|item| item.special.as_ref()) else {
            return false;
        };
        self.npc(special.initiator)
            .and_then(NpcState::suspect)
            .is_some_and(|suspect| suspect.special_talked)
    }

    /// True when the weapon's requirement (if any) has been observed.
    pub fn requirement_met(&self, weapon: ItemId) -> bool {
        match self.item(weapon).and_then(ItemState::requirement) {
            Some(requirement) => self.item(requirement).is_some_and(|item| item.observed),
            None => true,
        }
    }

    // ===== one-shot latches =====

    pub(crate) fn mark_item_observed(&mut self, id: ItemId) -> bool {
        match self.item_mut(id) {
            Some(item) if !item.observed => {
                item.observed = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_special_observed(&mut self, id: ItemId) -> bool {
        match self.item_mut(id).and_then(|item| item.special.as_mut()) {
            Some(special) if !special.observed => {
                special.observed = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_suspect_observed(&mut self, id: NpcId) -> bool {
        match self.npc_mut(id).map(|npc| &mut npc.role) {
            Some(NpcRole::Suspect(profile)) if !profile.observed => {
                profile.observed = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_talked(&mut self, id: NpcId) -> bool {
        match self.npc_mut(id) {
            Some(npc) if !npc.talked => {
                npc.talked = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_special_talked(&mut self, id: NpcId) -> bool {
        match self.npc_mut(id).map(|npc| &mut npc.role) {
            Some(NpcRole::Suspect(profile)) if !profile.special_talked => {
                profile.special_talked = true;
                true
            }
            _ => false,
        }
    }

    /// Moves a weapon out of its room into the player's pockets.
    pub(crate) fn take_weapon(&mut self, id: ItemId) -> bool {
        match self.item_mut(id) {
            Some(item) if item.is_weapon() && item.location != ItemLocation::Carried => {
                item.location = ItemLocation::Carried;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suspect_profile(special_object: Option<ItemId>) -> SuspectProfile {
        SuspectProfile {
            description: TextBlock::line("Nervous."),
            observed: false,
            extra_talk_minutes: 5,
            extra_observe_minutes: 0,
            special_dialogue: TextBlock::line("I saw everything."),
            special_object,
            special_talked: false,
        }
    }

    #[test]
    fn latches_only_fire_once() {
        let mut entities = EntitiesState::new();
        let room = RoomId(0);
        let vase = entities.add_item("Vase", TextBlock::line("Blue."), room, ItemKind::Clue);
        let butler = entities.add_npc(
            "Butler",
            TextBlock::line("Yes?"),
            room,
            NpcRole::Suspect(suspect_profile(None)),
        );

        assert!(entities.mark_item_observed(vase));
        assert!(!entities.mark_item_observed(vase));
        assert!(entities.mark_talked(butler));
        assert!(!entities.mark_talked(butler));
        assert!(entities.mark_special_talked(butler));
        assert!(!entities.mark_special_talked(butler));
        assert!(entities.mark_suspect_observed(butler));
        assert!(!entities.mark_suspect_observed(butler));
    }

    #[test]
    fn taking_a_weapon_removes_it_from_the_room() {
        let mut entities = EntitiesState::new();
        let room = RoomId(0);
        let rope = entities.add_item(
            "Rope",
            TextBlock::line("Frayed."),
            room,
            ItemKind::Weapon { requirement: None },
        );
        let chair = entities.add_item("Chair", TextBlock::line("Oak."), room, ItemKind::Clue);

        assert_eq!(entities.items_in(room).count(), 2);
        assert!(entities.take_weapon(rope));
        assert!(!entities.take_weapon(rope));
        assert!(!entities.take_weapon(chair));
        let ids: Vec<_> = entities.items_in(room).map(|item| item.id).collect();
        assert_eq!(ids, vec![chair]);
        assert_eq!(entities.weapons().count(), 1);
    }

    #[test]
    fn requirement_gates_on_observation() {
        let mut entities = EntitiesState::new();
        let room = RoomId(0);
        let desk = entities.add_item("Desk", TextBlock::line("Drawers."), room, ItemKind::Clue);
        let letter = entities.add_item(
            "Letter opener",
            TextBlock::line("Sharp."),
            room,
            ItemKind::Weapon {
                requirement: Some(desk),
            },
        );

        assert!(!entities.requirement_met(letter));
        entities.mark_item_observed(desk);
        assert!(entities.requirement_met(letter));
    }

    #[test]
    fn special_description_unlocks_with_initiator() {
        let mut entities = EntitiesState::new();
        let room = RoomId(0);
        let maid = entities.add_npc(
            "Maid",
            TextBlock::line("Hello."),
            room,
            NpcRole::Suspect(suspect_profile(None)),
        );
        let mirror = entities.add_item("Mirror", TextBlock::line("Cracked."), room, ItemKind::Clue);
        entities.item_mut(mirror).unwrap().special = Some(SpecialDescription {
            text: TextBlock::line("A hidden safe."),
            initiator: maid,
            observed: false,
        });

        assert!(!entities.is_special_unlocked(mirror));
        entities.mark_special_talked(maid);
        assert!(entities.is_special_unlocked(mirror));
    }

    #[test]
    fn capabilities_follow_variant() {
        let mut entities = EntitiesState::new();
        let room = RoomId(0);
        let officer = entities.add_npc(
            "Inspector",
            TextBlock::default(),
            room,
            NpcRole::Officer(OfficerProfile::default()),
        );
        let suspect = entities.add_npc(
            "Cook",
            TextBlock::line("Hm."),
            room,
            NpcRole::Suspect(suspect_profile(Some(ItemId(0)))),
        );

        assert_eq!(
            entities.npc(officer).unwrap().capabilities(),
            Capabilities::ACCUSER
        );
        let caps = entities.npc(suspect).unwrap().capabilities();
        assert!(caps.contains(Capabilities::TALKABLE | Capabilities::SPECIAL_TALKABLE));
        assert!(caps.contains(Capabilities::OBSERVABLE));
    }
}
