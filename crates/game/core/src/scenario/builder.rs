//! Two-phase construction of a session from a [`ScenarioSpec`].
//!
//! Phase one allocates an id for every room, item and character. Phase two
//! resolves every name reference (neighbors, trapdoors, requirements, unlock
//! gates, the killer pair) against the complete arenas.

use std::collections::HashMap;

use crate::config::GameConfig;
use crate::state::{
    CaseFile, EntitiesState, GameClock, GameState, Inventory, ItemId, ItemKind, NpcId, NpcRole,
    OfficerProfile, ProgressState, RoomId, SpecialDescription, SuspectProfile, TextBlock,
    WorldGraph,
};

use super::error::ScenarioError;
use super::spec::{ItemSpec, NpcSpec, ScenarioSpec};

/// Identity of the session being created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionParams {
    pub session_id: String,
    pub player_name: String,
    pub game_seed: u64,
}

/// Builds a ready-to-play [`GameState`] from a scenario description.
pub struct WorldBuilder<'a> {
    spec: &'a ScenarioSpec,
    config: GameConfig,
}

impl<'a> WorldBuilder<'a> {
    pub fn new(spec: &'a ScenarioSpec) -> Self {
        Self {
            spec,
            config: GameConfig::default(),
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self, params: SessionParams) -> Result<GameState, ScenarioError> {
        let spec = self.spec;
        self.config.validate()?;
        if spec.rooms.is_empty() {
            return Err(ScenarioError::NoRooms);
        }

        // ===== phase one: allocate =====
        let mut world = WorldGraph::new();
        let mut entities = EntitiesState::new();
        let mut rooms = NameIndex::new("room");
        let mut items = NameIndex::new("item");
        let mut npcs = NameIndex::new("character");

        for room_spec in &spec.rooms {
            let room = world.add_room(&room_spec.name, TextBlock::from(room_spec.description.as_str()));
            rooms.insert(&room_spec.name, room.0)?;
        }
        for (index, room_spec) in spec.rooms.iter().enumerate() {
            let room = RoomId(index as u32);
            for item_spec in &room_spec.items {
                let id = entities.add_item(
                    &item_spec.name,
                    TextBlock::from(item_spec.description.as_str()),
                    room,
                    ItemKind::Clue,
                );
                items.insert(&item_spec.name, id.0)?;
            }
            for npc_spec in &room_spec.npcs {
                let id = entities.add_npc(npc_spec.name(), TextBlock::default(), room, NpcRole::Witness);
                npcs.insert(npc_spec.name(), id.0)?;
            }
        }

        // ===== phase two: resolve =====
        for (index, room_spec) in spec.rooms.iter().enumerate() {
            let room = RoomId(index as u32);
            let mut has_trapdoor = false;
            for neighbor in &room_spec.neighbors {
                let target = rooms.get(&neighbor.name).map(RoomId).ok_or_else(|| {
                    ScenarioError::DanglingNeighbor {
                        room: room_spec.name.clone(),
                        neighbor: neighbor.name.clone(),
                    }
                })?;
                if neighbor.trapdoor {
                    if has_trapdoor {
                        return Err(ScenarioError::MultipleTrapdoors {
                            room: room_spec.name.clone(),
                        });
                    }
                    has_trapdoor = true;
                }
                world.connect(room, target, neighbor.trapdoor);
            }
        }

        let item_specs = spec.rooms.iter().flat_map(|room| room.items.iter());
        let npc_specs: Vec<&NpcSpec> = spec.rooms.iter().flat_map(|room| room.npcs.iter()).collect();

        // Characters first: item unlock gates need to know who is a suspect.
        let mut officer: Option<&str> = None;
        let mut scheduled: Option<&str> = None;
        for (index, npc_spec) in npc_specs.iter().enumerate() {
            let id = NpcId(index as u32);
            let (dialogue, role) = match npc_spec {
                NpcSpec::Witness { dialogue, .. } => (dialogue.as_str(), NpcRole::Witness),
                NpcSpec::Scheduled { name, dialogue } => {
                    if let Some(first) = scheduled {
                        return Err(ScenarioError::DuplicateScheduled {
                            first: first.to_owned(),
                            second: name.clone(),
                        });
                    }
                    scheduled = Some(name.as_str());
                    (dialogue.as_str(), NpcRole::Scheduled)
                }
                NpcSpec::Suspect {
                    dialogue,
                    description,
                    extra_talk_time,
                    extra_observe_time,
                    ..
                } => (
                    dialogue.as_str(),
                    NpcRole::Suspect(SuspectProfile {
                        description: TextBlock::from(description.as_str()),
                        observed: false,
                        extra_talk_minutes: *extra_talk_time,
                        extra_observe_minutes: *extra_observe_time,
                        special_dialogue: TextBlock::default(),
                        special_object: None,
                        special_talked: false,
                    }),
                ),
                NpcSpec::Officer {
                    name,
                    introduction,
                    reactions,
                    arrival,
                    right_answer,
                    wrong_answer,
                } => {
                    if let Some(first) = officer {
                        return Err(ScenarioError::DuplicateOfficer {
                            first: first.to_owned(),
                            second: name.clone(),
                        });
                    }
                    officer = Some(name.as_str());
                    (
                        "",
                        NpcRole::Officer(OfficerProfile {
                            introduction: TextBlock::from(introduction.as_str()),
                            reactions: reactions.iter().map(|r| TextBlock::from(r.as_str())).collect(),
                            arrival: TextBlock::from(arrival.as_str()),
                            right_answer: TextBlock::from(right_answer.as_str()),
                            wrong_answer: TextBlock::from(wrong_answer.as_str()),
                        }),
                    )
                }
            };
            if let Some(npc) = entities.npc_mut(id) {
                npc.dialogue = TextBlock::from(dialogue);
                npc.role = role;
            }
        }
        if officer.is_none() {
            return Err(ScenarioError::MissingOfficer);
        }

        for (index, item_spec) in item_specs.enumerate() {
            resolve_item(ItemId(index as u32), item_spec, &items, &npcs, &mut entities)?;
        }

        // Special-talk objects must be weapons, so they resolve after items.
        for (index, npc_spec) in npc_specs.iter().enumerate() {
            let NpcSpec::Suspect {
                name,
                special: Some(special),
                ..
            } = npc_spec
            else {
                continue;
            };
            let object = weapon_id(&special.object, &items, &entities, || {
                ScenarioError::UnknownSpecialObject {
                    suspect: name.clone(),
                    object: special.object.clone(),
                }
            })?;
            if let Some(NpcRole::Suspect(profile)) =
                entities.npc_mut(NpcId(index as u32)).map(|npc| &mut npc.role)
            {
                profile.special_dialogue = TextBlock::from(special.dialogue.as_str());
                profile.special_object = Some(object);
            }
        }

        let start = rooms
            .get(&spec.start_room)
            .map(RoomId)
            .ok_or_else(|| ScenarioError::MissingStartRoom(spec.start_room.clone()))?;

        let reachable = world.reachable_from(start);
        if let Some(room) = world.rooms().find(|room| !reachable.contains(&room.id)) {
            return Err(ScenarioError::UnreachableRoom {
                room: room.name.clone(),
            });
        }

        let killer = npcs
            .get(&spec.killer.suspect)
            .map(NpcId)
            .ok_or_else(|| ScenarioError::UnknownKillerSuspect(spec.killer.suspect.clone()))?;
        if !entities.npc(killer).is_some_and(|npc| npc.is_suspect()) {
            return Err(ScenarioError::NotASuspect {
                name: spec.killer.suspect.clone(),
            });
        }
        let weapon = weapon_id(&spec.killer.weapon, &items, &entities, || {
            ScenarioError::UnknownKillerWeapon(spec.killer.weapon.clone())
        })?;

        let mut case_file = CaseFile::new();
        case_file.seal(killer, weapon)?;

        tracing::debug!(
            title = %spec.title,
            rooms = world.len(),
            items = entities.items().count(),
            npcs = entities.npcs().count(),
            "scenario wired"
        );

        let clock = GameClock::new(&self.config);
        Ok(GameState {
            game_seed: params.game_seed,
            nonce: 0,
            config: self.config,
            world,
            entities,
            case_file,
            clock,
            inventory: Inventory::new(),
            progress: ProgressState::new(params.session_id, params.player_name, start),
            sentences: spec.sentences.clone(),
            help: TextBlock::from(spec.help.as_str()),
        })
    }
}

fn resolve_item(
    id: ItemId,
    item_spec: &ItemSpec,
    items: &NameIndex,
    npcs: &NameIndex,
    entities: &mut EntitiesState,
) -> Result<(), ScenarioError> {
    let kind = match &item_spec.weapon {
        None => ItemKind::Clue,
        Some(weapon) => {
            let requirement = match &weapon.requirement {
                None => None,
                Some(name) => Some(items.get(name).map(ItemId).ok_or_else(|| {
                    ScenarioError::UnknownRequirement {
                        weapon: item_spec.name.clone(),
                        requirement: name.clone(),
                    }
                })?),
            };
            ItemKind::Weapon { requirement }
        }
    };

    let special = match &item_spec.special {
        None => None,
        Some(_) if item_spec.weapon.is_some() => {
            return Err(ScenarioError::SpecialOnWeapon {
                item: item_spec.name.clone(),
            });
        }
        Some(special) => {
            let initiator = npcs.get(&special.initiator).map(NpcId).ok_or_else(|| {
                ScenarioError::UnknownSpecialInitiator {
                    item: item_spec.name.clone(),
                    initiator: special.initiator.clone(),
                }
            })?;
            if !entities.npc(initiator).is_some_and(|npc| npc.is_suspect()) {
                return Err(ScenarioError::NotASuspect {
                    name: special.initiator.clone(),
                });
            }
            Some(SpecialDescription {
                text: TextBlock::from(special.description.as_str()),
                initiator,
                observed: false,
            })
        }
    };

    if let Some(item) = entities.item_mut(id) {
        item.kind = kind;
        item.special = special;
        item.extra_observe_minutes = if item.is_weapon() { 0 } else { item_spec.extra_time };
    }
    Ok(())
}

/// Resolves `name` to an item that must be a weapon.
fn weapon_id(
    name: &str,
    items: &NameIndex,
    entities: &EntitiesState,
    unknown: impl FnOnce() -> ScenarioError,
) -> Result<ItemId, ScenarioError> {
    let id = items.get(name).map(ItemId).ok_or_else(unknown)?;
    if !entities.item(id).is_some_and(|item| item.is_weapon()) {
        return Err(ScenarioError::NotAWeapon {
            name: name.to_owned(),
        });
    }
    Ok(id)
}

/// Unique display names of one entity kind, mapped to arena indices.
struct NameIndex {
    kind: &'static str,
    ids: HashMap<String, u32>,
}

impl NameIndex {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            ids: HashMap::new(),
        }
    }

    fn insert(&mut self, name: &str, id: u32) -> Result<(), ScenarioError> {
        if self.ids.insert(name.to_owned(), id).is_some() {
            return Err(ScenarioError::DuplicateName {
                kind: self.kind,
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }
}
