//! Room arena and the neighbor relation between rooms.

use super::common::RoomId;
use super::text::TextBlock;

/// A location the player can stand in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: TextBlock,
    /// Neighbors in declaration order. Only declared edges exist.
    neighbors: Vec<RoomId>,
    /// Neighbor reached through the trapdoor, always also listed in `neighbors`.
    trapdoor: Option<RoomId>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, description: TextBlock) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            neighbors: Vec::new(),
            trapdoor: None,
        }
    }
}

/// Rooms and the directed neighbor relation declared by content.
///
/// The graph never adds the reverse of an edge on its own: if content
/// declares `A -> B` but not `B -> A`, the player can only walk one way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldGraph {
    rooms: Vec<Room>,
}

impl WorldGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a room without edges and returns its id.
    pub fn add_room(&mut self, name: impl Into<String>, description: TextBlock) -> RoomId {
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room::new(id, name, description));
        id
    }

    /// Declares `to` as a neighbor of `from`. Duplicate edges are ignored.
    ///
    /// Returns `false` when either room does not exist.
    pub fn connect(&mut self, from: RoomId, to: RoomId, trapdoor: bool) -> bool {
        if self.room(to).is_none() {
            return false;
        }
        let Some(room) = self.rooms.get_mut(from.index()) else {
            return false;
        };
        if !room.neighbors.contains(&to) {
            room.neighbors.push(to);
        }
        if trapdoor {
            room.trapdoor = Some(to);
        }
        true
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().find(|room| room.name == name).map(|room| room.id)
    }

    /// Neighbors of `room` in declaration order.
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        self.room(room).map_or(&[], |room| room.neighbors.as_slice())
    }

    pub fn is_neighbor(&self, from: RoomId, to: RoomId) -> bool {
        self.neighbors(from).contains(&to)
    }

    pub fn trapdoor(&self, room: RoomId) -> Option<RoomId> {
        self.room(room).and_then(|room| room.trapdoor)
    }

    /// Rooms reachable from `start` by following declared edges.
    pub fn reachable_from(&self, start: RoomId) -> Vec<RoomId> {
        let mut seen = vec![false; self.rooms.len()];
        let mut stack = vec![start];
        let mut order = Vec::new();
        while let Some(id) = stack.pop() {
            match seen.get_mut(id.index()) {
                Some(visited) if !*visited => *visited = true,
                _ => continue,
            }
            order.push(id);
            stack.extend(self.neighbors(id).iter().rev().copied());
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> (WorldGraph, RoomId, RoomId, RoomId) {
        let mut world = WorldGraph::new();
        let hall = world.add_room("Hall", TextBlock::line("A hall."));
        let study = world.add_room("Study", TextBlock::line("A study."));
        let cellar = world.add_room("Cellar", TextBlock::line("A cellar."));
        world.connect(hall, study, false);
        world.connect(study, hall, false);
        world.connect(study, cellar, true);
        (world, hall, study, cellar)
    }

    #[test]
    fn neighbors_keep_declaration_order() {
        let (world, hall, study, cellar) = graph();
        assert_eq!(world.neighbors(study), &[hall, cellar]);
        assert_eq!(world.neighbors(hall), &[study]);
    }

    #[test]
    fn symmetry_is_never_invented() {
        let (world, _, study, cellar) = graph();
        assert!(world.is_neighbor(study, cellar));
        assert!(!world.is_neighbor(cellar, study));
        assert!(world.neighbors(cellar).is_empty());
    }

    #[test]
    fn trapdoor_is_also_a_neighbor() {
        let (world, hall, study, cellar) = graph();
        assert_eq!(world.trapdoor(study), Some(cellar));
        assert_eq!(world.trapdoor(hall), None);
        assert!(world.is_neighbor(study, cellar));
    }

    #[test]
    fn connect_rejects_unknown_rooms() {
        let (mut world, hall, ..) = graph();
        assert!(!world.connect(hall, RoomId(99), false));
        assert!(!world.connect(RoomId(99), hall, false));
    }

    #[test]
    fn reachability_follows_declared_edges() {
        let (world, hall, study, cellar) = graph();
        assert_eq!(world.reachable_from(hall), vec![hall, study, cellar]);
        assert_eq!(world.reachable_from(cellar), vec![cellar]);
        assert_eq!(world.room_by_name("Study"), Some(study));
    }
}
