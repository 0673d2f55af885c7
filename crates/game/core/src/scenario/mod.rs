//! Scenario descriptions and the builder that turns them into a session.
mod builder;
mod error;
mod spec;

pub use builder::{SessionParams, WorldBuilder};
pub use error::ScenarioError;
pub use spec::{
    ItemSpec, KillerSpec, NeighborSpec, NpcSpec, RoomSpec, ScenarioSpec, SpecialDescriptionSpec,
    SpecialTalkSpec, WeaponSpec,
};
