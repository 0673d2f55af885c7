//! Data-driven scenario content and its loaders.
//!
//! A scenario is a directory of RON/TOML files:
//! - `scenario.ron`: title, start room, killer pair, help text, sentence overrides
//! - `rooms/*.ron`: one room per file with its neighbors, items and characters
//! - `config.toml` (optional): clock and action-duration overrides
//!
//! Loaders only deserialize. Cross-references are resolved later by
//! [`game_core::WorldBuilder`], so a room file may name rooms and entities
//! declared in any other file.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, RoomLoader, ScenarioEntry, ScenarioLoader,
    list_scenarios,
};
