//! Rules and data types of a turn-based murder investigation.
//!
//! `game-core` owns the canonical rules: the room graph, the entity arenas,
//! the clock, the case file, the action transitions and the turn loop. It
//! performs no I/O; content arrives as a [`ScenarioSpec`], player input
//! through the [`Interaction`] trait, and persistence leaves as a
//! [`GameSnapshot`]. Every state change of a running session flows through
//! [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod scenario;
pub mod snapshot;
pub mod state;

pub use action::{
    AccusationOutcome, AccuseAction, Action, ActionError, ActionKind, ActionTransition,
    CollectAction, MenuEntry, MoveAction, MoveOutcome, ObserveAction, SpecialObserveAction,
    SpecialTalkAction, TalkAction, Target, TurnAction,
};
pub use config::{ActionDurations, ConfigError, GameConfig};
pub use engine::{
    ActionResult, ExecuteError, ExecutionOutcome, GameEngine, Interaction, Narration,
    TransitionPhase, TransitionPhaseError, TurnController, TurnError, TurnOutcome, TurnPhase,
};
pub use env::{ActionLabels, PcgRng, RngOracle, Sentences};
pub use error::{ErrorSeverity, GameError};
pub use scenario::{ScenarioError, ScenarioSpec, SessionParams, WorldBuilder};
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION, SnapshotError};
pub use state::{
    GameClock, GameState, GameTime, ItemId, ItemState, MemoEntry, NpcId, NpcState, RoomId,
    TextBlock, Verdict,
};
