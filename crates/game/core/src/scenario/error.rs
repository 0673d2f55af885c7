use crate::config::ConfigError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::CaseFileError;

/// Content inconsistencies detected while wiring a scenario.
///
/// All of them are fatal: a session never starts on a partially wired graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario declares no rooms")]
    NoRooms,

    #[error("duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("room '{room}' lists unknown neighbor '{neighbor}'")]
    DanglingNeighbor { room: String, neighbor: String },

    #[error("room '{room}' declares more than one trapdoor")]
    MultipleTrapdoors { room: String },

    #[error("start room '{0}' does not exist")]
    MissingStartRoom(String),

    #[error("room '{room}' cannot be reached from the start room")]
    UnreachableRoom { room: String },

    #[error("weapon '{weapon}' requires unknown item '{requirement}'")]
    UnknownRequirement { weapon: String, requirement: String },

    #[error("item '{item}' is unlocked by unknown character '{initiator}'")]
    UnknownSpecialInitiator { item: String, initiator: String },

    #[error("'{name}' is referenced as a suspect but is not one")]
    NotASuspect { name: String },

    #[error("suspect '{suspect}' is gated on unknown item '{object}'")]
    UnknownSpecialObject { suspect: String, object: String },

    #[error("'{name}' is referenced as a weapon but is not one")]
    NotAWeapon { name: String },

    #[error("killer suspect '{0}' does not exist")]
    UnknownKillerSuspect(String),

    #[error("killer weapon '{0}' does not exist")]
    UnknownKillerWeapon(String),

    #[error("scenario has no officer")]
    MissingOfficer,

    #[error("scenario has more than one officer ('{first}' and '{second}')")]
    DuplicateOfficer { first: String, second: String },

    #[error("scenario has more than one scheduled character ('{first}' and '{second}')")]
    DuplicateScheduled { first: String, second: String },

    #[error("item '{item}' is a weapon and cannot carry a special description")]
    SpecialOnWeapon { item: String },

    #[error("invalid clock configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    CaseFile(#[from] CaseFileError),
}

impl GameError for ScenarioError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRooms => "SCENARIO_NO_ROOMS",
            Self::DuplicateName { .. } => "SCENARIO_DUPLICATE_NAME",
            Self::DanglingNeighbor { .. } => "SCENARIO_DANGLING_NEIGHBOR",
            Self::MultipleTrapdoors { .. } => "SCENARIO_MULTIPLE_TRAPDOORS",
            Self::MissingStartRoom(_) => "SCENARIO_MISSING_START_ROOM",
            Self::UnreachableRoom { .. } => "SCENARIO_UNREACHABLE_ROOM",
            Self::UnknownRequirement { .. } => "SCENARIO_UNKNOWN_REQUIREMENT",
            Self::UnknownSpecialInitiator { .. } => "SCENARIO_UNKNOWN_SPECIAL_INITIATOR",
            Self::NotASuspect { .. } => "SCENARIO_NOT_A_SUSPECT",
            Self::UnknownSpecialObject { .. } => "SCENARIO_UNKNOWN_SPECIAL_OBJECT",
            Self::NotAWeapon { .. } => "SCENARIO_NOT_A_WEAPON",
            Self::UnknownKillerSuspect(_) => "SCENARIO_UNKNOWN_KILLER_SUSPECT",
            Self::UnknownKillerWeapon(_) => "SCENARIO_UNKNOWN_KILLER_WEAPON",
            Self::MissingOfficer => "SCENARIO_MISSING_OFFICER",
            Self::DuplicateOfficer { .. } => "SCENARIO_DUPLICATE_OFFICER",
            Self::DuplicateScheduled { .. } => "SCENARIO_DUPLICATE_SCHEDULED",
            Self::SpecialOnWeapon { .. } => "SCENARIO_SPECIAL_ON_WEAPON",
            Self::Config(err) => err.error_code(),
            Self::CaseFile(err) => err.error_code(),
        }
    }
}
