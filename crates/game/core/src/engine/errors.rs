//! Error types for action execution pipeline.

use crate::action::{ActionError, ActionTransition, MoveAction};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("observe action failed: {0}")]
    Observe(TransitionPhaseError<ActionError>),

    #[error("special observe action failed: {0}")]
    SpecialObserve(TransitionPhaseError<ActionError>),

    #[error("collect action failed: {0}")]
    Collect(TransitionPhaseError<ActionError>),

    #[error("talk action failed: {0}")]
    Talk(TransitionPhaseError<ActionError>),

    #[error("special talk action failed: {0}")]
    SpecialTalk(TransitionPhaseError<ActionError>),

    #[error("accuse action failed: {0}")]
    Accuse(TransitionPhaseError<ActionError>),

    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("the session has already ended")]
    GameEnded,
}

impl ExecuteError {
    /// The underlying action error, if any.
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            Self::Observe(err)
            | Self::SpecialObserve(err)
            | Self::Collect(err)
            | Self::Talk(err)
            | Self::SpecialTalk(err)
            | Self::Accuse(err) => Some(&err.error),
            Self::Move(err) => match err.error {},
            Self::GameEnded => None,
        }
    }

    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::Observe(err)
            | Self::SpecialObserve(err)
            | Self::Collect(err)
            | Self::Talk(err)
            | Self::SpecialTalk(err)
            | Self::Accuse(err) => Some(err.phase),
            Self::Move(err) => Some(err.phase),
            Self::GameEnded => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self.action_error() {
            Some(err) => err.severity(),
            None => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.action_error() {
            Some(err) => err.error_code(),
            None => "EXECUTE_GAME_ENDED",
        }
    }
}
