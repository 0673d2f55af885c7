//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::state::GameState;

use super::ActionResult;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the
/// result together with the minutes it costs.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<(T::Result, u32), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let cost = transition.cost(state);

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok((result, cost))
}

/// Routes each action to its transition and wraps the result.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
) -> Result<(ActionResult, u32), ExecuteError> {
    match action {
        Action::Observe(transition) => {
            let (text, cost) = drive_transition(transition, state).map_err(ExecuteError::Observe)?;
            Ok((ActionResult::Observed(text), cost))
        }
        Action::SpecialObserve(transition) => {
            let (text, cost) =
                drive_transition(transition, state).map_err(ExecuteError::SpecialObserve)?;
            Ok((ActionResult::SpecialObserved(text), cost))
        }
        Action::Collect(transition) => {
            let (text, cost) = drive_transition(transition, state).map_err(ExecuteError::Collect)?;
            Ok((ActionResult::Collected(text), cost))
        }
        Action::Talk(transition) => {
            let (text, cost) = drive_transition(transition, state).map_err(ExecuteError::Talk)?;
            Ok((ActionResult::Talked(text), cost))
        }
        Action::SpecialTalk(transition) => {
            let (text, cost) =
                drive_transition(transition, state).map_err(ExecuteError::SpecialTalk)?;
            Ok((ActionResult::SpecialTalked(text), cost))
        }
        Action::Accuse(transition) => {
            let (outcome, cost) =
                drive_transition(transition, state).map_err(ExecuteError::Accuse)?;
            Ok((ActionResult::Accused(outcome), cost))
        }
        Action::Move(transition) => {
            let (outcome, cost) = drive_transition(transition, state).map_err(ExecuteError::Move)?;
            Ok((ActionResult::Moved(outcome), cost))
        }
    }
}
