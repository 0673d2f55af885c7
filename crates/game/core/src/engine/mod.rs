//! Action execution pipeline and the turn loop.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]: every
//! mutation flows through its `execute()` pipeline, which also charges the
//! action's minutes to the clock. The [`TurnController`] drives one turn at a
//! time on top of it, talking to the player only through [`Interaction`].

mod errors;
mod interface;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use interface::{Interaction, Narration};
pub use turns::{TurnController, TurnError, TurnOutcome, TurnPhase};

use crate::action::{AccusationOutcome, Action, MoveOutcome};
use crate::state::{GameState, GameTime, TextBlock};

/// Action-specific execution result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    Observed(TextBlock),
    SpecialObserved(TextBlock),
    Collected(TextBlock),
    Talked(TextBlock),
    SpecialTalked(TextBlock),
    Accused(AccusationOutcome),
    Moved(MoveOutcome),
}

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub result: ActionResult,
    /// Minutes charged to the clock.
    pub elapsed: u32,
    /// Clock time after the action.
    pub now: GameTime,
}

/// Reducer that validates and applies actions.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate. A failing phase leaves the clock
/// untouched.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action by routing it through the appropriate transition pipeline.
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        if self.state.is_ended() {
            return Err(ExecuteError::GameEnded);
        }

        let (result, elapsed) = transition::execute_transition(action, self.state)?;

        let now = self.state.clock.advance(elapsed);
        self.state.nonce += 1;

        tracing::debug!(
            kind = %action.kind(),
            elapsed,
            %now,
            nonce = self.state.nonce,
            "action executed"
        );
        Ok(ExecutionOutcome {
            result,
            elapsed,
            now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{
        AccuseAction, ActionError, CollectAction, MoveAction, ObserveAction, SpecialTalkAction,
        TalkAction, Target,
    };
    use crate::error::{ErrorSeverity, GameError};
    use crate::scenario::fixtures::manor_state;
    use crate::state::{ItemId, NpcId, RoomId, Verdict};

    fn room(state: &GameState, name: &str) -> RoomId {
        state.world.room_by_name(name).unwrap()
    }

    fn item(state: &GameState, name: &str) -> ItemId {
        state.entities.item_by_name(name).unwrap()
    }

    fn npc(state: &GameState, name: &str) -> NpcId {
        state.entities.npc_by_name(name).unwrap()
    }

    #[test]
    fn move_to_neighbor_costs_move_minutes() {
        let mut state = manor_state();
        let study = room(&state, "Study");
        let hall = state.current_room();

        let outcome = GameEngine::new(&mut state)
            .execute(&Action::Move(MoveAction::new(study)))
            .unwrap();

        assert_eq!(outcome.result, ActionResult::Moved(MoveOutcome::Moved { from: hall, to: study }));
        assert_eq!(outcome.elapsed, 10);
        assert_eq!(state.current_room(), study);
        assert_eq!(state.clock.now(), GameTime::new(8, 10));
        assert!(state.world.is_neighbor(study, hall));
    }

    #[test]
    fn move_to_non_neighbor_is_a_free_no_op() {
        let mut state = manor_state();
        let cellar = room(&state, "Cellar");
        let hall = state.current_room();

        let outcome = GameEngine::new(&mut state)
            .execute(&Action::Move(MoveAction::new(cellar)))
            .unwrap();

        assert_eq!(outcome.result, ActionResult::Moved(MoveOutcome::Stayed));
        assert_eq!(outcome.elapsed, 0);
        assert_eq!(state.current_room(), hall);
        assert_eq!(state.clock.now(), GameTime::new(8, 0));
    }

    #[test]
    fn observe_charges_extra_time_and_writes_the_memo() {
        let mut state = manor_state();
        state.progress.current_room = room(&state, "Study");
        let desk = Target::Item(item(&state, "Desk"));

        let outcome = GameEngine::new(&mut state)
            .execute(&Action::Observe(ObserveAction::new(desk)))
            .unwrap();

        assert_eq!(outcome.elapsed, 15);
        let entry = state.progress.memo().last().unwrap();
        assert_eq!(entry.text.lines[0], "Desk :");
        assert_eq!(entry.at, GameTime::new(8, 0));
    }

    #[test]
    fn repeated_one_shot_action_is_a_validation_no_op() {
        let mut state = manor_state();
        let rack = Target::Item(item(&state, "Coat rack"));
        let mut engine = GameEngine::new(&mut state);
        engine.execute(&Action::Observe(ObserveAction::new(rack))).unwrap();
        let before = engine.state().clone();

        let err = engine
            .execute(&Action::Observe(ObserveAction::new(rack)))
            .unwrap_err();

        assert_eq!(err.phase(), Some(TransitionPhase::PreValidate));
        assert_eq!(err.action_error(), Some(&ActionError::AlreadyObserved(rack)));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn collect_before_requirement_is_rejected() {
        let mut state = manor_state();
        state.progress.current_room = room(&state, "Study");
        let opener = item(&state, "Letter opener");
        let desk = item(&state, "Desk");

        let err = GameEngine::new(&mut state)
            .execute(&Action::Collect(CollectAction::new(opener)))
            .unwrap_err();
        assert_eq!(err.error_code(), "ACTION_REQUIREMENT_NOT_MET");
        assert!(!state.inventory.contains(opener));

        let mut engine = GameEngine::new(&mut state);
        engine
            .execute(&Action::Observe(ObserveAction::new(Target::Item(desk))))
            .unwrap();
        let outcome = engine
            .execute(&Action::Collect(CollectAction::new(opener)))
            .unwrap();
        assert_eq!(outcome.elapsed, 10);
        assert!(state.inventory.contains(opener));
        assert!(state.entities.items_in(room(&state, "Study")).all(|i| i.id != opener));
    }

    #[test]
    fn talk_adds_suspect_extra_time() {
        let mut state = manor_state();
        state.progress.current_room = room(&state, "Study");
        let butler = npc(&state, "Butler");

        let outcome = GameEngine::new(&mut state)
            .execute(&Action::Talk(TalkAction::new(butler)))
            .unwrap();
        assert_eq!(outcome.elapsed, 70);
        assert_eq!(state.clock.now(), GameTime::new(9, 10));
    }

    #[test]
    fn special_talk_without_object_is_rejected() {
        let mut state = manor_state();
        state.progress.current_room = room(&state, "Study");
        let butler = npc(&state, "Butler");
        let err = GameEngine::new(&mut state)
            .execute(&Action::SpecialTalk(SpecialTalkAction::new(butler)))
            .unwrap_err();
        assert!(matches!(
            err.action_error(),
            Some(ActionError::SpecialObjectMissing { .. })
        ));
    }

    #[test]
    fn officer_cannot_be_talked_to() {
        let mut state = manor_state();
        let inspector = npc(&state, "Inspector");
        let err = GameEngine::new(&mut state)
            .execute(&Action::Talk(TalkAction::new(inspector)))
            .unwrap_err();
        assert_eq!(err.action_error(), Some(&ActionError::NotTalkable(inspector)));
    }

    #[test]
    fn accusation_ends_the_game_whatever_the_verdict() {
        for (suspect, weapon, expected) in [
            ("Butler", "Letter opener", Verdict::Correct),
            ("Butler", "Rope", Verdict::Wrong),
            ("Cook", "Letter opener", Verdict::Wrong),
            ("Cook", "Knife", Verdict::Wrong),
        ] {
            let mut state = manor_state();
            let action = AccuseAction::new(npc(&state, suspect), item(&state, weapon));
            let mut engine = GameEngine::new(&mut state);
            let outcome = engine.execute(&Action::Accuse(action)).unwrap();
            let ActionResult::Accused(accusation) = outcome.result else {
                panic!("expected an accusation result");
            };
            assert_eq!(accusation.verdict, expected);
            assert_eq!(outcome.elapsed, 0);

            let err = engine.execute(&Action::Accuse(action)).unwrap_err();
            assert_eq!(err, ExecuteError::GameEnded);
            assert!(state.is_ended());
            assert_eq!(state.progress.is_won(), expected.is_correct());
        }
    }

    #[test]
    fn accusing_a_non_suspect_is_rejected() {
        let mut state = manor_state();
        let action = AccuseAction::new(npc(&state, "Gardener"), item(&state, "Rope"));
        let err = GameEngine::new(&mut state)
            .execute(&Action::Accuse(action))
            .unwrap_err();
        assert_eq!(err.error_code(), "ACTION_NOT_A_SUSPECT");
        assert!(!state.is_ended());
    }

    #[test]
    fn nonce_counts_successful_actions_only() {
        let mut state = manor_state();
        let rack = Target::Item(item(&state, "Coat rack"));
        let mut engine = GameEngine::new(&mut state);
        engine.execute(&Action::Observe(ObserveAction::new(rack))).unwrap();
        let _ = engine.execute(&Action::Observe(ObserveAction::new(rack)));
        assert_eq!(state.nonce, 1);
    }
}
