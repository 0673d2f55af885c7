//! Turn loop: describe the room, offer a menu, resolve the choice, tick the clock.

use crate::action::{
    AccusationOutcome, AccuseAction, Action, ActionKind, MenuEntry, MoveAction, Target,
    accusation_candidates, entity_actions, turn_menu,
};
use crate::env::{PcgRng, RngOracle, SeedContext, compute_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::snapshot::GameSnapshot;
use crate::state::{GameState, MemoEntry, NpcState, RoomId, TextBlock};

use super::{ActionResult, ExecuteError, GameEngine, Interaction, Narration};

/// Where the controller is within the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    Roaming,
    Describing,
    ChoosingAction,
    ResolvingAction,
    Ended,
}

/// Errors that abort a turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("choice {index} is out of range for {len} options")]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ChoiceOutOfRange { .. } => ErrorSeverity::Internal,
            Self::Execute(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ChoiceOutOfRange { .. } => "TURN_CHOICE_OUT_OF_RANGE",
            Self::Execute(err) => err.error_code(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Ended { won: bool },
}

/// Drives a session one turn at a time.
///
/// The controller owns no state of its own beyond the phase marker. Every
/// rule lives in [`GameEngine`] and the resolver in [`crate::action`]; this
/// type only sequences them and talks to the [`Interaction`].
pub struct TurnController<'a> {
    state: &'a mut GameState,
    phase: TurnPhase,
    rng: PcgRng,
}

impl<'a> TurnController<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        let phase = if state.is_ended() {
            TurnPhase::Ended
        } else {
            TurnPhase::Roaming
        };
        Self {
            state,
            phase,
            rng: PcgRng,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Serializable copy of the session, taken between turns.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.state)
    }

    /// Narrates the officer's introduction and files it in the memo.
    ///
    /// Meant for brand new sessions only.
    pub fn introduce(&mut self, io: &mut impl Interaction) {
        let Some((speaker, text)) = self
            .state
            .entities
            .officer()
            .and_then(|npc| Some((npc.name.clone(), npc.officer()?.introduction.clone())))
        else {
            return;
        };
        if text.is_empty() {
            return;
        }
        self.speak(io, speaker.clone(), &text);
        self.state.record_memo(text.with_heading(format!("{speaker} :")));
    }

    /// Plays one full turn.
    pub fn play_turn(&mut self, io: &mut impl Interaction) -> Result<TurnOutcome, TurnError> {
        if self.state.is_ended() {
            return Ok(self.finish());
        }

        self.phase = TurnPhase::Describing;
        self.describe(io);
        if let Some(outcome) = self.fire_triggers(io)? {
            return Ok(outcome);
        }

        self.phase = TurnPhase::ChoosingAction;
        let menu = turn_menu(self.state);
        let labels: Vec<String> = menu.iter().map(|entry| self.menu_label(entry)).collect();
        let index = choose(io, &self.state.sentences.know_more, &labels)?;

        self.phase = TurnPhase::ResolvingAction;
        match menu[index] {
            MenuEntry::Inspect(target) => self.resolve_entity(io, target)?,
            MenuEntry::Command(kind) => self.resolve_command(io, kind)?,
        }

        if self.state.is_ended() {
            return Ok(self.finish());
        }
        if let Some(outcome) = self.fire_triggers(io)? {
            return Ok(outcome);
        }

        self.phase = TurnPhase::Roaming;
        Ok(TurnOutcome::Continue)
    }

    /// Plays turns until the session ends. `on_turn` runs after every
    /// completed turn, including the last one.
    pub fn play_until_end(
        &mut self,
        io: &mut impl Interaction,
        mut on_turn: impl FnMut(&GameState),
    ) -> Result<bool, TurnError> {
        loop {
            let outcome = self.play_turn(io)?;
            on_turn(self.state);
            if let TurnOutcome::Ended { won } = outcome {
                return Ok(won);
            }
        }
    }

    /// Narrates the officer's answer and the verdict.
    pub fn conclude(&mut self, io: &mut impl Interaction, outcome: &AccusationOutcome) {
        if let Some(officer) = self.state.entities.officer() {
            let speaker = officer.name.clone();
            self.speak(io, speaker, &outcome.response);
        }
        io.narrate(Narration::Verdict {
            verdict: outcome.verdict,
        });
    }

    // ========================================================================
    // Turn steps
    // ========================================================================

    fn describe(&self, io: &mut impl Interaction) {
        io.narrate(Narration::Clock(self.state.clock.now()));

        let room_id = self.state.current_room();
        if let Some(room) = self.state.world.room(room_id) {
            io.narrate(Narration::Room {
                name: room.name.clone(),
                description: self.personalize(&room.description),
            });
        }

        let Some((officer, reactions)) = self
            .state
            .visible_npcs()
            .find_map(|npc| npc.officer().map(|profile| (npc, &profile.reactions)))
        else {
            return;
        };
        let seed = reaction_seed(self.state, room_id);
        if let Some(index) = self.rng.pick(seed, reactions.len()) {
            self.speak(io, officer.name.clone(), &reactions[index]);
        }
    }

    /// Runs the clock triggers. Returns the final outcome when time ran out.
    fn fire_triggers(
        &mut self,
        io: &mut impl Interaction,
    ) -> Result<Option<TurnOutcome>, TurnError> {
        let triggers = self.state.clock.check_triggers();
        if triggers.arrival {
            self.announce_arrival(io);
        }
        if !triggers.expired {
            return Ok(None);
        }

        tracing::info!(now = %self.state.clock.now(), "time is up");
        if let Some(officer) = self.state.entities.officer() {
            let speaker = officer.name.clone();
            let line = TextBlock::from(self.state.sentences.time_is_up.as_str());
            self.speak(io, speaker, &line);
        }
        self.accuse(io)?;
        Ok(Some(self.finish()))
    }

    fn announce_arrival(&mut self, io: &mut impl Interaction) {
        let arrived = self
            .state
            .entities
            .scheduled_character()
            .map(|npc| npc.name.clone());
        tracing::debug!(npc = ?arrived, now = %self.state.clock.now(), "scheduled arrival");

        let Some((speaker, text)) = self
            .state
            .entities
            .officer()
            .and_then(|npc| Some((npc.name.clone(), npc.officer()?.arrival.clone())))
        else {
            return;
        };
        if text.is_empty() {
            return;
        }
        self.speak(io, speaker.clone(), &text);
        self.state.record_memo(text.with_heading(format!("{speaker} :")));
    }

    fn resolve_entity(
        &mut self,
        io: &mut impl Interaction,
        target: Target,
    ) -> Result<(), TurnError> {
        let actions = entity_actions(self.state, target);
        let labels: Vec<String> = actions
            .iter()
            .map(|action| action.kind.label(&self.state.sentences.actions).to_owned())
            .collect();
        let chosen = actions[choose(io, &self.state.sentences.which_action, &labels)?];

        match chosen.kind {
            ActionKind::None => Ok(()),
            ActionKind::Accuse => self.accuse(io),
            _ => match Action::from_descriptor(chosen) {
                Some(action) => self.execute(io, &action),
                None => Ok(()),
            },
        }
    }

    fn resolve_command(&mut self, io: &mut impl Interaction, kind: ActionKind) -> Result<(), TurnError> {
        match kind {
            ActionKind::ChangeRoom => self.change_room(io),
            ActionKind::ReadMemo => {
                let entries = self
                    .state
                    .progress
                    .memo()
                    .iter()
                    .map(|entry| MemoEntry {
                        at: entry.at,
                        text: self.personalize(&entry.text),
                    })
                    .collect();
                io.narrate(Narration::Memo {
                    title: self.state.sentences.memo_title.clone(),
                    entries,
                });
                Ok(())
            }
            ActionKind::Help => {
                io.narrate(Narration::Help {
                    title: self.state.sentences.help_title.clone(),
                    text: self.personalize(&self.state.help),
                });
                Ok(())
            }
            ActionKind::None => Ok(()),
            other => {
                tracing::warn!(kind = %other, "not a menu command");
                Ok(())
            }
        }
    }

    fn change_room(&mut self, io: &mut impl Interaction) -> Result<(), TurnError> {
        let here = self.state.current_room();
        let neighbors = self.state.world.neighbors(here).to_vec();
        let trapdoor = self.state.world.trapdoor(here);

        let mut labels: Vec<String> = neighbors
            .iter()
            .map(|&room| {
                if Some(room) == trapdoor {
                    self.state.sentences.trapdoor.clone()
                } else {
                    self.state
                        .world
                        .room(room)
                        .map(|room| room.name.clone())
                        .unwrap_or_default()
                }
            })
            .collect();
        labels.push(self.state.sentences.actions.none.clone());

        let index = choose(io, &self.state.sentences.change_room, &labels)?;
        match neighbors.get(index) {
            Some(&destination) => self.execute(io, &Action::Move(MoveAction::new(destination))),
            None => Ok(()),
        }
    }

    /// Asks for a suspect then a weapon among every candidate in the world.
    fn accuse(&mut self, io: &mut impl Interaction) -> Result<(), TurnError> {
        let (suspects, weapons) = accusation_candidates(self.state);
        let suspect_ids: Vec<_> = suspects.iter().map(|npc| npc.id).collect();
        let suspect_names: Vec<String> = suspects.iter().map(|npc| npc.name.clone()).collect();
        let weapon_ids: Vec<_> = weapons.iter().map(|item| item.id).collect();
        let weapon_names: Vec<String> = weapons.iter().map(|item| item.name.clone()).collect();

        let suspect = suspect_ids[choose(io, &self.state.sentences.accuse_killer, &suspect_names)?];
        let weapon = weapon_ids[choose(io, &self.state.sentences.accuse_weapon, &weapon_names)?];

        self.execute(io, &Action::Accuse(AccuseAction::new(suspect, weapon)))
    }

    /// Runs one action through the engine. Rejections are logged and ignored.
    fn execute(&mut self, io: &mut impl Interaction, action: &Action) -> Result<(), TurnError> {
        let outcome = match GameEngine::new(self.state).execute(action) {
            Ok(outcome) => outcome,
            Err(err) if err.severity().is_no_op() => {
                tracing::warn!(code = err.error_code(), error = %err, "action rejected");
                return Ok(());
            }
            Err(err) => {
                tracing::error!(code = err.error_code(), error = %err, "action failed");
                return Err(err.into());
            }
        };

        match outcome.result {
            ActionResult::Observed(text)
            | ActionResult::SpecialObserved(text)
            | ActionResult::Collected(text)
            | ActionResult::Talked(text)
            | ActionResult::SpecialTalked(text) => {
                if !text.is_empty() {
                    io.narrate(Narration::Text(self.personalize(&text)));
                }
            }
            ActionResult::Accused(accusation) => self.conclude(io, &accusation),
            ActionResult::Moved(_) => {}
        }
        Ok(())
    }

    fn finish(&mut self) -> TurnOutcome {
        self.phase = TurnPhase::Ended;
        TurnOutcome::Ended {
            won: self.state.progress.is_won(),
        }
    }

    // ========================================================================
    // Presentation helpers
    // ========================================================================

    fn menu_label(&self, entry: &MenuEntry) -> String {
        match entry {
            MenuEntry::Inspect(Target::Item(id)) => self
                .state
                .entities
                .item(*id)
                .map(|item| item.name.clone())
                .unwrap_or_default(),
            MenuEntry::Inspect(Target::Npc(id)) => self
                .state
                .entities
                .npc(*id)
                .map(|npc: &NpcState| npc.name.clone())
                .unwrap_or_default(),
            MenuEntry::Command(kind) => kind.label(&self.state.sentences.actions).to_owned(),
        }
    }

    fn personalize(&self, text: &TextBlock) -> TextBlock {
        text.personalize(&self.state.progress.player_name)
    }

    fn speak(&self, io: &mut impl Interaction, speaker: String, text: &TextBlock) {
        io.narrate(Narration::Speech {
            speaker,
            text: self.personalize(text),
        });
    }
}

/// Asks the collaborator and enforces the index contract.
fn choose(io: &mut impl Interaction, prompt: &str, options: &[String]) -> Result<usize, TurnError> {
    let index = io.choose(prompt, options);
    if index >= options.len() {
        return Err(TurnError::ChoiceOutOfRange {
            index,
            len: options.len(),
        });
    }
    Ok(index)
}

/// Seed for the officer's line: the clock time is folded into the nonce so
/// revisiting a room later in the day can draw a different reaction.
fn reaction_seed(state: &GameState, room: RoomId) -> u64 {
    let minutes = u64::from(state.clock.now().total_minutes());
    compute_seed(
        state.game_seed,
        state.nonce ^ (minutes << 32),
        room.index() as u32,
        SeedContext::OfficerReaction,
    )
}
