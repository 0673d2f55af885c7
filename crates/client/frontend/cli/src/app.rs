//! Session lifecycle around the turn loop.
use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use client_bootstrap::{SessionBuilder, describe_session};
use game_core::{GameSnapshot, GameState, Interaction, TurnController, TurnError};
use runtime::SaveService;

use crate::console::ConsoleInterface;

/// How a played session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Finish {
    Solved,
    Failed,
    /// Input ran out before the session ended.
    Interrupted,
}

/// Terminal application: resume offer, new-session setup, play and replay.
pub struct CliApp<R, W> {
    builder: SessionBuilder,
    saves: SaveService,
    console: ConsoleInterface<R, W>,
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(builder: SessionBuilder, console: ConsoleInterface<R, W>) -> Result<Self> {
        let saves = builder.save_service()?;
        Ok(Self::with_saves(builder, saves, console))
    }

    pub fn with_saves(
        builder: SessionBuilder,
        saves: SaveService,
        console: ConsoleInterface<R, W>,
    ) -> Self {
        Self {
            builder,
            saves,
            console,
        }
    }

    pub fn console(&self) -> &ConsoleInterface<R, W> {
        &self.console
    }

    pub fn run(&mut self) -> Result<()> {
        let (mut state, mut fresh) = match self.offer_resume()? {
            Some(state) => (state, false),
            None => match self.start_new(None)? {
                Some(state) => (state, true),
                None => return Ok(()),
            },
        };

        loop {
            match self.play(&mut state, fresh)? {
                Finish::Solved => return Ok(()),
                Finish::Interrupted => {
                    tracing::info!(session = %state.progress.session_id, "Session interrupted");
                    return Ok(());
                }
                Finish::Failed => {}
            }

            let replay = self.console.confirm(&state.sentences.replay);
            if replay != Some(true) {
                return Ok(());
            }
            let player = state.progress.player_name.clone();
            match self.start_new(Some(player))? {
                Some(next) => {
                    state = next;
                    fresh = true;
                }
                None => return Ok(()),
            }
        }
    }

    /// Offers the most recent unfinished save. `None` when there is none or
    /// the player declines.
    fn offer_resume(&mut self) -> Result<Option<GameState>> {
        let Some(snapshot) = self.builder.resumable(&self.saves)? else {
            return Ok(None);
        };

        let question = format!(
            "Resume the investigation started on {}?",
            describe_session(snapshot.session_id())
        );
        match self.console.confirm(&question) {
            Some(true) => self.builder.resume(snapshot).map(Some),
            _ => Ok(None),
        }
    }

    /// Asks for the player's name when unknown, then for the scenario.
    /// `None` when input ends first.
    fn start_new(&mut self, player: Option<String>) -> Result<Option<GameState>> {
        let player = match player {
            Some(name) => name,
            None => match self.console.ask("What is your name, detective?") {
                Some(name) => name,
                None => return Ok(None),
            },
        };

        let mut scenarios = self.builder.scenarios()?;
        let scenario = match scenarios.len() {
            0 => bail!(
                "no scenario found under {}",
                self.builder.config().scenario_root.display()
            ),
            1 => scenarios.remove(0),
            _ => {
                let titles: Vec<String> = scenarios.iter().map(|s| s.title.clone()).collect();
                let index = self
                    .console
                    .choose("Which case do you want to investigate?", &titles);
                if index >= scenarios.len() {
                    return Ok(None);
                }
                scenarios.swap_remove(index)
            }
        };

        self.console.say(format!("\n{}", scenario.title));
        self.builder.new_session(&scenario, &player).map(Some)
    }

    fn play(&mut self, state: &mut GameState, fresh: bool) -> Result<Finish> {
        let Self { saves, console, .. } = self;
        let saves = &*saves;

        let mut controller = TurnController::new(state);
        if fresh {
            controller.introduce(console);
            persist(saves, controller.state());
        }

        let played = controller.play_until_end(console, |state| persist(saves, state));
        match played {
            Ok(true) => Ok(Finish::Solved),
            Ok(false) => Ok(Finish::Failed),
            Err(TurnError::ChoiceOutOfRange { .. }) if console.is_closed() => {
                persist(saves, controller.state());
                Ok(Finish::Interrupted)
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn persist(saves: &SaveService, state: &GameState) {
    if let Err(error) = saves.save(&GameSnapshot::capture(state)) {
        tracing::warn!(%error, session = %state.progress.session_id, "failed to save session");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_bootstrap::ClientConfig;
    use std::path::{Path, PathBuf};

    fn shipped_scenarios() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../../data/scenarios")
    }

    fn builder(saves: &Path) -> SessionBuilder {
        SessionBuilder::new(ClientConfig {
            scenario_root: shipped_scenarios(),
            enable_persistence: true,
            save_data_dir: Some(saves.to_path_buf()),
            game_seed: Some(11),
            log_dir: None,
        })
    }

    fn run(saves: &Path, input: &str) -> (String, SaveService) {
        let console = ConsoleInterface::new(input.as_bytes(), Vec::new());
        let mut app = CliApp::new(builder(saves), console).unwrap();
        app.run().unwrap();
        let out = String::from_utf8_lossy(app.console().output()).into_owned();
        (out, SaveService::new_file_based(saves).unwrap())
    }

    // Entrance hall menu: Umbrella stand, Inspector Graves, then commands.
    // Inspector sub-menu: Accuse, None.
    // Suspects: Hawthorne, Ashford, Pike. Weapons start with the Candlestick.
    const ACCUSE_RIGHT: &str = "Holmes\n2\n1\n1\n1\n";
    const ACCUSE_WRONG: &str = "Holmes\n2\n1\n2\n1\n";

    #[test]
    fn correct_accusation_ends_the_program() {
        let dir = tempfile::tempdir().unwrap();
        let (out, saves) = run(dir.path(), ACCUSE_RIGHT);

        assert!(out.contains("What is your name"));
        assert!(out.contains("Ah, Holmes, at last."));
        assert!(out.contains("Remarkable work, Holmes"));
        assert!(out.contains("Case closed"));
        assert!(!out.contains("take the case again"));

        let listed = saves.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].ended);
        assert!(saves.latest_resumable().unwrap().is_none());
    }

    #[test]
    fn wrong_accusation_offers_replay() {
        let dir = tempfile::tempdir().unwrap();
        let (out, _) = run(dir.path(), &format!("{ACCUSE_WRONG}2\n"));

        assert!(out.contains("morning train"));
        assert!(out.contains("walks free"));
        assert!(out.contains("Would you like to take the case again?"));
        assert_eq!(out.matches("Ah, Holmes, at last.").count(), 1);
    }

    #[test]
    fn replay_keeps_the_player_name() {
        let dir = tempfile::tempdir().unwrap();
        let (out, saves) = run(dir.path(), &format!("{ACCUSE_WRONG}1\n"));

        assert_eq!(out.matches("What is your name").count(), 1);
        assert_eq!(out.matches("Ah, Holmes, at last.").count(), 2);
        // The replayed session was interrupted and stays resumable.
        let resumable = saves.latest_resumable().unwrap().unwrap();
        assert_eq!(resumable.state.progress.player_name, "Holmes");
    }

    #[test]
    fn interrupted_session_is_offered_for_resume() {
        let dir = tempfile::tempdir().unwrap();
        let (first, _) = run(dir.path(), "Marple\n");
        assert!(first.contains("Ah, Marple, at last."));

        let (second, saves) = run(dir.path(), "1\n");
        assert!(second.contains("Resume the investigation started on"));
        assert!(!second.contains("What is your name"));
        assert!(!second.contains("at last."));
        assert!(second.contains("Entrance Hall"));
        assert_eq!(saves.list().unwrap().len(), 1);
    }

    #[test]
    fn declining_resume_starts_over() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), "Marple\n");

        let (out, _) = run(dir.path(), "2\nPoirot\n");
        assert!(out.contains("What is your name"));
        assert!(out.contains("Ah, Poirot, at last."));
    }

    #[test]
    fn empty_input_quits_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let (out, saves) = run(dir.path(), "");
        assert!(out.contains("What is your name"));
        assert!(saves.list().unwrap().is_empty());
    }
}
