//! Boundary between the turn loop and whoever presents it.

use crate::state::{GameTime, MemoEntry, TextBlock, Verdict};

/// Something the turn loop wants shown to the player.
///
/// Texts arrive with name placeholders already substituted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Narration {
    /// Current time, shown as the title of each turn.
    Clock(GameTime),
    Room {
        name: String,
        description: TextBlock,
    },
    /// A line spoken by a character.
    Speech { speaker: String, text: TextBlock },
    /// Result text of an action.
    Text(TextBlock),
    Memo {
        title: String,
        entries: Vec<MemoEntry>,
    },
    Help { title: String, text: TextBlock },
    Verdict { verdict: Verdict },
}

/// Input and output collaborator of the [`TurnController`](super::TurnController).
///
/// `choose` blocks until the player has picked an option and must return an
/// index in `[0, options.len())`. Re-prompting on malformed input is the
/// implementor's job.
pub trait Interaction {
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize;

    fn narrate(&mut self, narration: Narration);
}

impl<T: Interaction + ?Sized> Interaction for &mut T {
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize {
        (**self).choose(prompt, options)
    }

    fn narrate(&mut self, narration: Narration) {
        (**self).narrate(narration)
    }
}
