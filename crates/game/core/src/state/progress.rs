use super::case_file::Verdict;
use super::common::{GameTime, RoomId};
use super::text::TextBlock;

/// One block the player has been shown and may read again later.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoEntry {
    pub at: GameTime,
    pub text: TextBlock,
}

/// Where the player is and how the session has gone so far.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressState {
    /// Stable key used by persistence, fixed at session creation.
    pub session_id: String,
    pub player_name: String,
    pub current_room: RoomId,
    ended: bool,
    won: bool,
    memo: Vec<MemoEntry>,
}

impl ProgressState {
    pub fn new(session_id: impl Into<String>, player_name: impl Into<String>, start: RoomId) -> Self {
        Self {
            session_id: session_id.into(),
            player_name: player_name.into(),
            current_room: start,
            ended: false,
            won: false,
            memo: Vec::new(),
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Ends the session with `verdict`. Terminal: a second call changes nothing.
    pub(crate) fn conclude(&mut self, verdict: Verdict) -> bool {
        if self.ended {
            return false;
        }
        self.ended = true;
        self.won = verdict.is_correct();
        true
    }

    pub fn memo(&self) -> &[MemoEntry] {
        &self.memo
    }

    pub fn record(&mut self, at: GameTime, text: TextBlock) {
        if !text.is_empty() {
            self.memo.push(MemoEntry { at, text });
        }
    }
}
