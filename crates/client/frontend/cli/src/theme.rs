//! Terminal styling for narration.
use crossterm::style::{StyledContent, Stylize};
use game_core::{GameTime, Verdict};

pub fn clock(now: GameTime) -> StyledContent<String> {
    format!("=== {now} ===").bold().cyan()
}

pub fn title(text: &str) -> StyledContent<String> {
    text.to_owned().bold().yellow()
}

pub fn speaker(name: &str) -> StyledContent<String> {
    format!("{name}:").bold().green()
}

pub fn timestamp(at: GameTime) -> StyledContent<String> {
    format!("[{at}]").dim()
}

pub fn prompt(text: &str) -> StyledContent<String> {
    text.to_owned().bold()
}

pub fn option_number(number: usize) -> StyledContent<String> {
    format!("{number:>3})").dark_grey()
}

pub fn warning(text: &str) -> StyledContent<String> {
    text.to_owned().red()
}

pub fn verdict(verdict: Verdict) -> StyledContent<String> {
    match verdict {
        Verdict::Correct => "*** Case closed ***".to_owned().bold().green(),
        Verdict::Wrong => "*** The murderer walks free ***".to_owned().bold().red(),
    }
}
