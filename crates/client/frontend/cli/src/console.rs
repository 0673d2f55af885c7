//! Line-based console implementation of [`Interaction`].
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use game_core::{Interaction, Narration, TextBlock};

use crate::theme;

/// Numbered menus on an output stream, answers read line by line.
///
/// Malformed or out-of-range answers are re-prompted. When the input stream
/// ends, [`choose`](Interaction::choose) answers `options.len()` so the turn
/// loop stops with an error instead of blocking; [`is_closed`](Self::is_closed)
/// tells that case apart from a real fault.
pub struct ConsoleInterface<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl ConsoleInterface<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// True once the input stream has ended.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Free-text question. Blank answers are asked again; `None` when input ends.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        loop {
            self.emit(|out| {
                write!(out, "{} ", theme::prompt(question))?;
                out.flush()
            });
            let answer = self.read_line()?;
            if !answer.is_empty() {
                return Some(answer);
            }
        }
    }

    /// Yes/no question as a two-entry menu. `None` when input ends.
    pub fn confirm(&mut self, question: &str) -> Option<bool> {
        let options = ["Yes".to_owned(), "No".to_owned()];
        let index = self.choose(question, &options);
        (!self.closed).then_some(index == 0)
    }

    pub fn say(&mut self, text: impl Display) {
        self.emit(|out| writeln!(out, "{text}"));
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("input closed");
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_owned()),
            Err(error) => {
                tracing::warn!(%error, "failed to read input");
                self.closed = true;
                None
            }
        }
    }

    fn write_block(&mut self, text: &TextBlock) {
        self.emit(|out| {
            for line in &text.lines {
                writeln!(out, "{line}")?;
            }
            Ok(())
        });
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if let Err(error) = write(&mut self.output) {
            tracing::warn!(%error, "failed to write to console");
        }
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleInterface<R, W> {
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize {
        self.emit(|out| {
            writeln!(out)?;
            writeln!(out, "{}", theme::prompt(prompt))?;
            for (index, option) in options.iter().enumerate() {
                writeln!(out, "{} {option}", theme::option_number(index + 1))?;
            }
            Ok(())
        });

        loop {
            self.emit(|out| {
                write!(out, "> ")?;
                out.flush()
            });
            let Some(answer) = self.read_line() else {
                return options.len();
            };
            match answer.parse::<usize>() {
                Ok(number) if (1..=options.len()).contains(&number) => return number - 1,
                _ => {
                    let hint = format!("Please enter a number between 1 and {}.", options.len());
                    self.emit(|out| writeln!(out, "{}", theme::warning(&hint)));
                }
            }
        }
    }

    fn narrate(&mut self, narration: Narration) {
        match narration {
            Narration::Clock(now) => {
                self.emit(|out| {
                    writeln!(out)?;
                    writeln!(out, "{}", theme::clock(now))
                });
            }
            Narration::Room { name, description } => {
                self.say(theme::title(&name));
                self.write_block(&description);
            }
            Narration::Speech { speaker, text } => {
                self.say(theme::speaker(&speaker));
                self.write_block(&text);
            }
            Narration::Text(text) => self.write_block(&text),
            Narration::Memo { title, entries } => {
                self.say(theme::title(&title));
                if entries.is_empty() {
                    self.say("(nothing yet)");
                }
                for entry in entries {
                    self.say(theme::timestamp(entry.at));
                    self.write_block(&entry.text);
                }
            }
            Narration::Help { title, text } => {
                self.say(theme::title(&title));
                self.write_block(&text);
            }
            Narration::Verdict { verdict } => {
                self.emit(|out| {
                    writeln!(out)?;
                    writeln!(out, "{}", theme::verdict(verdict))
                });
            }
        }
    }
}
