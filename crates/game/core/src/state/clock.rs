//! In-game clock and its scheduled one-shot triggers.

use super::common::GameTime;
use crate::config::GameConfig;

/// Triggers that fired during one [`GameClock::check_triggers`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTriggers {
    /// The scheduled character arrived during this check. Set at most once per session.
    pub arrival: bool,
    /// The session has run out of time.
    pub expired: bool,
}

/// Monotonic session clock.
///
/// Time only moves forward through [`advance`](Self::advance). The hour never
/// drops below the configured start hour, and the arrival latch flips once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    now: GameTime,
    start_hour: u32,
    arrival_hour: u32,
    end: GameTime,
    arrived: bool,
}

impl GameClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            now: config.start,
            start_hour: config.start.hour,
            arrival_hour: config.arrival_hour,
            end: config.end,
            arrived: false,
        }
    }

    pub fn now(&self) -> GameTime {
        self.now
    }

    pub fn has_arrived(&self) -> bool {
        self.arrived
    }

    /// Adds `minutes`, rolling whole hours over. Zero is a no-op.
    pub fn advance(&mut self, minutes: u32) -> GameTime {
        if minutes > 0 {
            let total = self.now.minute.saturating_add(minutes);
            self.now.hour = self.now.hour.saturating_add(total / 60);
            self.now.minute = total % 60;
        }
        if self.now.hour < self.start_hour {
            self.now.hour = self.start_hour;
        }
        self.now
    }

    /// Expiry threshold: the hour has reached the end hour and, independently,
    /// the minute has reached the end minute.
    pub fn is_expired(&self) -> bool {
        self.now.hour >= self.end.hour && self.now.minute >= self.end.minute
    }

    /// Evaluates the scheduled triggers against the current time.
    ///
    /// The arrival fires the first time the hour is at or past the arrival
    /// hour, so a long action that jumps over that hour still brings the
    /// character in.
    pub fn check_triggers(&mut self) -> ClockTriggers {
        let arrival = !self.arrived && self.now.hour >= self.arrival_hour;
        if arrival {
            self.arrived = true;
        }
        ClockTriggers {
            arrival,
            expired: self.is_expired(),
        }
    }
}
