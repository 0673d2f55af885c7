use crate::error::{ErrorSeverity, GameError};
use crate::state::GameTime;

/// Minute cost of every clock-advancing action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionDurations {
    pub movement: u32,
    pub collect: u32,
    /// Base cost; the entity's extra observe time is added on top.
    pub observe: u32,
    /// Base cost; a suspect's extra talk time is added on top.
    pub talk: u32,
    pub special_talk: u32,
    pub special_observe: u32,
}

impl ActionDurations {
    pub const DEFAULT_MOVE: u32 = 10;
    pub const DEFAULT_COLLECT: u32 = 10;
    pub const DEFAULT_OBSERVE: u32 = 10;
    pub const DEFAULT_TALK: u32 = 60;
    pub const DEFAULT_SPECIAL_TALK: u32 = 20;
    pub const DEFAULT_SPECIAL_OBSERVE: u32 = 10;
}

impl Default for ActionDurations {
    fn default() -> Self {
        Self {
            movement: Self::DEFAULT_MOVE,
            collect: Self::DEFAULT_COLLECT,
            observe: Self::DEFAULT_OBSERVE,
            talk: Self::DEFAULT_TALK,
            special_talk: Self::DEFAULT_SPECIAL_TALK,
            special_observe: Self::DEFAULT_SPECIAL_OBSERVE,
        }
    }
}

/// Session timing parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Time on the clock when the session begins; also the hour floor.
    pub start: GameTime,
    /// Hour at which the scheduled character arrives.
    pub arrival_hour: u32,
    /// Time at which the investigation is over and an accusation is forced.
    pub end: GameTime,
    pub durations: ActionDurations,
}

impl GameConfig {
    pub const DEFAULT_START: GameTime = GameTime::new(8, 0);
    pub const DEFAULT_ARRIVAL_HOUR: u32 = 12;
    pub const DEFAULT_END: GameTime = GameTime::new(18, 0);

    pub fn new() -> Self {
        Self {
            start: Self::DEFAULT_START,
            arrival_hour: Self::DEFAULT_ARRIVAL_HOUR,
            end: Self::DEFAULT_END,
            durations: ActionDurations::default(),
        }
    }

    /// Checks that every time is a real wall-clock time and that the session
    /// runs forward: `start <= arrival <= end`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, time) in [("start", self.start), ("end", self.end)] {
            if time.minute >= 60 {
                return Err(ConfigError::InvalidMinute {
                    field,
                    minute: time.minute,
                });
            }
            if time.hour >= 24 {
                return Err(ConfigError::InvalidHour {
                    field,
                    hour: time.hour,
                });
            }
        }
        if self.arrival_hour >= 24 {
            return Err(ConfigError::InvalidHour {
                field: "arrival_hour",
                hour: self.arrival_hour,
            });
        }

        let arrival = GameTime::new(self.arrival_hour, 0);
        if self.start.hour > self.arrival_hour {
            return Err(ConfigError::ArrivalBeforeStart {
                start: self.start,
                arrival_hour: self.arrival_hour,
            });
        }
        if arrival > self.end || self.start > self.end {
            return Err(ConfigError::EndTooEarly {
                end: self.end,
                start: self.start,
                arrival_hour: self.arrival_hour,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A clock configuration that cannot drive a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} minute {minute} is not within 0..60")]
    InvalidMinute { field: &'static str, minute: u32 },

    #[error("{field} hour {hour} is not within 0..24")]
    InvalidHour { field: &'static str, hour: u32 },

    #[error("arrival hour {arrival_hour} precedes the start time {start}")]
    ArrivalBeforeStart { start: GameTime, arrival_hour: u32 },

    #[error("end time {end} does not follow start {start} and arrival hour {arrival_hour}")]
    EndTooEarly {
        end: GameTime,
        start: GameTime,
        arrival_hour: u32,
    },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMinute { .. } => "CONFIG_INVALID_MINUTE",
            Self::InvalidHour { .. } => "CONFIG_INVALID_HOUR",
            Self::ArrivalBeforeStart { .. } => "CONFIG_ARRIVAL_BEFORE_START",
            Self::EndTooEarly { .. } => "CONFIG_END_TOO_EARLY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(start: GameTime, arrival_hour: u32, end: GameTime) -> GameConfig {
        GameConfig {
            start,
            arrival_hour,
            end,
            ..GameConfig::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(
            with(GameTime::new(8, 30), 8, GameTime::new(8, 45)).validate(),
            Ok(())
        );
    }

    #[test]
    fn minutes_must_stay_below_sixty() {
        let config = with(GameTime::new(8, 0), 12, GameTime::new(18, 60));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMinute {
                field: "end",
                minute: 60
            })
        );

        let config = with(GameTime::new(8, 75), 12, GameTime::new(18, 0));
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidMinute {
                field: "start",
                minute: 75
            }
        );
        assert_eq!(err.error_code(), "CONFIG_INVALID_MINUTE");
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn hours_must_fit_a_day() {
        let config = with(GameTime::new(8, 0), 24, GameTime::new(18, 0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidHour {
                field: "arrival_hour",
                ..
            })
        ));
    }

    #[test]
    fn arrival_cannot_precede_start() {
        let config = with(GameTime::new(9, 0), 8, GameTime::new(18, 0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArrivalBeforeStart { .. })
        ));
    }

    #[test]
    fn end_must_follow_arrival_and_start() {
        let config = with(GameTime::new(8, 0), 12, GameTime::new(11, 59));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EndTooEarly { .. })
        ));

        let config = with(GameTime::new(8, 30), 8, GameTime::new(8, 15));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EndTooEarly { .. })
        ));
    }
}
