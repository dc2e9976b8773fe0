//! Common error types used across the workspace.
//!
//! Every layer reports failures through [`ConsoleError`], built from one
//! typed error per category via `#[from]`. None of them is fatal: the console
//! renders each as a response line and keeps reading.

/// Umbrella error for everything a command can fail with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupFailure),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Capacity(#[from] CapacityViolation),
}

/// An argument could not be resolved or is out of range. No state was touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The time-of-day token is not a known name or not in `{0, 1}`.
    #[error("invalid time {0:?}")]
    InvalidTime(String),

    /// The weekday token is not a known name or outside the week.
    #[error("invalid day {0:?}")]
    InvalidDay(String),

    /// A required positional argument is absent.
    #[error("missing {0}")]
    MissingArgument(&'static str),

    /// The self-test repeat count exceeds the configured ceiling.
    #[error("repeat count {requested} exceeds maximum {max}")]
    RepeatTooLarge { requested: i64, max: usize },

    /// The speaker queue already holds `capacity` songs.
    #[error("queue full ({capacity} songs)")]
    QueueFull { capacity: usize },
}

/// A lookup found nothing to return. Reported as a sentinel, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    #[error("nothing to play")]
    NothingToPlay,

    /// A thermostat cell outside the 2×7 table was addressed.
    #[error("cell ({time}, {date}) out of bounds")]
    CellOutOfBounds { time: i64, date: i64 },

    /// Reviews are only taken for songs waiting in the queue.
    #[error("song {0:?} is not queued")]
    NotQueued(String),
}

/// The line does not name a known command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown keyword {0:?}")]
    UnknownKeyword(String),

    #[error("unknown {domain} command {name:?}")]
    UnknownSubcommand { domain: &'static str, name: String },
}

/// A write into a fixed-capacity buffer would exceed its bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{attempted} bytes do not fit in a {capacity} byte buffer")]
pub struct CapacityViolation {
    pub attempted: usize,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_console_error() {
        let err: ConsoleError = ValidationError::InvalidTime("noon".to_string()).into();
        assert!(matches!(err, ConsoleError::Validation(_)));
    }

    #[test]
    fn should_display_inner_message_transparently() {
        let err: ConsoleError = LookupFailure::NothingToPlay.into();
        assert_eq!(err.to_string(), "nothing to play");
    }

    #[test]
    fn should_display_capacity_violation_with_sizes() {
        let err = CapacityViolation {
            attempted: 12,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "12 bytes do not fit in a 8 byte buffer");
    }

    #[test]
    fn should_display_unknown_subcommand_with_domain() {
        let err = ProtocolError::UnknownSubcommand {
            domain: "ALARM",
            name: "explode".to_string(),
        };
        assert_eq!(err.to_string(), "unknown ALARM command \"explode\"");
    }
}
