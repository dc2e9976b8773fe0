//! Command dispatcher: routes parsed commands to devices and renders replies.
//!
//! Routing to a device re-seats the registry's `last_used` key *before* the
//! device handles the command, so a command that then fails still counts as a
//! use. Every failure becomes a reply line; nothing here ends the session.

use barbos_domain::error::{ConsoleError, LookupFailure, ProtocolError, ValidationError};

use crate::command::{AlarmCommand, Command, SpeakerCommand, ThermostatCommand};
use crate::registry::Registry;

/// Version string reported by `INFO`.
pub const VERSION: &str = "barbOS v0.0";

pub const HELP_TEXT: &str = "try reversing it...";

/// Prefix of diagnostic lines.
const DEBUG_PREFIX: &str = "DEBUG: ";

/// Lines produced by one command, without terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    lines: Vec<String>,
}

impl Reply {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    fn debug(text: impl std::fmt::Display) -> Self {
        Self::line(format!("{DEBUG_PREFIX}{text}"))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The console: all device state plus the dispatcher over it.
#[derive(Debug, Clone, Default)]
pub struct Console {
    registry: Registry,
}

impl Console {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse and run one command line.
    ///
    /// The span records only the command keyword; arguments such as the
    /// disarm code never reach the logs.
    #[tracing::instrument(skip_all, fields(keyword = tracing::field::Empty))]
    pub fn execute(&mut self, line: &str) -> Reply {
        let command = Command::parse(line);
        tracing::Span::current().record("keyword", command.keyword());
        if let Some(kind) = command.device() {
            self.registry.touch(kind);
        }

        let result = match command {
            Command::Therm(cmd) => self.thermostat(cmd),
            Command::Info => Ok(self.info()),
            Command::Alarm(cmd) => self.alarm(cmd),
            Command::Speaker(cmd) => self.speaker(cmd),
            Command::Help => Ok(Reply::line(HELP_TEXT)),
            Command::Invalid(keyword) => Err(ProtocolError::UnknownKeyword(keyword).into()),
        };

        result.unwrap_or_else(render_error)
    }

    fn info(&self) -> Reply {
        Reply::debug(format!(
            "{VERSION} : num_devices {} : last used device {}",
            self.registry.len(),
            self.registry.last_used()
        ))
    }

    fn thermostat(&mut self, cmd: ThermostatCommand) -> Result<Reply, ConsoleError> {
        let thermostat = self.registry.thermostat_mut();
        match cmd {
            ThermostatCommand::Read { time, date } => {
                let temp = thermostat.read(&time, &date)?;
                Ok(Reply::line(format!("{time} {temp}")))
            }
            ThermostatCommand::Set { time, date, temp } => {
                let temp = thermostat.set(&time, &date, temp)?;
                tracing::info!(%time, %date, temp, "thermostat set");
                Ok(Reply::debug(format!("set thermostat to {temp}")))
            }
            ThermostatCommand::Unknown(name) => Err(unknown("THERM", name)),
        }
    }

    fn alarm(&mut self, cmd: AlarmCommand) -> Result<Reply, ConsoleError> {
        let alarm = self.registry.alarm_mut();
        match cmd {
            AlarmCommand::Armed => Ok(Reply::line(if alarm.is_armed() {
                "armed"
            } else {
                "not armed"
            })),
            AlarmCommand::Arm => {
                alarm.arm();
                tracing::info!("alarm armed");
                Ok(Reply::empty())
            }
            AlarmCommand::Disarm(code) => {
                let disarmed = code.is_some_and(|code| alarm.disarm(code));
                if disarmed {
                    tracing::info!("alarm disarmed");
                    Ok(Reply::line("alarm disarmed"))
                } else {
                    tracing::warn!("alarm disarm attempt failed");
                    Ok(Reply::line("alarm disarm failed"))
                }
            }
            AlarmCommand::Info => Ok(Reply::line(alarm.info())),
            AlarmCommand::SetTest(pattern) => {
                let outcome = alarm.set_test_pattern(pattern.as_bytes())?;
                tracing::debug!(?outcome, "alarm test pattern replaced");
                Ok(Reply::empty())
            }
            AlarmCommand::Test(count) => {
                let output = alarm.self_test(count)?;
                Ok(Reply::line(String::from_utf8_lossy(&output)))
            }
            AlarmCommand::Unknown(name) => Err(unknown("ALARM", name)),
        }
    }

    fn speaker(&mut self, cmd: SpeakerCommand) -> Result<Reply, ConsoleError> {
        let speaker = self.registry.speaker_mut();
        match cmd {
            SpeakerCommand::Queue(song) => {
                let song = song.ok_or(ValidationError::MissingArgument("song"))?;
                let len = speaker.enqueue(song.as_str())?;
                Ok(Reply::line(format!(
                    "playing {song} next, there are {len} in the queue"
                )))
            }
            SpeakerCommand::Play => {
                let song = speaker.play()?;
                Ok(Reply::line(format!("now playing {song}")))
            }
            SpeakerCommand::Review { score, song } => {
                let song = song.ok_or(ValidationError::MissingArgument("song"))?;
                let tally = speaker.review(&song, score)?;
                Ok(Reply::line(format!("gave review of {song}: {tally}")))
            }
            SpeakerCommand::Popular => {
                if let Some(head) = speaker.promote_popular() {
                    tracing::debug!(%head, "promoted most popular song");
                }
                Ok(Reply::line("playing most popular song next"))
            }
            SpeakerCommand::Unknown(name) => Err(unknown("SPEAKER", name)),
        }
    }
}

fn unknown(domain: &'static str, name: String) -> ConsoleError {
    ProtocolError::UnknownSubcommand { domain, name }.into()
}

fn render_error(err: ConsoleError) -> Reply {
    match &err {
        ConsoleError::Protocol(protocol) => {
            tracing::debug!(%protocol, "rejected command");
            Reply::line("invalid")
        }
        ConsoleError::Lookup(LookupFailure::NothingToPlay) => Reply::line(err.to_string()),
        ConsoleError::Capacity(violation) => {
            tracing::warn!(%violation, "test buffer write rejected");
            Reply::debug(&err)
        }
        _ => {
            tracing::debug!(%err, "command failed");
            Reply::debug(&err)
        }
    }
}
