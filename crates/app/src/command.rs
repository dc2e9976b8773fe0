//! Command parsing: one line in, one tagged [`Command`] out.
//!
//! The first field selects the domain keyword; the remaining fields are
//! shaped per device. Argument *validation* is left to the device models so
//! that their documented checking order is preserved; this module only
//! decides which operation a line names and extracts its raw arguments.

use barbos_domain::device::DeviceKind;
use barbos_domain::numeric::parse_leading_int;
use barbos_domain::tokenizer::split;

/// Field separator of the line protocol.
pub const SEPARATOR: char = ' ';

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Therm(ThermostatCommand),
    Info,
    Alarm(AlarmCommand),
    Speaker(SpeakerCommand),
    Help,
    /// Unrecognised keyword.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThermostatCommand {
    Read { time: String, date: String },
    Set { time: String, date: String, temp: i64 },
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmCommand {
    Armed,
    Arm,
    /// `None` when the line does not carry exactly four code fields.
    Disarm(Option<[i64; 4]>),
    Info,
    SetTest(String),
    Test(i64),
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerCommand {
    Queue(Option<String>),
    Play,
    Review { score: i64, song: Option<String> },
    Popular,
    Unknown(String),
}

impl Command {
    /// Parse a raw command line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let fields = split(line, SEPARATOR);
        let (keyword, args) = fields.split_first().map_or(("", &[][..]), |(k, a)| (*k, a));
        let last = fields.last().copied().unwrap_or_default();

        match keyword {
            "THERM" => Self::Therm(parse_thermostat(args)),
            "INFO" => Self::Info,
            "ALARM" => Self::Alarm(parse_alarm(args, last)),
            "SPEAKER" => Self::Speaker(parse_speaker(args)),
            "HELP" | "help" => Self::Help,
            other => Self::Invalid(other.to_string()),
        }
    }

    /// The device this command is routed to, if any.
    #[must_use]
    pub fn device(&self) -> Option<DeviceKind> {
        match self {
            Self::Therm(_) => Some(DeviceKind::Thermostat),
            Self::Alarm(_) => Some(DeviceKind::Alarm),
            Self::Speaker(_) => Some(DeviceKind::Speaker),
            Self::Info | Self::Help | Self::Invalid(_) => None,
        }
    }

    /// Keyword naming this command, safe to log. Arguments are never
    /// included, and an unrecognised keyword is reported as `invalid`.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Therm(_) => "THERM",
            Self::Info => "INFO",
            Self::Alarm(_) => "ALARM",
            Self::Speaker(_) => "SPEAKER",
            Self::Help => "HELP",
            Self::Invalid(_) => "invalid",
        }
    }
}

fn arg<'a>(args: &[&'a str], index: usize) -> &'a str {
    args.get(index).copied().unwrap_or_default()
}

fn parse_thermostat(args: &[&str]) -> ThermostatCommand {
    let time = arg(args, 1).to_string();
    let date = arg(args, 2).to_string();
    match arg(args, 0) {
        "read" => ThermostatCommand::Read { time, date },
        "set" => ThermostatCommand::Set {
            time,
            date,
            temp: parse_leading_int(arg(args, 3)),
        },
        other => ThermostatCommand::Unknown(other.to_string()),
    }
}

fn parse_alarm(args: &[&str], last: &str) -> AlarmCommand {
    match arg(args, 0) {
        "armed?" => AlarmCommand::Armed,
        "arm" => AlarmCommand::Arm,
        "disarm" => AlarmCommand::Disarm(parse_code(&args[1..])),
        "info" => AlarmCommand::Info,
        "settest" => AlarmCommand::SetTest(last.to_string()),
        "test" => AlarmCommand::Test(parse_leading_int(last)),
        other => AlarmCommand::Unknown(other.to_string()),
    }
}

fn parse_code(fields: &[&str]) -> Option<[i64; 4]> {
    match fields {
        [a, b, c, d] => Some([a, b, c, d].map(|f| parse_leading_int(f))),
        _ => None,
    }
}

fn parse_speaker(args: &[&str]) -> SpeakerCommand {
    let song = |index: usize| args.get(index).map(|s| (*s).to_string());
    match arg(args, 0) {
        "queue" => SpeakerCommand::Queue(song(1)),
        "play" => SpeakerCommand::Play,
        "review" => SpeakerCommand::Review {
            score: parse_leading_int(arg(args, 1)),
            song: song(2),
        },
        "popular" => SpeakerCommand::Popular,
        other => SpeakerCommand::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_thermostat_read() {
        assert_eq!(
            Command::parse("THERM read day monday"),
            Command::Therm(ThermostatCommand::Read {
                time: "day".to_string(),
                date: "monday".to_string()
            })
        );
    }

    #[test]
    fn should_parse_thermostat_set_with_lenient_temperature() {
        assert_eq!(
            Command::parse("THERM set night 3 70F"),
            Command::Therm(ThermostatCommand::Set {
                time: "night".to_string(),
                date: "3".to_string(),
                temp: 70
            })
        );
    }

    #[test]
    fn should_default_missing_thermostat_fields_to_empty() {
        assert_eq!(
            Command::parse("THERM read"),
            Command::Therm(ThermostatCommand::Read {
                time: String::new(),
                date: String::new()
            })
        );
    }

    #[test]
    fn should_parse_disarm_with_exactly_four_fields() {
        assert_eq!(
            Command::parse("ALARM disarm 1 3 3 7"),
            Command::Alarm(AlarmCommand::Disarm(Some([1, 3, 3, 7])))
        );
    }

    #[test]
    fn should_mark_disarm_without_four_fields() {
        assert_eq!(
            Command::parse("ALARM disarm 1 3 3"),
            Command::Alarm(AlarmCommand::Disarm(None))
        );
        assert_eq!(
            Command::parse("ALARM disarm 1 3 3 7 9"),
            Command::Alarm(AlarmCommand::Disarm(None))
        );
    }

    #[test]
    fn should_take_settest_pattern_from_last_field() {
        assert_eq!(
            Command::parse("ALARM settest a b ding"),
            Command::Alarm(AlarmCommand::SetTest("ding".to_string()))
        );
    }

    #[test]
    fn should_parse_test_count_from_last_field() {
        assert_eq!(
            Command::parse("ALARM test 3"),
            Command::Alarm(AlarmCommand::Test(3))
        );
        assert_eq!(
            Command::parse("ALARM test many"),
            Command::Alarm(AlarmCommand::Test(0))
        );
    }

    #[test]
    fn should_name_keyword_without_arguments() {
        assert_eq!(Command::parse("ALARM disarm 1 3 3 7").keyword(), "ALARM");
        assert_eq!(Command::parse("help").keyword(), "HELP");
        assert_eq!(Command::parse("secret 1 2").keyword(), "invalid");
    }

    #[test]
    fn should_parse_speaker_review() {
        assert_eq!(
            Command::parse("SPEAKER review -2 song1"),
            Command::Speaker(SpeakerCommand::Review {
                score: -2,
                song: Some("song1".to_string())
            })
        );
    }

    #[test]
    fn should_parse_queue_without_song() {
        assert_eq!(
            Command::parse("SPEAKER queue"),
            Command::Speaker(SpeakerCommand::Queue(None))
        );
    }

    #[test]
    fn should_accept_lowercase_help() {
        assert_eq!(Command::parse("HELP"), Command::Help);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn should_reject_differently_cased_keywords() {
        assert_eq!(
            Command::parse("therm read day monday"),
            Command::Invalid("therm".to_string())
        );
        assert_eq!(Command::parse("Info"), Command::Invalid("Info".to_string()));
    }

    #[test]
    fn should_treat_empty_line_as_invalid() {
        assert_eq!(Command::parse(""), Command::Invalid(String::new()));
    }

    #[test]
    fn should_keep_unknown_subcommand_routed_to_device() {
        let command = Command::parse("ALARM explode");
        assert_eq!(command, Command::Alarm(AlarmCommand::Unknown("explode".to_string())));
        assert_eq!(command.device(), Some(DeviceKind::Alarm));
    }

    #[test]
    fn should_not_route_info_to_a_device() {
        assert_eq!(Command::parse("INFO").device(), None);
    }
}
