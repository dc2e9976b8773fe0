//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `barbos.toml` in the working directory, or at the path in
//! `BARBOS_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use barbos_app::line_reader::DEFAULT_MAX_LINE_LEN;
use barbos_app::session::{DEFAULT_PROMPT, SessionOptions};
use barbos_domain::alarm::{DEFAULT_CODE, DEFAULT_INFO, DEFAULT_TEST_PATTERN};
use barbos_domain::speaker::DEFAULT_QUEUE_CAPACITY;
use barbos_domain::test_buffer::OverflowPolicy;
use barbos_domain::thermostat::ReadBoundsCheck;
use serde::Deserialize;
use serde::de::{DeserializeOwned, IntoDeserializer};

const DEFAULT_PATH: &str = "barbos.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session presentation settings.
    pub console: ConsoleConfig,
    /// Alarm panel settings.
    pub alarm: AlarmConfig,
    /// Thermostat settings.
    pub thermostat: ThermostatConfig,
    /// Smart speaker settings.
    pub speaker: SpeakerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Prompt, banner, and line limits.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Written before every read.
    pub prompt: String,
    /// Greet with the welcome banner on start-up.
    pub banner: bool,
    /// Bytes kept from a single command line.
    pub max_line_len: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AlarmConfig {
    /// Four-part disarm code.
    pub code: [i64; 4],
    /// Text returned by `ALARM info`.
    pub info: String,
    /// Initial self-test pattern; its length fixes the buffer capacity.
    pub test_pattern: String,
    /// Handling of `settest` patterns longer than the buffer.
    pub overflow_policy: OverflowPolicy,
    /// Ceiling on the `ALARM test` repeat count.
    pub max_test_repeat: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThermostatConfig {
    /// Date validation on `THERM read`.
    pub read_bounds: ReadBoundsCheck,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SpeakerConfig {
    /// Maximum number of queued songs.
    pub queue_capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `barbos.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("BARBOS_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("BARBOS_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("BARBOS_OVERFLOW_POLICY") {
            self.alarm.overflow_policy = parse_variant("BARBOS_OVERFLOW_POLICY", &val)?;
        }
        if let Ok(val) = std::env::var("BARBOS_READ_BOUNDS") {
            self.thermostat.read_bounds = parse_variant("BARBOS_READ_BOUNDS", &val)?;
        }
        if let Ok(val) = std::env::var("BARBOS_ALARM_CODE") {
            self.alarm.code = parse_code(&val)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.alarm.test_pattern.is_empty() {
            return Err(ConfigError::Validation(
                "alarm.test_pattern must not be empty".to_string(),
            ));
        }
        if self.console.max_line_len == 0 {
            return Err(ConfigError::Validation(
                "console.max_line_len must be non-zero".to_string(),
            ));
        }
        if self.speaker.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "speaker.queue_capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Session settings derived from the `[console]` section.
    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            prompt: self.console.prompt.clone(),
            banner: self.console.banner,
            max_line_len: self.console.max_line_len,
        }
    }
}

fn parse_variant<T: DeserializeOwned>(name: &str, value: &str) -> Result<T, ConfigError> {
    T::deserialize(IntoDeserializer::<serde::de::value::Error>::into_deserializer(value))
        .map_err(|err| ConfigError::Validation(format!("{name}: {err}")))
}

fn parse_code(value: &str) -> Result<[i64; 4], ConfigError> {
    let invalid = || {
        ConfigError::Validation(format!(
            "BARBOS_ALARM_CODE must be four comma-separated integers, got {value:?}"
        ))
    };
    let digits = value
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    <[i64; 4]>::try_from(digits).map_err(|_| invalid())
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE,
            info: DEFAULT_INFO.to_string(),
            test_pattern: DEFAULT_TEST_PATTERN.to_string(),
            overflow_policy: OverflowPolicy::default(),
            max_test_repeat: 4096,
        }
    }
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "barbosd=info,barbos_app=info,barbos_adapter_stdio=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.console.prompt, "barbOS> ");
        assert!(config.console.banner);
        assert_eq!(config.alarm.code, [1, 3, 3, 7]);
        assert_eq!(config.alarm.test_pattern, "beepBEEP");
        assert_eq!(config.alarm.overflow_policy, OverflowPolicy::Reject);
        assert_eq!(config.thermostat.read_bounds, ReadBoundsCheck::Checked);
        assert_eq!(config.speaker.queue_capacity, 128);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.console.max_line_len, 4096);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [console]
            prompt = '> '
            banner = false
            max_line_len = 128

            [alarm]
            code = [4, 2, 4, 2]
            info = 'Acme Alarm'
            test_pattern = 'ding'
            overflow_policy = 'unchecked_compat'
            max_test_repeat = 16

            [thermostat]
            read_bounds = 'legacy'

            [speaker]
            queue_capacity = 4

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.console.prompt, "> ");
        assert!(!config.console.banner);
        assert_eq!(config.console.max_line_len, 128);
        assert_eq!(config.alarm.code, [4, 2, 4, 2]);
        assert_eq!(config.alarm.info, "Acme Alarm");
        assert_eq!(config.alarm.test_pattern, "ding");
        assert_eq!(config.alarm.overflow_policy, OverflowPolicy::UncheckedCompat);
        assert_eq!(config.alarm.max_test_repeat, 16);
        assert_eq!(config.thermostat.read_bounds, ReadBoundsCheck::Legacy);
        assert_eq!(config.speaker.queue_capacity, 4);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [alarm]
            overflow_policy = 'truncate'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.alarm.overflow_policy, OverflowPolicy::Truncate);
        assert_eq!(config.alarm.code, [1, 3, 3, 7]);
        assert_eq!(config.console.prompt, "barbOS> ");
    }

    #[test]
    fn should_reject_unknown_overflow_policy_in_toml() {
        let result: Result<Config, _> = toml::from_str("[alarm]\noverflow_policy = 'yolo'");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.speaker.queue_capacity, 128);
    }

    #[test]
    fn should_reject_empty_test_pattern() {
        let mut config = Config::default();
        config.alarm.test_pattern = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_queue_capacity() {
        let mut config = Config::default();
        config.speaker.queue_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_parse_policy_variant_from_string() {
        let policy: OverflowPolicy = parse_variant("X", "unchecked_compat").unwrap();
        assert_eq!(policy, OverflowPolicy::UncheckedCompat);
        assert!(parse_variant::<ReadBoundsCheck>("X", "sloppy").is_err());
    }

    #[test]
    fn should_parse_alarm_code_override() {
        assert_eq!(parse_code("9, 8,7 ,6").unwrap(), [9, 8, 7, 6]);
        assert!(parse_code("1,2,3").is_err());
        assert!(parse_code("1,2,3,x").is_err());
    }

    #[test]
    fn should_derive_session_options_from_console_section() {
        let mut config = Config::default();
        config.console.prompt = "$ ".to_string();
        config.console.banner = false;
        let options = config.session_options();
        assert_eq!(options.prompt, "$ ");
        assert!(!options.banner);
        assert_eq!(options.max_line_len, 4096);
    }
}
