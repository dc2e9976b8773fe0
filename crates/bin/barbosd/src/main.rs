//! # barbosd: barbOS console daemon
//!
//! Composition root that builds the console and serves it on stdin/stdout.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` (stderr, so stdout stays the protocol channel)
//! - Construct the device models and the registry that owns them
//! - Run the console session over the stdio transport until it closes
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no console logic belongs here.

mod config;

use anyhow::Context;
use barbos_adapter_stdio::StreamTransport;
use barbos_app::console::Console;
use barbos_app::ports::TransportError;
use barbos_app::registry::Registry;
use barbos_app::session;
use barbos_domain::alarm::Alarm;
use barbos_domain::speaker::Speaker;
use barbos_domain::test_buffer::OverflowPolicy;
use barbos_domain::thermostat::Thermostat;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter)?;

    if config.alarm.overflow_policy == OverflowPolicy::UncheckedCompat {
        tracing::warn!("unchecked test buffer writes enabled (compatibility mode)");
    }
    tracing::info!(
        overflow_policy = ?config.alarm.overflow_policy,
        read_bounds = ?config.thermostat.read_bounds,
        "barbosd starting"
    );

    let mut console = build_console(&config);
    let mut transport = StreamTransport::stdio();
    match session::run(&mut console, &mut transport, &config.session_options()).await {
        Ok(()) | Err(TransportError::Closed) => {
            tracing::info!("transport closed, exiting");
            Ok(())
        }
        Err(err) => Err(err).context("console transport failed"),
    }
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).context("invalid logging filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_console(config: &Config) -> Console {
    let thermostat = Thermostat::with_read_bounds(config.thermostat.read_bounds);
    let alarm = Alarm::builder()
        .code(config.alarm.code)
        .info(config.alarm.info.as_str())
        .test_pattern(config.alarm.test_pattern.as_str())
        .overflow_policy(config.alarm.overflow_policy)
        .max_test_repeat(config.alarm.max_test_repeat)
        .build();
    let speaker = Speaker::with_capacity(config.speaker.queue_capacity);
    Console::new(Registry::new(thermostat, alarm, speaker))
}
