use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

pub fn setup_tracing(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // stdout belongs to the console
        .with_writer(std::io::stderr)
        .json()
        .init();
}

pub(crate) fn log_level(config: &Configuration) -> Level {
    Level::from_str(config.log_level.as_str()).unwrap_or(Level::WARN)
}
