//! Logging initialization: a console layer plus two append-only file
//! sinks, one capturing error-level events only, one capturing everything
//! at the configured level. File writes go through non-blocking appenders
//! so request handling never serializes on the log sink.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Layer as _, fmt};

use crate::config::LoggingConfig;

/// Initialize the global subscriber.
///
/// The returned guards flush the non-blocking writers on drop and must be
/// held by the caller for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Vec<WorkerGuard>> {
    fs::create_dir_all(&config.dir)
        .with_context(|| format!("cannot create log directory {}", config.dir.display()))?;

    let mut guards = Vec::with_capacity(2);

    let error_file = tracing_appender::rolling::never(&config.dir, "error.log");
    let (error_writer, guard) = tracing_appender::non_blocking(error_file);
    guards.push(guard);
    let error_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(error_writer)
        .with_filter(LevelFilter::ERROR);

    let combined_file = tracing_appender::rolling::never(&config.dir, "combined.log");
    let (combined_writer, guard) = tracing_appender::non_blocking(combined_file);
    guards.push(guard);
    let combined_layer = fmt::layer().with_ansi(false).with_writer(combined_writer);

    let console_layer = config
        .console
        .then(|| fmt::layer().with_target(false));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(error_layer)
        .with(combined_layer)
        .with(console_layer)
        .init();

    Ok(guards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // Single test: the global subscriber can only be installed once per
    // test process.
    #[test]
    fn test_init_creates_sinks_and_routes_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_owned(),
            dir: PathBuf::from(dir.path()),
            console: false,
        };

        let guards = init_logging(&config).unwrap();
        tracing::info!("informational event");
        tracing::error!("error event");
        drop(guards); // flush the non-blocking writers

        let combined = fs::read_to_string(dir.path().join("combined.log")).unwrap();
        assert!(combined.contains("informational event"));
        assert!(combined.contains("error event"));

        let errors = fs::read_to_string(dir.path().join("error.log")).unwrap();
        assert!(errors.contains("error event"));
        assert!(!errors.contains("informational event"));
    }
}
