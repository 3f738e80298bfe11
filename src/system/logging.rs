//! Logging system initialization
//!
//! Sets up the `tracing` subscriber from [`LoggingConfig`].

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{Result, SignalError};

const DEFAULT_LOG_NAME: &str = "signal-registry.log";

type BoxedWriter = Box<dyn std::io::Write + Send + Sync>;

fn build_writer(config: &LoggingConfig) -> Result<BoxedWriter> {
    let Some(log_file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
        return Ok(Box::new(std::io::stderr()));
    };

    if config.enable_rotation {
        // 按天滚动的日志文件
        let path = Path::new(log_file);
        let dir = path.parent().unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_NAME);
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| SignalError::logging(format!("Failed to create rolling log appender: {}", e)))?;
        return Ok(Box::new(appender));
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| SignalError::logging(format!("Failed to open log file {}: {}", log_file, e)))?;
    Ok(Box::new(file))
}

/// Initialize the global tracing subscriber.
///
/// The returned [`WorkerGuard`] must be kept alive for the duration of the
/// program so buffered log lines get flushed.
///
/// Fails if the filter directive is invalid, the log file cannot be opened,
/// or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| SignalError::logging(format!("Invalid log level '{}': {}", config.level, e)))?;

    let writer = build_writer(config)?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);

    let to_console = config.file.as_deref().is_none_or(|f| f.is_empty());
    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| SignalError::logging(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "signal_registry=verbose".to_string(),
            ..Default::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, SignalError::Logging(_)));
    }

    #[test]
    fn test_plain_file_writer_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("signals.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            enable_rotation: false,
            ..Default::default()
        };

        let _writer = build_writer(&config).unwrap();
        assert!(path.exists());
    }
}
