use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::{DomainError, LoggingConfig};

/// Initialize the logging system with console output and optional file
/// rotation.
///
/// Returns a guard that must be kept alive while the host runs; dropping it
/// flushes any remaining file logs.
pub fn init_logging(
    logs_dir: &Path,
    config: &LoggingConfig,
) -> Result<Option<WorkerGuard>, DomainError> {
    if config.file_logging {
        fs::create_dir_all(logs_dir)?;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("screenwatch={},warn", config.level)));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(env_filter);

    if config.file_logging {
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("screenwatch")
            .filename_suffix("log")
            .max_log_files(config.max_files as usize)
            .build(logs_dir)
            .map_err(|e| DomainError::Io(e.to_string()))?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(EnvFilter::new(format!("screenwatch={}", config.level)));

        // try_init so a host that already installed a subscriber is left alone
        if tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .is_ok()
        {
            tracing::info!(
                logs_dir = ?logs_dir,
                level = config.level,
                "Logging initialized with file output"
            );
        }

        Ok(Some(guard))
    } else {
        let _ = tracing_subscriber::registry().with(console_layer).try_init();

        tracing::info!(level = config.level, "Logging initialized (console only)");

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_logging_initialization() {
        // The global subscriber can only be installed once per process, so
        // this exercises init without asserting on emitted output.
        let temp_dir = env::temp_dir().join("screenwatch_log_test");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = LoggingConfig {
            level: "debug".to_string(),
            file_logging: true,
            max_files: 2,
        };
        let guard = init_logging(&temp_dir, &config).unwrap();
        assert!(guard.is_some());
        assert!(temp_dir.exists());

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
