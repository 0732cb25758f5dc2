//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use crate::config::LoggingConfig;
use crate::errors::{LinkshortError, Result};
use tracing_appender::rolling;

/// Log file used by the TUI when no file is configured, so log lines never
/// end up on the terminal the UI is drawing on.
pub const TUI_DEFAULT_LOG_FILE: &str = "linkshort-tui.log";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr，stdout 留给命令输出
    Console,
    File(String),
    Rolling(String),
}

/// Pick the log target for a logging config
///
/// `interactive` is true in TUI mode.
pub fn resolve_target(config: &LoggingConfig, interactive: bool) -> LogTarget {
    let file = config
        .file
        .as_ref()
        .filter(|f| !f.is_empty())
        .cloned()
        .or_else(|| interactive.then(|| TUI_DEFAULT_LOG_FILE.to_string()));

    match file {
        Some(file) if config.enable_rotation => LogTarget::Rolling(file),
        Some(file) => LogTarget::File(file),
        None => LogTarget::Console,
    }
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Errors
/// * If the log file or rolling appender cannot be created
/// * If a global subscriber is already installed
pub fn init_logging(
    config: &LoggingConfig,
    interactive: bool,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let target = resolve_target(config, interactive);
    let to_console = target == LogTarget::Console;

    let writer: Box<dyn std::io::Write + Send + Sync> = match target {
        LogTarget::Rolling(log_file) => {
            let dir = std::path::Path::new(&log_file)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let filename = std::path::Path::new(&log_file)
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("linkshort.log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups as usize)
                .build(dir)
                .map_err(|e| {
                    LinkshortError::config(format!("Failed to create rolling log appender: {}", e))
                })?;
            Box::new(appender)
        }
        LogTarget::File(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .map_err(|e| {
                    LinkshortError::config(format!("Failed to open log file {}: {}", log_file, e))
                })?;
            Box::new(file)
        }
        LogTarget::Console => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

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
    installed.map_err(|e| LinkshortError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_console() {
        let config = LoggingConfig::default();
        assert_eq!(resolve_target(&config, false), LogTarget::Console);
    }

    #[test]
    fn test_tui_defaults_to_file() {
        let mut config = LoggingConfig::default();
        config.enable_rotation = false;
        assert_eq!(
            resolve_target(&config, true),
            LogTarget::File(TUI_DEFAULT_LOG_FILE.to_string())
        );
    }

    #[test]
    fn test_configured_file_with_rotation() {
        let config = LoggingConfig {
            file: Some("logs/client.log".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(
            resolve_target(&config, false),
            LogTarget::Rolling("logs/client.log".to_string())
        );
    }

    #[test]
    fn test_empty_file_name_is_ignored() {
        let config = LoggingConfig {
            file: Some(String::new()),
            ..LoggingConfig::default()
        };
        assert_eq!(resolve_target(&config, false), LogTarget::Console);
    }
}
