//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for site-i18n.

use tracing::{info, warn};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::i18n::TranslationStats;
use crate::utils::errors::{SiteI18nError, Result};

/// Name of the rolling log file inside `LoggingConfig::file_path`
pub const LOG_FILE_NAME: &str = "site-i18n.log";

/// Initialize logging based on configuration
///
/// Logs always go to stderr so stdout stays free for exported data. When a
/// file path is configured, a daily rolling file is written as well; the
/// returned guard must be kept alive until shutdown to flush it.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = parse_filter(&config.level)?;

    let (file_layer, guard) = match file_writer(config) {
        Some((non_blocking, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| SiteI18nError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Parse `EnvFilter` directives such as `info` or `site_i18n=debug,warn`
pub fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| SiteI18nError::Config(format!("Invalid log filter '{}': {}", level, e)))
}

/// Non-blocking writer for the daily rolling log file, if one is configured
fn file_writer(config: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    let file_path = config.file_path.as_ref()?;
    let file_appender = tracing_appender::rolling::daily(file_path, LOG_FILE_NAME);
    Some(tracing_appender::non_blocking(file_appender))
}

/// Log a translation that had to fall back or was not found
pub fn log_missing_translation(locale: &str, key: &str, error: &SiteI18nError) {
    warn!(
        locale = locale,
        key = key,
        severity = %error.severity(),
        error = %error,
        "Missing translation"
    );
}

/// Log per-locale key counts
pub fn log_table_stats(stats: &TranslationStats) {
    for language in &stats.languages {
        info!(
            locale = language.code.as_str(),
            key_count = language.key_count,
            "Translations loaded"
        );
    }
    info!(total_keys = stats.total_keys, "Translation table ready");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_filter_is_config_error() {
        assert!(matches!(parse_filter("site_i18n=loud"), Err(SiteI18nError::Config(_))));
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("site_i18n=debug,warn").is_ok());
    }

    #[test]
    fn test_file_writer_only_when_path_set() {
        let config = LoggingConfig::default();
        assert!(file_writer(&config).is_none());

        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            file_path: Some(dir.path().to_string_lossy().into_owned()),
        };
        assert!(file_writer(&config).is_some());
    }
}
