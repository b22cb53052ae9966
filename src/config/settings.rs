//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::i18n::translations::DEFAULT_LOCALE;

/// Prefix of environment variables overriding settings, e.g.
/// `SITE_I18N_I18N__DEFAULT_LOCALE=ko`.
pub const ENV_PREFIX: &str = "SITE_I18N";

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_locale: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `site_i18n=debug,warn`
    pub level: String,
    /// Directory for a daily rolling log file; stderr only when unset
    pub file_path: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Settings {
    /// Load settings from an optional `config` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load settings from the given file (which must exist) and environment variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SiteI18nError> {
        super::validation::validate_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.i18n.default_locale, "en");
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.file_path.is_none());
    }
}
