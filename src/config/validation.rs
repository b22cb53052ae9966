//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::translations::TRANSLATIONS;
use crate::utils::errors::{SiteI18nError, Result};
use crate::utils::logging::parse_filter;
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(SiteI18nError::Config(
            "Default locale is required".to_string()
        ));
    }

    if !TRANSLATIONS.iter().any(|(locale, _)| *locale == config.default_locale) {
        let available: Vec<&str> = TRANSLATIONS.iter().map(|(locale, _)| *locale).collect();
        return Err(SiteI18nError::Config(
            format!("Default locale '{}' has no translations. Available: {:?}", config.default_locale, available)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SiteI18nError::Config(
            "Log level is required".to_string()
        ));
    }

    parse_filter(&config.level)?;

    if let Some(ref file_path) = config.file_path {
        if file_path.is_empty() {
            return Err(SiteI18nError::Config(
                "Log file path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}
