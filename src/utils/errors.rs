//! Error handling for site-i18n
//!
//! This module defines the error type shared by the translation table,
//! configuration loading and the export binary.

use thiserror::Error;

/// Main error type for site-i18n
#[derive(Error, Debug)]
pub enum SiteI18nError {
    #[error("Locale not found: {locale}")]
    LocaleNotFound { locale: String },

    #[error("Translation key '{key}' not found for locale '{locale}'")]
    TranslationKeyNotFound { locale: String, key: String },

    #[error("Locale '{locale}' is missing translation keys: {}", .missing.join(", "))]
    KeyMismatch { locale: String, missing: Vec<String> },

    #[error("Empty translation for key '{key}' in locale '{locale}'")]
    EmptyTranslation { locale: String, key: String },

    #[error("Duplicate translation key '{key}' in locale '{locale}'")]
    DuplicateKey { locale: String, key: String },

    #[error("Duplicate locale: {0}")]
    DuplicateLocale(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for site-i18n operations
pub type Result<T> = std::result::Result<T, SiteI18nError>;

impl SiteI18nError {
    /// Whether the error comes from a lookup miss rather than broken data or setup
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            SiteI18nError::LocaleNotFound { .. } | SiteI18nError::TranslationKeyNotFound { .. }
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteI18nError::LocaleNotFound { .. } => ErrorSeverity::Warning,
            SiteI18nError::TranslationKeyNotFound { .. } => ErrorSeverity::Warning,
            SiteI18nError::KeyMismatch { .. } => ErrorSeverity::Critical,
            SiteI18nError::EmptyTranslation { .. } => ErrorSeverity::Critical,
            SiteI18nError::DuplicateKey { .. } => ErrorSeverity::Critical,
            SiteI18nError::DuplicateLocale(_) => ErrorSeverity::Critical,
            SiteI18nError::Config(_) => ErrorSeverity::Critical,
            SiteI18nError::ConfigLoad(_) => ErrorSeverity::Critical,
            SiteI18nError::Serialization(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_misses_are_warnings() {
        let err = SiteI18nError::LocaleNotFound { locale: "fr".to_string() };
        assert!(err.is_lookup_miss());
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = SiteI18nError::TranslationKeyNotFound {
            locale: "en".to_string(),
            key: "nonexistent.key".to_string(),
        };
        assert!(err.is_lookup_miss());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_data_errors_are_critical() {
        let err = SiteI18nError::KeyMismatch {
            locale: "ko".to_string(),
            missing: vec!["blog.title".to_string(), "nav.home".to_string()],
        };
        assert!(!err.is_lookup_miss());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(
            err.to_string(),
            "Locale 'ko' is missing translation keys: blog.title, nav.home"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
        assert_eq!(ErrorSeverity::Error.to_string(), "ERROR");
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
