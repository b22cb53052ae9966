//! Internationalization module
//!
//! This module holds the site's UI strings for every supported locale and
//! the read-only table used to look them up.

pub mod table;
pub mod translations;

// Re-export commonly used i18n components
pub use table::{
    global, Dictionary, LanguageStats, LocaleParity, ParityReport, TranslationStats,
    TranslationTable,
};
pub use translations::{DEFAULT_LOCALE, TRANSLATIONS};
