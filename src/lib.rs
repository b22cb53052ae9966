//! site-i18n
//!
//! Korean and English UI strings of a personal website (navigation and
//! section labels) exposed as a constant translation table, together with
//! the configuration, logging and error handling around it.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{SiteI18nError, Result};
pub use i18n::{global, TranslationTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
