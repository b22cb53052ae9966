//! Translation table and lookup
//!
//! The table is a frozen two-level map, `locale -> (key -> text)`, built once
//! from [`TRANSLATIONS`] the first time it is touched and never mutated
//! afterwards. Handles created with [`TranslationTable::new`] share that map
//! and only differ in their default locale, so every handle is `Send + Sync`
//! and can be read from any thread without locking.
//!
//! Two accessors are provided:
//!
//! | Accessor | Unknown locale | Unknown key |
//! |----------|----------------|-------------|
//! | [`TranslationTable::lookup`] | `Err(LocaleNotFound)` | `Err(TranslationKeyNotFound)` |
//! | [`TranslationTable::t`] | default locale | default locale's text, then the key itself |

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::translations::{Entries, DEFAULT_LOCALE, TRANSLATIONS};
use crate::utils::errors::{Result, SiteI18nError};
use crate::utils::logging::log_missing_translation;

/// Key to text for a single locale.
pub type Dictionary = BTreeMap<&'static str, &'static str>;

type Dictionaries = BTreeMap<&'static str, Dictionary>;

/// Returned by [`TranslationTable::t`] when asked for an empty key.
pub const EMPTY_KEY_PLACEHOLDER: &str = "<missing translation>";

static DICTIONARIES: Lazy<Arc<Dictionaries>> = Lazy::new(|| match build_dictionaries(TRANSLATIONS) {
    Ok(dictionaries) => Arc::new(dictionaries),
    Err(e) => panic!("built-in translation data is malformed: {}", e),
});

static GLOBAL: Lazy<TranslationTable> = Lazy::new(|| TranslationTable {
    dictionaries: Arc::clone(&*DICTIONARIES),
    default_locale: DEFAULT_LOCALE,
});

/// The process-wide table over the built-in data, defaulting to [`DEFAULT_LOCALE`].
pub fn global() -> &'static TranslationTable {
    &GLOBAL
}

/// Immutable translation table
#[derive(Debug, Clone)]
pub struct TranslationTable {
    dictionaries: Arc<Dictionaries>,
    default_locale: &'static str,
}

impl TranslationTable {
    /// Create a handle over the built-in data with the given default locale
    pub fn new(default_locale: &str) -> Result<Self> {
        Self::with_dictionaries(Arc::clone(&*DICTIONARIES), default_locale)
    }

    /// Build a table from arbitrary locale data
    ///
    /// Rejects duplicated locales and keys. Key parity is not enforced here;
    /// use [`TranslationTable::verify`] for that.
    pub fn from_entries(data: &'static [(&'static str, Entries)], default_locale: &str) -> Result<Self> {
        let dictionaries = build_dictionaries(data)?;
        Self::with_dictionaries(Arc::new(dictionaries), default_locale)
    }

    fn with_dictionaries(dictionaries: Arc<Dictionaries>, default_locale: &str) -> Result<Self> {
        let default_locale = dictionaries
            .get_key_value(default_locale)
            .map(|(locale, _)| *locale)
            .ok_or_else(|| SiteI18nError::LocaleNotFound {
                locale: default_locale.to_string(),
            })?;

        Ok(Self {
            dictionaries,
            default_locale,
        })
    }

    /// Get the translated text for `key` in `locale`, verbatim
    pub fn lookup(&self, locale: &str, key: &str) -> Result<&'static str> {
        let dictionary = self.dictionary(locale)?;
        dictionary
            .get(key)
            .copied()
            .ok_or_else(|| SiteI18nError::TranslationKeyNotFound {
                locale: locale.to_string(),
                key: key.to_string(),
            })
    }

    /// Get a translated text for rendering, never failing
    ///
    /// An unknown locale is replaced by the default locale. A key missing
    /// from the requested locale is looked up in the default locale, and a
    /// key missing everywhere is returned as-is so it shows up on the page.
    pub fn t<'k>(&self, locale: &str, key: &'k str) -> &'k str {
        let effective_locale = if self.has_locale(locale) {
            locale
        } else {
            warn!(
                locale = locale,
                default_locale = self.default_locale,
                "Unknown locale, falling back to default"
            );
            self.default_locale
        };

        let miss = match self.lookup(effective_locale, key) {
            Ok(text) => return text,
            Err(e) => e,
        };

        if effective_locale != self.default_locale {
            if let Ok(text) = self.lookup(self.default_locale, key) {
                warn!(
                    locale = effective_locale,
                    key = key,
                    "Translation key missing, using default locale text"
                );
                return text;
            }
        }

        log_missing_translation(effective_locale, key, &miss);
        if key.is_empty() {
            EMPTY_KEY_PLACEHOLDER
        } else {
            key
        }
    }

    /// Default locale of this handle
    pub fn default_locale(&self) -> &'static str {
        self.default_locale
    }

    /// Configured locale identifiers, sorted
    pub fn locales(&self) -> Vec<&'static str> {
        self.dictionaries.keys().copied().collect()
    }

    /// Check if a locale is configured
    pub fn has_locale(&self, locale: &str) -> bool {
        self.dictionaries.contains_key(locale)
    }

    /// Check if `locale` defines `key`
    pub fn contains_key(&self, locale: &str, key: &str) -> bool {
        self.dictionaries
            .get(locale)
            .is_some_and(|dictionary| dictionary.contains_key(key))
    }

    /// All keys of one locale, sorted
    pub fn keys(&self, locale: &str) -> Result<Vec<&'static str>> {
        Ok(self.dictionary(locale)?.keys().copied().collect())
    }

    /// The full key to text map of one locale
    pub fn dictionary(&self, locale: &str) -> Result<&Dictionary> {
        self.dictionaries
            .get(locale)
            .ok_or_else(|| SiteI18nError::LocaleNotFound {
                locale: locale.to_string(),
            })
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let languages: Vec<LanguageStats> = self
            .dictionaries
            .iter()
            .map(|(locale, dictionary)| LanguageStats {
                code: locale.to_string(),
                key_count: dictionary.len(),
            })
            .collect();

        let total_keys = self
            .dictionaries
            .get(self.default_locale)
            .map_or(0, |dictionary| dictionary.len());

        TranslationStats { languages, total_keys }
    }

    /// Compare every locale against the union of all keys
    pub fn parity_report(&self) -> ParityReport {
        let all_keys: BTreeSet<&str> = self
            .dictionaries
            .values()
            .flat_map(|dictionary| dictionary.keys().copied())
            .collect();

        let locales = self
            .dictionaries
            .iter()
            .map(|(locale, dictionary)| {
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|key| !dictionary.contains_key(**key))
                    .map(|key| key.to_string())
                    .collect();
                LocaleParity {
                    locale: locale.to_string(),
                    present: dictionary.len(),
                    missing,
                }
            })
            .collect();

        ParityReport {
            total_keys: all_keys.len(),
            locales,
        }
    }

    /// Check key parity across locales and reject blank texts
    pub fn verify(&self) -> Result<()> {
        let report = self.parity_report();
        if let Some(parity) = report.locales.into_iter().find(|p| !p.missing.is_empty()) {
            return Err(SiteI18nError::KeyMismatch {
                locale: parity.locale,
                missing: parity.missing,
            });
        }

        for (locale, dictionary) in self.dictionaries.iter() {
            if let Some((key, _)) = dictionary.iter().find(|(_, text)| text.trim().is_empty()) {
                return Err(SiteI18nError::EmptyTranslation {
                    locale: locale.to_string(),
                    key: key.to_string(),
                });
            }
        }

        debug!(total_keys = report.total_keys, "Translation table verified");
        Ok(())
    }

    /// Serialize the whole table as `{ locale: { key: text } }`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.dictionaries.as_ref())?)
    }
}

fn build_dictionaries(data: &'static [(&'static str, Entries)]) -> Result<Dictionaries> {
    let mut dictionaries = Dictionaries::new();

    for (locale, entries) in data {
        let mut dictionary = Dictionary::new();
        for (key, text) in entries.iter() {
            if dictionary.insert(*key, *text).is_some() {
                return Err(SiteI18nError::DuplicateKey {
                    locale: locale.to_string(),
                    key: key.to_string(),
                });
            }
        }

        if dictionaries.insert(*locale, dictionary).is_some() {
            return Err(SiteI18nError::DuplicateLocale(locale.to_string()));
        }
    }

    Ok(dictionaries)
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    /// Key count of the default locale
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

/// Key coverage of every locale against the union of all keys
#[derive(Debug, Clone)]
pub struct ParityReport {
    /// Number of distinct keys across all locales
    pub total_keys: usize,
    /// Per-locale coverage, sorted by locale
    pub locales: Vec<LocaleParity>,
}

impl ParityReport {
    /// True when no locale lacks any key
    pub fn is_consistent(&self) -> bool {
        self.locales.iter().all(|parity| parity.missing.is_empty())
    }
}

/// Key coverage of a single locale
#[derive(Debug, Clone)]
pub struct LocaleParity {
    pub locale: String,
    pub present: usize,
    /// Keys defined by some other locale but not this one, sorted
    pub missing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOPSIDED: &[(&str, Entries)] = &[
        ("en", &[("nav.home", "Home"), ("nav.blog", "Blog")]),
        ("ko", &[("nav.home", "Home")]),
    ];

    const BLANK: &[(&str, Entries)] = &[("en", &[("nav.home", "  ")])];

    const DUPLICATE_KEY: &[(&str, Entries)] = &[("en", &[("nav.home", "Home"), ("nav.home", "Start")])];

    const DUPLICATE_LOCALE: &[(&str, Entries)] = &[("en", &[("nav.home", "Home")]), ("en", &[])];

    #[test]
    fn test_builtin_table_is_consistent() {
        let table = global();
        assert_eq!(table.locales(), vec!["en", "ko"]);
        assert_eq!(table.default_locale(), "en");
        assert!(table.parity_report().is_consistent());
        assert!(table.verify().is_ok());
    }

    #[test]
    fn test_new_rejects_unknown_default_locale() {
        let err = TranslationTable::new("fr").unwrap_err();
        assert!(matches!(err, SiteI18nError::LocaleNotFound { ref locale } if locale == "fr"));
    }

    #[test]
    fn test_fallback_to_default_locale_text() {
        let table = TranslationTable::from_entries(LOPSIDED, "en").unwrap();
        assert_eq!(table.t("ko", "nav.blog"), "Blog");
        assert_eq!(table.t("ko", "nav.home"), "Home");
        assert_eq!(table.t("ko", "nav.notes"), "nav.notes");
    }

    #[test]
    fn test_empty_key_is_never_rendered_empty() {
        assert_eq!(global().t("en", ""), EMPTY_KEY_PLACEHOLDER);
    }

    #[test]
    fn test_parity_report_lists_missing_keys() {
        let table = TranslationTable::from_entries(LOPSIDED, "en").unwrap();
        let report = table.parity_report();

        assert!(!report.is_consistent());
        assert_eq!(report.total_keys, 2);
        assert_eq!(report.locales[0].locale, "en");
        assert!(report.locales[0].missing.is_empty());
        assert_eq!(report.locales[1].locale, "ko");
        assert_eq!(report.locales[1].present, 1);
        assert_eq!(report.locales[1].missing, vec!["nav.blog".to_string()]);
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let table = TranslationTable::from_entries(LOPSIDED, "en").unwrap();
        match table.verify() {
            Err(SiteI18nError::KeyMismatch { locale, missing }) => {
                assert_eq!(locale, "ko");
                assert_eq!(missing, vec!["nav.blog".to_string()]);
            }
            other => panic!("expected key mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_rejects_blank_text() {
        let table = TranslationTable::from_entries(BLANK, "en").unwrap();
        assert!(matches!(
            table.verify(),
            Err(SiteI18nError::EmptyTranslation { ref key, .. }) if key == "nav.home"
        ));
    }

    #[test]
    fn test_duplicates_are_rejected() {
        assert!(matches!(
            TranslationTable::from_entries(DUPLICATE_KEY, "en"),
            Err(SiteI18nError::DuplicateKey { .. })
        ));
        assert!(matches!(
            TranslationTable::from_entries(DUPLICATE_LOCALE, "en"),
            Err(SiteI18nError::DuplicateLocale(ref locale)) if locale == "en"
        ));
    }

    #[test]
    fn test_stats() {
        let stats = global().stats();
        assert_eq!(stats.total_keys, 20);
        assert_eq!(stats.languages.len(), 2);
        assert!(stats.languages.iter().all(|l| l.key_count == 20));
    }
}
