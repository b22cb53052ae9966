//! Shared test helpers

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use site_i18n::config::ENV_PREFIX;

/// Write `contents` to `config.toml` inside a fresh temporary directory
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("Failed to write config file");
    (dir, path)
}

/// Sets an environment variable for the lifetime of the guard
pub struct EnvGuard {
    name: String,
}

impl EnvGuard {
    /// `suffix` is appended to the crate prefix, e.g. `I18N__DEFAULT_LOCALE`
    pub fn set(suffix: &str, value: &str) -> Self {
        let name = format!("{}_{}", ENV_PREFIX, suffix);
        std::env::set_var(&name, value);
        Self { name }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(&self.name);
    }
}

/// Switches the working directory for the lifetime of the guard
pub struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().expect("Failed to read working directory");
        std::env::set_current_dir(dir).expect("Failed to change working directory");
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Every key the site renders, in table order
pub fn all_keys() -> Vec<&'static str> {
    site_i18n::i18n::TRANSLATIONS[0]
        .1
        .iter()
        .map(|(key, _)| *key)
        .collect()
}
