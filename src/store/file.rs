//! File-backed preference store
//!
//! Keeps the preference as a one-entry TOML table in the platform config
//! directory. Read failures are treated as "no preference recorded" so a
//! corrupt file degrades to first-visit behavior instead of erroring.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use super::PreferenceStore;
use crate::constants::{PREFERENCES_FILE, PREFERENCE_KEY};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;

/// Preference store persisting to a TOML file
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store backed by the platform config directory
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(get_or_create_config_dir()?.join(PREFERENCES_FILE)))
    }

    /// The backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<Locale> {
        if !self.path.exists() {
            return None;
        }

        let value = match fs::read_to_string(&self.path) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, path = ?self.path, "Failed to read preference file");
                return None;
            }
        };

        let table: toml::Table = match value.parse() {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, path = ?self.path, "Failed to parse preference file");
                return None;
            }
        };

        table
            .get(PREFERENCE_KEY)
            .and_then(|v| v.as_str())
            .and_then(Locale::from_code)
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut table = toml::Table::new();
        table.insert(
            PREFERENCE_KEY.to_string(),
            toml::Value::String(locale.as_str().to_string()),
        );
        fs::write(&self.path, toml::to_string(&table)?)?;
        Ok(())
    }
}
