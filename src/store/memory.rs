//! In-memory preference store

use super::PreferenceStore;
use crate::error::Result;
use crate::i18n::Locale;

/// Preference store holding its entry in memory
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Option<Locale>,
}

impl MemoryPreferenceStore {
    /// Create an empty store (no preference recorded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a preference already recorded
    pub fn with(locale: Locale) -> Self {
        Self {
            value: Some(locale),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<Locale> {
        self.value
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        self.value = Some(locale);
        Ok(())
    }
}
