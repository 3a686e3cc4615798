//! Store - Persisted Language Preference
//!
//! One entry under a fixed key; absence means the visitor has not
//! decided yet. The file-backed store keeps it in the platform config
//! directory; the in-memory store backs tests and the simulator's
//! dry-run mode.

mod file;
mod memory;

pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;

use crate::error::Result;
use crate::i18n::Locale;

/// Trait for the single-entry preference storage
pub trait PreferenceStore {
    /// Recorded preference, `None` when undecided
    fn load(&self) -> Option<Locale>;

    /// Record `locale`, overwriting any previous value
    fn save(&mut self, locale: Locale) -> Result<()>;
}
