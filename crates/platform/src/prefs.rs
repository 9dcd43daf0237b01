//! Persisted preferences: sound on/off and the best score.

use crate::storage::{KeyValueStore, StoreError};

/// Storage key for the "sound enabled" flag (`"true"` / `"false"`).
pub const SOUND_ENABLED_KEY: &str = "gnw_sound_enabled";

/// Storage key for the best score (decimal).
pub const HIGH_SCORE_KEY: &str = "gnw_high_score";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefs {
    pub sound_enabled: bool,
    pub high_score: u32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            high_score: 0,
        }
    }
}

impl Prefs {
    /// Read both flags. Missing or malformed values fall back to defaults.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let defaults = Self::default();

        let sound_enabled = match store.get(SOUND_ENABLED_KEY).as_deref() {
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                log::warn!("ignoring stored {SOUND_ENABLED_KEY}={other:?}");
                defaults.sound_enabled
            }
            None => defaults.sound_enabled,
        };

        let high_score = match store.get(HIGH_SCORE_KEY) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring stored {HIGH_SCORE_KEY}={raw:?}");
                defaults.high_score
            }),
            None => defaults.high_score,
        };

        Self {
            sound_enabled,
            high_score,
        }
    }

    pub fn save_sound_enabled(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(SOUND_ENABLED_KEY, if self.sound_enabled { "true" } else { "false" })
    }

    pub fn save_high_score(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(HIGH_SCORE_KEY, &self.high_score.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn empty_store_gives_defaults() {
        let prefs = Prefs::load(&MemoryStore::new());
        assert_eq!(prefs, Prefs::default());
        assert!(prefs.sound_enabled);
        assert_eq!(prefs.high_score, 0);
    }

    #[test]
    fn malformed_values_fall_back() {
        let store = MemoryStore::new()
            .with_entry(SOUND_ENABLED_KEY, "loud")
            .with_entry(HIGH_SCORE_KEY, "-4");
        assert_eq!(Prefs::load(&store), Prefs::default());
    }

    #[test]
    fn stored_values_load() {
        let store = MemoryStore::new()
            .with_entry(SOUND_ENABLED_KEY, "false")
            .with_entry(HIGH_SCORE_KEY, " 37 ");
        let prefs = Prefs::load(&store);
        assert!(!prefs.sound_enabled);
        assert_eq!(prefs.high_score, 37);
    }

    #[test]
    fn saves_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let prefs = Prefs {
            sound_enabled: false,
            high_score: 9,
        };
        prefs.save_sound_enabled(&mut store).unwrap();
        prefs.save_high_score(&mut store).unwrap();
        assert_eq!(Prefs::load(&store), prefs);
    }
}
