//! Platform adapters: persisted preferences and audio cues.
//!
//! Neither adapter may disturb the simulation. Reads fall back to safe
//! defaults, and sound output failures are logged and dropped.

pub mod audio;
pub mod prefs;
pub mod storage;

pub use tui_jumper_types as types;

pub use audio::{Bell, Cue, Silent, Sound, Tone};
pub use prefs::{Prefs, HIGH_SCORE_KEY, SOUND_ENABLED_KEY};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
