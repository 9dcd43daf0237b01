//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`].
//! Moves are not applied here: the core buffers one lane move per tick, and
//! a later move before the tick simply replaces the earlier one.

pub mod map;

pub use tui_jumper_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, PointerActions};
