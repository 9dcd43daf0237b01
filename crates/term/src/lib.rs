//! Terminal presentation for the lane-catch game.
//!
//! Rendering goes through a plain framebuffer instead of a widget library:
//! `GameView` turns a `GameSnapshot` into cells (pure, testable) and
//! `TerminalRenderer` flushes only what changed since the last frame.
//! Presentation never touches `GameState`; it only reads snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_jumper_core as core;
pub use tui_jumper_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardRect, GameView, HudStatus, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
