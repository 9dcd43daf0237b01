//! TUI Jumper (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`tui_jumper::{core,input,platform,term,types}`) and hosts the
//! [`session::Session`] that wires the simulation to storage and audio.

pub use tui_jumper_core as core;
pub use tui_jumper_input as input;
pub use tui_jumper_platform as platform;
pub use tui_jumper_term as term;
pub use tui_jumper_types as types;

pub mod session;

pub use session::Session;
