//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation of the lane-catch game. It has no
//! dependencies on terminal, input, audio or storage code, which makes it:
//!
//! - **Deterministic**: a fixed seed and an identical tick/input sequence
//!   reproduce a run exactly (fixed-point actor motion, integer timers)
//! - **Testable**: every rule is reachable from `GameState` methods
//! - **Portable**: adapters read [`GameSnapshot`] and react to [`TickEvent`]s
//!
//! # Module Structure
//!
//! - [`rng`]: xorshift lane picker
//! - [`actor`]: jumpers and the three lane paths
//! - [`difficulty`]: score-driven tick/spawn/speed curves
//! - [`scoring`]: perfect/grace classification and combo window
//! - [`game_state`]: the run itself and its `tick`
//! - [`snapshot`]: copyable view for rendering
//! - [`timestep`]: real time → whole ticks
//!
//! # Example
//!
//! ```
//! use tui_jumper_core::GameState;
//! use tui_jumper_types::{GameAction, Mode};
//!
//! let mut game = GameState::new(Mode::A, 0);
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::MoveRight);
//! game.tick();
//!
//! assert_eq!(game.player_pos(), 2);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! [`TickEvent`]: tui_jumper_types::TickEvent

pub mod actor;
pub mod difficulty;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timestep;

pub use tui_jumper_types as types;

pub use actor::{Actor, LANE_PATHS};
pub use game_state::{GameState, TickEvents};
pub use rng::Xorshift32;
pub use scoring::{classify, combo_points, CatchKind, Combo};
pub use snapshot::{ActorSnapshot, GameSnapshot};
pub use timestep::FixedStep;
