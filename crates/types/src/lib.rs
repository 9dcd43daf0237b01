//! Core types shared across the workspace.
//!
//! This crate is intentionally dependency-free. It holds the game's tuning
//! constants, the lane grid geometry, and the small value types that flow
//! between the simulation core and its adapters (input, presentation, audio,
//! persistence).

/// Number of lanes shared by the player and the jumper paths.
pub const LANES: u8 = 3;

/// Depth rows in a jumper path (row 0 = windows, row `GRID_H - 1` = the net).
pub const GRID_H: u8 = 6;

/// Depth index at which a jumper resolves as caught or missed.
pub const BOTTOM_ROW: u8 = GRID_H - 1;

/// Lane the player starts in.
pub const START_LANE: u8 = 1;

/// Tick duration at the start of a run (milliseconds).
pub const START_TICK_MS: u32 = 200;

/// Fastest tick duration the difficulty ramp may reach.
pub const MIN_TICK_MS: u32 = 120;

/// Tick duration removed per `TICK_STEP_SCORE` points.
pub const TICK_STEP_MS: u32 = 5;

/// Points needed for each `TICK_STEP_MS` speed-up.
pub const TICK_STEP_SCORE: u32 = 12;

/// Spawn interval reduction per point scored (milliseconds).
pub const SPAWN_RATE_MS_PER_POINT: u32 = 6;

/// Ticks a freshly spawned jumper waits at the window before moving.
pub const SPAWN_HANG_TICKS: u8 = 2;

/// Actor list length above which dead actors are swept.
pub const COMPACT_THRESHOLD: usize = 24;

/// Misses that end a run.
pub const MAX_MISSES: u8 = 3;

/// Fixed PRNG seed used by every fresh run.
pub const RNG_SEED: u32 = 0xC0FFEE;

/// Upper bound on concurrently alive jumpers across all modes.
pub const MAX_CONCURRENT_ACTORS: usize = 2;

/// Upper bound on events a single tick can produce
/// (two resolutions plus the game-over transition).
pub const MAX_TICK_EVENTS: usize = 4;

/// One path step in milli-steps. Actor speeds are fixed-point in this unit.
pub const STEP_UNIT: u32 = 1000;

/// Speed a jumper starts moving with (milli-steps per tick).
pub const ACTOR_START_SPEED: u32 = 500;

/// Per-tick speed increase while a jumper falls (milli-steps per tick).
pub const ACTOR_ACCEL: u32 = 20;

/// Terminal fall speed (milli-steps per tick).
pub const ACTOR_MAX_SPEED: u32 = 1200;

/// Mode B raises the speed floor by this much...
pub const MODE_B_SPEED_STEP: u32 = 250;

/// ...for every this many points.
pub const MODE_B_SPEED_SCORE: u32 = 40;

/// A perfect catch keeps the combo alive for this long (milliseconds).
pub const COMBO_WINDOW_MS: u32 = 2000;

/// Combo length at which a perfect catch is worth 2 points.
pub const COMBO_TIER_DOUBLE: u32 = 3;

/// Combo length at which a perfect catch is worth 3 points.
pub const COMBO_TIER_TRIPLE: u32 = 5;

/// Screen shake intensity set by a miss (0..=100).
pub const SHAKE_ON_MISS: u8 = 100;

/// Shake decay per tick.
pub const SHAKE_DECAY: u8 = 20;

/// Upper bound on real time fed to the fixed-step accumulator per frame.
pub const MAX_FRAME_MS: u32 = 250;

/// Game variant selected on the handheld's A/B buttons.
///
/// - **A**: at most one jumper in the air, relaxed spawn cadence
/// - **B**: up to two jumpers, tighter cadence and a speed ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    A,
    B,
}

impl Mode {
    /// The other mode.
    ///
    /// ```
    /// use tui_jumper_types::Mode;
    ///
    /// assert_eq!(Mode::A.toggled(), Mode::B);
    /// assert_eq!(Mode::B.toggled(), Mode::A);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            Mode::A => Mode::B,
            Mode::B => Mode::A,
        }
    }

    /// Maximum jumpers alive at once.
    pub fn concurrency_cap(self) -> usize {
        match self {
            Mode::A => 1,
            Mode::B => 2,
        }
    }

    /// Spawn interval at score 0.
    pub fn base_spawn_interval_ms(self) -> u32 {
        match self {
            Mode::A => 1400,
            Mode::B => 1000,
        }
    }

    /// Floor for the spawn interval ramp.
    pub fn min_spawn_interval_ms(self) -> u32 {
        match self {
            Mode::A => 700,
            Mode::B => 550,
        }
    }

    /// Parse mode from string (case-insensitive).
    ///
    /// ```
    /// use tui_jumper_types::Mode;
    ///
    /// assert_eq!(Mode::from_str("a"), Some(Mode::A));
    /// assert_eq!(Mode::from_str("B"), Some(Mode::B));
    /// assert_eq!(Mode::from_str("c"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Mode::A),
            "B" => Some(Mode::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::A => "A",
            Mode::B => "B",
        }
    }
}

/// One position on a jumper path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Lane index (0..LANES).
    pub lane: u8,
    /// Depth index (0..GRID_H), 0 at the windows.
    pub depth: u8,
}

impl Cell {
    pub const fn new(lane: u8, depth: u8) -> Self {
        Self { lane, depth }
    }

    /// Whether this cell sits on the row where jumpers resolve.
    pub fn is_bottom(&self) -> bool {
        self.depth >= BOTTOM_ROW
    }
}

/// Lifecycle of a run.
///
/// `NotStarted → Running ⇄ Paused → GameOver`; only a reset leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunPhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl RunPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::NotStarted => "not_started",
            RunPhase::Running => "running",
            RunPhase::Paused => "paused",
            RunPhase::GameOver => "game_over",
        }
    }
}

/// Player intents produced by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Buffer a one-lane move to the left for the next tick
    MoveLeft,
    /// Buffer a one-lane move to the right for the next tick
    MoveRight,
    /// Start (or resume) the run
    Start,
    /// Toggle pause
    Pause,
    /// Fresh run in the same mode
    Reset,
    /// Fresh run in the other mode
    ToggleMode,
    /// Toggle sound (handled by the session, not the core)
    ToggleMute,
}

impl GameAction {
    /// Parse action from its camelCase name.
    ///
    /// ```
    /// use tui_jumper_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("togglemode"), Some(GameAction::ToggleMode));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            "togglemode" => Some(GameAction::ToggleMode),
            "togglemute" => Some(GameAction::ToggleMute),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
            GameAction::ToggleMode => "toggleMode",
            GameAction::ToggleMute => "toggleMute",
        }
    }

    /// Lane delta for movement actions.
    pub fn lane_delta(&self) -> Option<i8> {
        match self {
            GameAction::MoveLeft => Some(-1),
            GameAction::MoveRight => Some(1),
            _ => None,
        }
    }
}

/// Something observable that happened during a tick.
///
/// Adapters react to these (audio cues, high-score persistence) instead of
/// diffing state between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// A jumper landed in the net. `perfect` is false for a grace catch.
    Caught { lane: u8, perfect: bool, points: u32 },
    /// A jumper hit the ground.
    Missed { lane: u8 },
    /// The run just ended on its final miss.
    GameOver { score: u32, new_high_score: bool },
}

impl TickEvent {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickEvent::GameOver { .. })
    }
}
