use crate::actor::Actor;
use crate::types::{Mode, RunPhase, MAX_CONCURRENT_ACTORS, START_LANE, START_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorSnapshot {
    pub id: u32,
    pub lane: u8,
    pub depth: u8,
    pub hanging: bool,
}

impl From<&Actor> for ActorSnapshot {
    fn from(value: &Actor) -> Self {
        let cell = value.cell();
        Self {
            id: value.id,
            lane: cell.lane,
            depth: cell.depth,
            hanging: value.is_hanging(),
        }
    }
}

/// Read-only, allocation-free view of a run for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub phase: RunPhase,
    pub score: u32,
    pub high_score: u32,
    pub misses: u8,
    pub player_pos: u8,
    pub prev_player_pos: u8,
    pub tick_ms: u32,
    pub combo: u32,
    pub combo_timer_ms: u32,
    pub perfect_catches: u32,
    pub game_time_ms: u64,
    pub shake: u8,
    /// Alive jumpers in spawn order.
    pub actors: [Option<ActorSnapshot>; MAX_CONCURRENT_ACTORS],
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.phase == RunPhase::Running
    }

    pub fn alive_actors(&self) -> impl Iterator<Item = &ActorSnapshot> {
        self.actors.iter().flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            mode: Mode::A,
            phase: RunPhase::NotStarted,
            score: 0,
            high_score: 0,
            misses: 0,
            player_pos: START_LANE,
            prev_player_pos: START_LANE,
            tick_ms: START_TICK_MS,
            combo: 0,
            combo_timer_ms: 0,
            perfect_catches: 0,
            game_time_ms: 0,
            shake: 0,
            actors: [None; MAX_CONCURRENT_ACTORS],
        }
    }
}
